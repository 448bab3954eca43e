//! End-to-end simulation runs against the shipped assets.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use grimward::combat::{Health, Mana, STAT_MAX};
use grimward::core::{DamageEvent, GameState, PlayerIntent};
use grimward::enemies::Enemy;
use grimward::items::Item;
use grimward::player::{Player, PlayerStats};
use grimward::world::WorldMap;
use grimward::GrimwardPlugin;

fn boot() -> App {
    let mut app = App::new();
    app.add_plugins(StatesPlugin);
    app.add_plugins(GrimwardPlugin);
    app
}

fn step(app: &mut App) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(1.0 / 60.0));
    app.update();
}

/// Boot through Loading and Title into Playing. Returns with the world
/// populated and one frame of play already simulated.
fn boot_to_playing(app: &mut App) {
    // Frame 1: initial transition loads the map and queues Title.
    step(app);
    assert!(app.world().contains_resource::<WorldMap>());

    // Frame 2: on the title screen, press start.
    app.world_mut().resource_mut::<PlayerIntent>().start = true;
    step(app);

    // Frame 3: entering Playing populates the world.
    step(app);
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::Playing
    );
}

fn mob_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<(), With<Enemy>>()
        .iter(app.world())
        .count()
}

#[test]
fn boot_sequence_reaches_playing_with_a_populated_world() {
    let mut app = boot();
    boot_to_playing(&mut app);

    let map = app.world().resource::<WorldMap>();
    assert!(!map.tiles.is_empty());
    assert!(!map.blocks.is_empty());

    let players = app
        .world_mut()
        .query_filtered::<(), With<Player>>()
        .iter(app.world())
        .count();
    assert_eq!(players, 1);
    assert_eq!(mob_count(&mut app), 2, "default spawn batch");
}

#[test]
fn vitals_stay_in_range_over_a_long_run() {
    let mut app = boot();
    boot_to_playing(&mut app);

    // Twenty simulated seconds of mobs chasing and casting.
    for _ in 0..1200 {
        step(&mut app);
        let mut vitals = app.world_mut().query::<(&Health, Option<&Mana>)>();
        for (health, mana) in vitals.iter(app.world()) {
            assert!((0..=STAT_MAX).contains(&health.current()));
            if let Some(mana) = mana {
                assert!((0..=STAT_MAX).contains(&mana.current()));
            }
        }
    }
}

#[test]
fn killed_mob_drops_loot_and_credits_the_player() {
    let mut app = boot();
    boot_to_playing(&mut app);

    let player = app
        .world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world());
    let mob = app
        .world_mut()
        .query_filtered::<Entity, With<Enemy>>()
        .iter(app.world())
        .next()
        .expect("mobs spawned");

    app.world_mut().send_event(DamageEvent {
        target: mob,
        source: Some(player),
        amount: 999,
    });
    step(&mut app);

    assert_eq!(mob_count(&mut app), 1, "the corpse was swept");
    let items = app
        .world_mut()
        .query_filtered::<(), With<Item>>()
        .iter(app.world())
        .count();
    assert_eq!(items, 1, "exactly one drop");
    let stats = app.world().entity(player).get::<PlayerStats>().unwrap();
    assert_eq!(stats.kills, 1);
}

#[test]
fn player_death_ends_the_run_and_reset_respawns_everything() {
    let mut app = boot();
    boot_to_playing(&mut app);

    let player = app
        .world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world());

    app.world_mut().send_event(DamageEvent {
        target: player,
        source: None,
        amount: 999,
    });
    step(&mut app);
    // Transition applies on the following frame.
    step(&mut app);
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::GameOver
    );
    // The player entity survives its death for the end screen.
    assert!(app.world().get::<PlayerStats>(player).is_some());

    // Confirm back to the title, then start a fresh run.
    app.world_mut().resource_mut::<PlayerIntent>().confirm = true;
    step(&mut app);
    step(&mut app);
    app.world_mut().resource_mut::<PlayerIntent>().start = true;
    step(&mut app);
    step(&mut app);

    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::Playing
    );
    let health = app.world().entity(player).get::<Health>().unwrap();
    assert!(health.current() > 0, "vitals were re-seeded");
    assert_eq!(mob_count(&mut app), 2, "a fresh batch of mobs");
}

#[test]
fn identical_seeds_produce_identical_runs() {
    let mut positions = Vec::new();
    for _ in 0..2 {
        let mut app = boot();
        boot_to_playing(&mut app);
        for _ in 0..120 {
            app.world_mut().resource_mut::<PlayerIntent>().move_dir =
                grimward::core::Direction::East;
            step(&mut app);
        }
        let pos = app
            .world_mut()
            .query_filtered::<&Transform, With<Player>>()
            .single(app.world())
            .translation;
        positions.push(pos);
    }
    assert_eq!(positions[0], positions[1]);
}
