//! Death handling and experience: the player's side of the death events.

use bevy::prelude::*;

use crate::combat::{Health, Mana};
use crate::core::{DeathEvent, GameState, LevelUpEvent};
use crate::enemies::XpReward;
use crate::items::Inventory;

use super::components::{Player, PlayerStats};

/// Health and mana restored as a level-up perk.
const LEVEL_UP_RESTORE: i32 = 25;

/// End the run when the player dies. The player entity is kept around so
/// the game-over screen (and a later reset) can still read its stats.
pub fn check_player_death(
    mut deaths: EventReader<DeathEvent>,
    player: Query<Entity, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(player_entity) = player.get_single() else {
        return;
    };
    for event in deaths.read() {
        if event.entity == player_entity {
            info!("player died");
            next_state.set(GameState::GameOver);
        }
    }
}

/// Credit kills and experience for mobs the player brought down, leveling
/// up when a threshold is crossed.
pub fn award_kills(
    mut deaths: EventReader<DeathEvent>,
    rewards: Query<&XpReward>,
    mut player: Query<(Entity, &mut PlayerStats, &mut Health, &mut Mana), With<Player>>,
    mut level_ups: EventWriter<LevelUpEvent>,
) {
    let Ok((player_entity, mut stats, mut health, mut mana)) = player.get_single_mut() else {
        return;
    };
    for event in deaths.read() {
        if event.killed_by != Some(player_entity) {
            continue;
        }
        let Ok(reward) = rewards.get(event.entity) else {
            continue;
        };
        stats.kills += 1;
        if stats.gain_xp(reward.0) {
            info!("player reached level {}", stats.level);
            health.restore(LEVEL_UP_RESTORE);
            mana.restore(LEVEL_UP_RESTORE);
            level_ups.send(LevelUpEvent {
                player: player_entity,
                new_level: stats.level,
            });
        }
    }
}

/// Final report when the run ends.
pub fn log_game_over(player: Query<(&PlayerStats, &Inventory), With<Player>>) {
    let Ok((stats, inventory)) = player.get_single() else {
        return;
    };
    info!(
        "game over: level {}, {} kills, {} gold",
        stats.level,
        stats.kills,
        inventory.gold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(StatesPlugin);
        app.init_state::<GameState>();
        app.add_event::<DeathEvent>();
        app.add_event::<LevelUpEvent>();
        app.add_systems(Update, (check_player_death, award_kills));
        app
    }

    fn spawn_stat_player(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                Player,
                PlayerStats::default(),
                Health::new(50),
                Mana::new(10),
                Inventory::default(),
            ))
            .id()
    }

    #[test]
    fn player_kill_awards_xp_and_counts() {
        let mut app = test_app();
        let player = spawn_stat_player(&mut app);
        let mob = app.world_mut().spawn(XpReward(40)).id();

        app.world_mut().send_event(DeathEvent {
            entity: mob,
            killed_by: Some(player),
        });
        app.update();

        let stats = app.world().entity(player).get::<PlayerStats>().unwrap();
        assert_eq!(stats.kills, 1);
        assert_eq!(stats.xp, 40);
        assert_eq!(stats.level, 1);
    }

    #[test]
    fn unattributed_deaths_award_nothing() {
        let mut app = test_app();
        let player = spawn_stat_player(&mut app);
        let mob = app.world_mut().spawn(XpReward(40)).id();

        app.world_mut().send_event(DeathEvent {
            entity: mob,
            killed_by: None,
        });
        app.update();

        let stats = app.world().entity(player).get::<PlayerStats>().unwrap();
        assert_eq!(stats.kills, 0);
        assert_eq!(stats.xp, 0);
    }

    #[test]
    fn crossing_the_threshold_levels_and_restores_vitals() {
        let mut app = test_app();
        let player = spawn_stat_player(&mut app);
        for _ in 0..3 {
            let mob = app.world_mut().spawn(XpReward(40)).id();
            app.world_mut().send_event(DeathEvent {
                entity: mob,
                killed_by: Some(player),
            });
        }
        app.update();

        let stats = app.world().entity(player).get::<PlayerStats>().unwrap();
        assert_eq!(stats.level, 2);
        assert_eq!(stats.xp, 20);
        assert_eq!(
            app.world().entity(player).get::<Health>().unwrap().current(),
            75
        );
        assert_eq!(app.world().resource::<Events<LevelUpEvent>>().len(), 1);
    }

    #[test]
    fn player_death_moves_to_game_over() {
        let mut app = test_app();
        let player = spawn_stat_player(&mut app);

        app.world_mut().send_event(DeathEvent {
            entity: player,
            killed_by: None,
        });
        app.update();
        // One more frame for the queued transition to apply.
        app.update();

        assert_eq!(
            *app.world().resource::<State<GameState>>().get(),
            GameState::GameOver
        );
    }
}
