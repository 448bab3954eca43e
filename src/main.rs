//! Headless driver: runs the simulation with a scripted pilot.
//!
//! This binary stands in for a real frontend. It starts the game from the
//! title screen, walks the player around while casting now and then, and
//! shuts down after a fixed demo run. A graphical client would replace
//! only this layer.

use std::time::Duration;

use bevy::app::{AppExit, ScheduleRunnerPlugin};
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use grimward::core::{Direction, GameState, PlayerIntent};
use grimward::GrimwardPlugin;

/// Wall-clock length of the scripted demo run.
const DEMO_SECONDS: f32 = 30.0;

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(bevy::log::LogPlugin::default())
        .add_plugins(StatesPlugin)
        .add_plugins(GrimwardPlugin)
        .init_resource::<DemoClock>()
        .add_systems(PreUpdate, (pilot, end_demo))
        .run();
}

#[derive(Resource, Default)]
struct DemoClock {
    elapsed: f32,
}

const PATROL: [Direction; 4] = [
    Direction::East,
    Direction::North,
    Direction::West,
    Direction::South,
];

/// Scripted stand-in for a human: press through the menus, patrol in a
/// square, and fire a bullet roughly twice a second.
fn pilot(
    state: Res<State<GameState>>,
    clock: Res<DemoClock>,
    mut intent: ResMut<PlayerIntent>,
) {
    match state.get() {
        GameState::Title => intent.start = true,
        GameState::GameOver => intent.confirm = true,
        GameState::Playing => {
            let leg = (clock.elapsed / 2.0) as usize % PATROL.len();
            intent.move_dir = PATROL[leg];
            let phase = clock.elapsed % 0.5;
            intent.cast_primary = phase < 0.02;
            intent.interact = true;
        }
        GameState::Loading => {}
    }
}

fn end_demo(
    time: Res<Time>,
    mut clock: ResMut<DemoClock>,
    mut exit: EventWriter<AppExit>,
) {
    clock.elapsed += time.delta_secs();
    if clock.elapsed >= DEMO_SECONDS {
        info!("demo run complete");
        exit.send(AppExit::Success);
    }
}
