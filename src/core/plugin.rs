//! Core plugin that sets up game states, events, and tick ordering.

use bevy::prelude::*;

use super::events::*;
use super::intent::{clear_intent, PlayerIntent};
use super::rng::{seed_rng, SimConfig};
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, Title, Playing, GameOver)
/// - The chained per-tick simulation sets
/// - Global events (DamageEvent, DeathEvent, etc.)
/// - The seeded RNG and the input intent resource
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()
            // Register global events
            .add_event::<DamageEvent>()
            .add_event::<DeathEvent>()
            .add_event::<ItemPickupEvent>()
            .add_event::<LevelUpEvent>()
            // Driver-facing resources. Time is normally owned by TimePlugin;
            // headless test apps get a manually advanced default instead.
            .init_resource::<SimConfig>()
            .init_resource::<PlayerIntent>()
            .init_resource::<Time>()
            .add_systems(Startup, seed_rng)
            // The per-tick update order: input -> physics -> AI -> combat -> cleanup
            .configure_sets(
                Update,
                (
                    SimSet::Input,
                    SimSet::Physics,
                    SimSet::Ai,
                    SimSet::Combat,
                    SimSet::Cleanup,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            // Menu flow driven by intents rather than the render loop
            .add_systems(Update, start_game.run_if(in_state(GameState::Title)))
            .add_systems(
                Update,
                confirm_game_over.run_if(in_state(GameState::GameOver)),
            )
            // Intents are one-frame values
            .add_systems(PostUpdate, clear_intent);
    }
}

/// Leave the title screen when the start intent fires.
fn start_game(intent: Res<PlayerIntent>, mut next_state: ResMut<NextState<GameState>>) {
    if intent.start {
        info!("starting game");
        next_state.set(GameState::Playing);
    }
}

/// Return to the title screen from game over.
fn confirm_game_over(intent: Res<PlayerIntent>, mut next_state: ResMut<NextState<GameState>>) {
    if intent.confirm {
        next_state.set(GameState::Title);
    }
}
