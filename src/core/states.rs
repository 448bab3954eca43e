//! Game state definitions that control the overall flow of the simulation.
//!
//! States determine which systems run at any given time. The per-tick
//! simulation sets only run in the Playing state; the title and game-over
//! screens are thin frontend concerns that feed intents back in.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `Loading` to load the map document and mob definitions
/// - Move to `Title` when loading completes
/// - Enter `Playing` on the start intent; entering re-runs the world reset
///   (player stats re-seeded, mobs respawned, effects cleared)
/// - `GameOver` when the player dies; the confirm intent returns to `Title`
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading the map and data files
    #[default]
    Loading,
    /// Title screen, waiting for the start intent
    Title,
    /// Active simulation
    Playing,
    /// Player has died
    GameOver,
}

/// Per-tick simulation order, chained while in `GameState::Playing`.
///
/// The spine of every tick: input intents are applied, physics integrates
/// velocity and resolves collisions, AI picks its moves, combat advances
/// effects and applies damage, and the cleanup sweeps remove dead entities,
/// expired items and expended effects.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Input,
    Physics,
    Ai,
    Combat,
    Cleanup,
}
