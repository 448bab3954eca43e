//! The player character: control, vitals, and progression.

mod components;
mod plugin;
mod progression;
mod systems;

pub use components::{ManaRegen, Player, PlayerStats, PLAYER_HEALTH, PLAYER_MANA, PLAYER_SPEED};
pub use plugin::PlayerPlugin;
pub use systems::{respawn_player, spawn_player};
