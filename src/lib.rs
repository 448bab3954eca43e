//! Grimward is a renderer-agnostic 2D action-RPG simulation.
//!
//! The crate owns the world model and the per-tick rules (movement,
//! collision, mob AI, spells, loot, progression) and exposes them as Bevy
//! plugins. Rendering, audio, and real input devices are collaborator
//! concerns: a frontend writes a [`core::PlayerIntent`] each frame and
//! draws whatever entity state it finds afterwards.
//!
//! The per-tick order is fixed: input, physics, AI, combat, cleanup.

pub mod combat;
pub mod core;
pub mod enemies;
pub mod items;
pub mod physics;
pub mod player;
pub mod world;

use bevy::prelude::*;

/// All simulation plugins in dependency order. Add this (plus Bevy's
/// state plugin and a schedule runner) to get a complete headless game.
pub struct GrimwardPlugin;

impl Plugin for GrimwardPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            world::WorldPlugin,
            physics::PhysicsPlugin,
            player::PlayerPlugin,
            enemies::EnemiesPlugin,
            combat::CombatPlugin,
            items::ItemsPlugin,
        ));
    }
}
