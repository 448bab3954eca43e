//! Enemies plugin: data loading, AI, and corpse cleanup.

use bevy::prelude::*;

use crate::combat::apply_damage;
use crate::core::{GameState, SimSet};

use super::ai::{despawn_dead_mobs, handle_mob_death, mob_ai};
use super::data::load_mob_definitions;

pub struct EnemiesPlugin;

impl Plugin for EnemiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_mob_definitions)
            .add_systems(Update, mob_ai.in_set(SimSet::Ai))
            .add_systems(
                Update,
                handle_mob_death
                    .in_set(SimSet::Combat)
                    .after(apply_damage),
            )
            .add_systems(Update, despawn_dead_mobs.in_set(SimSet::Cleanup));
    }
}
