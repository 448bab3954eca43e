//! World plugin: map loading and the play-state reset hook.

use bevy::prelude::*;

use crate::core::GameState;

use super::map::load_world_map;
use super::spawning::reset_world;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_world_map)
            .add_systems(OnEnter(GameState::Playing), reset_world);
    }
}
