//! Physics plugin: integration, collision, friction, facing.

use bevy::prelude::*;

use crate::core::SimSet;

use super::systems::{apply_friction, integrate_and_collide, update_facing};

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (integrate_and_collide, update_facing, apply_friction)
                .chain()
                .in_set(SimSet::Physics),
        );
    }
}
