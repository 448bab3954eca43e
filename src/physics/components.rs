//! Movement and collision components shared by all dynamic actors.

use bevy::prelude::*;

use crate::core::Direction;

/// Velocity-driven movement state.
///
/// `driven_x`/`driven_y` mark axes that received deliberate input this
/// tick; friction only decays the other axes, so steering stays crisp
/// while released axes coast to a stop.
#[derive(Component, Debug, Clone)]
pub struct Motion {
    /// World units per second
    pub velocity: Vec2,
    /// Cruising speed used by steering systems
    pub run_speed: f32,
    /// Flying actors ignore block collision (but not world bounds)
    pub can_fly: bool,
    pub driven_x: bool,
    pub driven_y: bool,
}

impl Motion {
    pub fn walking(run_speed: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            run_speed,
            can_fly: false,
            driven_x: false,
            driven_y: false,
        }
    }

    pub fn flying(run_speed: f32) -> Self {
        Self {
            can_fly: true,
            ..Self::walking(run_speed)
        }
    }

    /// Set velocity from a steering direction at cruising speed and mark
    /// the moved axes as driven for this tick.
    pub fn steer(&mut self, dir: Direction) {
        let unit = dir.unit();
        self.velocity = unit * self.run_speed;
        self.driven_x = unit.x != 0.0;
        self.driven_y = unit.y != 0.0;
    }
}

/// Axis-aligned collision extent around the entity's translation.
#[derive(Component, Debug, Clone, Copy)]
pub struct Hitbox {
    pub half: Vec2,
}

impl Hitbox {
    pub fn square(half: f32) -> Self {
        Self {
            half: Vec2::splat(half),
        }
    }

    /// The world-space rect for an entity centered at `pos`.
    pub fn rect_at(&self, pos: Vec2) -> Rect {
        Rect::from_center_half_size(pos, self.half)
    }
}

/// Last deliberate movement direction; drives aiming and idle pose.
#[derive(Component, Debug, Clone, Copy)]
pub struct Facing(pub Direction);

impl Default for Facing {
    fn default() -> Self {
        Facing(Direction::South)
    }
}
