//! Integration, collision resolution, friction, and facing updates.

use bevy::prelude::*;

use crate::world::{rects_overlap, WorldMap};

use super::components::{Facing, Hitbox, Motion};
use crate::core::Direction;

/// Upper bound on a single integration step. A long stall (debugger,
/// suspended laptop) produces one clamped step instead of a tunnel
/// through geometry.
pub const MAX_STEP_SECONDS: f32 = 0.05;

/// Per-axis friction multiplier applied each tick to coasting axes.
const FRICTION: f32 = 0.8;
/// Speeds below this are snapped to zero to end the coast.
const REST_SPEED: f32 = 1.0;

/// Move every dynamic actor by its velocity, resolving block collision
/// one axis at a time.
///
/// Each axis is proposed and tested independently; a blocked axis is
/// cancelled and its velocity zeroed while the other axis proceeds, which
/// is what lets actors slide along walls. Flying actors skip blocks but
/// are still clamped to the world bounds.
pub fn integrate_and_collide(
    time: Res<Time>,
    map: Res<WorldMap>,
    mut actors: Query<(&mut Transform, &mut Motion, &Hitbox)>,
) {
    let dt = time.delta_secs().min(MAX_STEP_SECONDS);
    if dt <= 0.0 {
        return;
    }

    for (mut transform, mut motion, hitbox) in &mut actors {
        let mut pos = transform.translation.truncate();

        let step_x = Vec2::new(motion.velocity.x * dt, 0.0);
        if step_x.x != 0.0 {
            let proposed = pos + step_x;
            if motion.can_fly || !hits_block(&map, hitbox.rect_at(proposed)) {
                pos = proposed;
            } else {
                motion.velocity.x = 0.0;
            }
        }

        let step_y = Vec2::new(0.0, motion.velocity.y * dt);
        if step_y.y != 0.0 {
            let proposed = pos + step_y;
            if motion.can_fly || !hits_block(&map, hitbox.rect_at(proposed)) {
                pos = proposed;
            } else {
                motion.velocity.y = 0.0;
            }
        }

        pos = clamp_to_bounds(pos, hitbox.half, map.bounds);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}

fn hits_block(map: &WorldMap, rect: Rect) -> bool {
    map.blocks.iter().any(|b| rects_overlap(rect, b.rect))
}

/// Keep the hitbox inside the world bounds. A hitbox wider than the
/// world collapses to the bounds center rather than oscillating.
fn clamp_to_bounds(pos: Vec2, half: Vec2, bounds: Rect) -> Vec2 {
    let min = bounds.min + half;
    let max = bounds.max - half;
    Vec2::new(
        if min.x <= max.x {
            pos.x.clamp(min.x, max.x)
        } else {
            bounds.center().x
        },
        if min.y <= max.y {
            pos.y.clamp(min.y, max.y)
        } else {
            bounds.center().y
        },
    )
}

/// Decay velocity on axes that received no input this tick, then clear
/// the driven flags for the next one.
pub fn apply_friction(mut actors: Query<&mut Motion>) {
    for mut motion in &mut actors {
        if !motion.driven_x {
            motion.velocity.x *= FRICTION;
            if motion.velocity.x.abs() < REST_SPEED {
                motion.velocity.x = 0.0;
            }
        }
        if !motion.driven_y {
            motion.velocity.y *= FRICTION;
            if motion.velocity.y.abs() < REST_SPEED {
                motion.velocity.y = 0.0;
            }
        }
        motion.driven_x = false;
        motion.driven_y = false;
    }
}

/// Track the last deliberate movement direction. Idle actors keep their
/// previous facing so aim never resets to a default mid-fight.
pub fn update_facing(mut actors: Query<(&Motion, &mut Facing)>) {
    for (motion, mut facing) in &mut actors {
        let dir = Direction::from_vec(motion.velocity);
        if dir != Direction::None {
            facing.0 = dir;
        }
    }
}
