//! Eight-way facing used for movement intents and effect directions.

use bevy::prelude::*;

/// Facing direction: eight compass points plus idle.
///
/// Movement intents, entity facing and projectile directions all share this
/// vocabulary. `None` means "not facing anywhere" (an idle entity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Unit vector for this direction (diagonals are normalized).
    pub fn unit(self) -> Vec2 {
        const DIAG: f32 = std::f32::consts::FRAC_1_SQRT_2;
        match self {
            Direction::None => Vec2::ZERO,
            Direction::North => Vec2::Y,
            Direction::South => Vec2::NEG_Y,
            Direction::East => Vec2::X,
            Direction::West => Vec2::NEG_X,
            Direction::NorthEast => Vec2::new(DIAG, DIAG),
            Direction::NorthWest => Vec2::new(-DIAG, DIAG),
            Direction::SouthEast => Vec2::new(DIAG, -DIAG),
            Direction::SouthWest => Vec2::new(-DIAG, -DIAG),
        }
    }

    /// Map a vector onto the nearest of the eight directions.
    ///
    /// Diagonals win whenever both axes carry comparable weight, so a
    /// simultaneous Up+Left drive reads as NorthWest rather than whichever
    /// single axis happens to be marginally larger.
    pub fn from_vec(v: Vec2) -> Self {
        const EPS: f32 = 1e-3;
        if v.length_squared() <= EPS * EPS {
            return Direction::None;
        }

        let ax = v.x.abs();
        let ay = v.y.abs();
        let diagonal = ax > EPS && ay > EPS && ax.min(ay) / ax.max(ay) > 0.5;

        if diagonal {
            match (v.x > 0.0, v.y > 0.0) {
                (true, true) => Direction::NorthEast,
                (false, true) => Direction::NorthWest,
                (true, false) => Direction::SouthEast,
                (false, false) => Direction::SouthWest,
            }
        } else if ax >= ay {
            if v.x > 0.0 {
                Direction::East
            } else {
                Direction::West
            }
        } else if v.y > 0.0 {
            Direction::North
        } else {
            Direction::South
        }
    }

    pub fn is_none(self) -> bool {
        matches!(self, Direction::None)
    }
}
