//! The spatial object model: static tiles and blocks as axis-aligned rects.

use bevy::prelude::*;
use serde::Deserialize;

/// Tile spacing in world units; tiles and blocks are 32x32 rectangles.
pub const TILE_SIZE: f32 = 32.0;
/// Half a tile, used to build a tile rect around its center.
pub const TILE_HALF: f32 = 16.0;

/// Sprite index that always means "block", whatever the document says.
/// Load-time normalization fixes this one known special index.
pub const BLOCK_SPRITE: usize = 53;

/// What a map object is. Kind is a tag fixed at load time, not a class
/// hierarchy - one flat struct serves every static object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum ObjectKind {
    /// Static walkable ground
    Tile,
    /// Static non-walkable obstacle
    Block,
    /// Dynamic actor (lives in the ECS, not the static map)
    Entity,
    /// Pickup (lives in the ECS, not the static map)
    Item,
    /// Not yet classified; the loader normalizes this away
    #[default]
    Unset,
}

/// A static map object: a rectangle anchored at a world-space center.
///
/// Tiles and blocks are plain data owned by the [`WorldMap`]; dynamic
/// entities and items live in the ECS instead and only share the kind
/// vocabulary.
///
/// [`WorldMap`]: super::map::WorldMap
#[derive(Debug, Clone, PartialEq)]
pub struct MapObject {
    /// World-space anchor, always the rect center after load
    pub center: Vec2,
    /// Collision/render extent
    pub rect: Rect,
    /// Fixed at load; never changes afterwards
    pub kind: ObjectKind,
    /// Opaque reference into the external sprite atlas
    pub sprite: usize,
    /// Skipped by renderers; still collides
    pub invisible: bool,
    /// Reserved flag carried through from the document
    pub special: bool,
}

impl MapObject {
    fn at(center: Vec2, kind: ObjectKind) -> Self {
        Self {
            center,
            rect: Rect::from_center_half_size(center, Vec2::splat(TILE_HALF)),
            kind,
            sprite: 0,
            invisible: false,
            special: false,
        }
    }

    pub fn tile(center: Vec2) -> Self {
        Self::at(center, ObjectKind::Tile)
    }

    pub fn block(center: Vec2) -> Self {
        Self::at(center, ObjectKind::Block)
    }

    /// Whether the point falls inside this object's rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}

/// Overlap test for collision: touching edges do not count as overlap,
/// so flush contact with a wall never re-triggers resolution.
pub fn rects_overlap(a: Rect, b: Rect) -> bool {
    !a.intersect(b).is_empty()
}
