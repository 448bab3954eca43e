//! Tile adjacency and breadth-first pathfinding over the static map.
//!
//! Adjacency is computed lazily from geometry rather than stored on the
//! objects: two tiles are neighbors when their centers sit exactly one
//! tile apart on a single axis. Diagonals are not adjacent.

use bevy::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};

use super::map::WorldMap;
use super::object::{MapObject, TILE_SIZE};

/// Quantized tile key for visited-set bookkeeping. Tile centers land on a
/// 32-unit lattice, so rounding to integers is exact in practice.
fn tile_key(center: Vec2) -> (i32, i32) {
    (center.x.round() as i32, center.y.round() as i32)
}

/// The 4-connected neighbors of a map object, same kind only.
///
/// A tile's neighbors are tiles; a block's neighbors are blocks. The
/// lookup probes one tile spacing in each cardinal direction and keeps
/// whatever object of the matching kind contains that point.
pub fn object_neighbors<'a>(map: &'a WorldMap, object: &MapObject) -> Vec<&'a MapObject> {
    const OFFSETS: [Vec2; 4] = [
        Vec2::new(TILE_SIZE, 0.0),
        Vec2::new(-TILE_SIZE, 0.0),
        Vec2::new(0.0, TILE_SIZE),
        Vec2::new(0.0, -TILE_SIZE),
    ];

    let mut neighbors = Vec::with_capacity(4);
    for offset in OFFSETS {
        let probe = object.center + offset;
        for candidate in map.objects_at(probe) {
            if candidate.kind == object.kind && candidate.center != object.center {
                neighbors.push(candidate);
            }
        }
    }
    neighbors
}

/// Shortest tile path between two world points, breadth-first.
///
/// Both endpoints are clamped to their nearest tiles. The returned path
/// is a list of tile centers from start to goal inclusive, or `None` when
/// the goal tile is unreachable (or the world has no tiles at all).
pub fn find_path(map: &WorldMap, from: Vec2, to: Vec2) -> Option<Vec<Vec2>> {
    let start = map.nearest_tile(from)?;
    let goal = map.nearest_tile(to)?;
    let goal_key = tile_key(goal.center);

    let mut visited: HashSet<(i32, i32)> = HashSet::new();
    let mut came_from: HashMap<(i32, i32), Vec2> = HashMap::new();
    let mut frontier: VecDeque<&MapObject> = VecDeque::new();

    visited.insert(tile_key(start.center));
    frontier.push_back(start);

    while let Some(tile) = frontier.pop_front() {
        let key = tile_key(tile.center);
        if key == goal_key {
            // Walk predecessors back to the start, then reverse.
            let mut path = vec![tile.center];
            let mut cursor = key;
            while let Some(&prev) = came_from.get(&cursor) {
                path.push(prev);
                cursor = tile_key(prev);
            }
            path.reverse();
            return Some(path);
        }

        for neighbor in object_neighbors(map, tile) {
            let neighbor_key = tile_key(neighbor.center);
            if visited.insert(neighbor_key) {
                came_from.insert(neighbor_key, tile.center);
                frontier.push_back(neighbor);
            }
        }
    }
    None
}
