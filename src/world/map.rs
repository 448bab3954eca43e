//! The world map: ordered object collections, spatial queries, RON loading.

use bevy::app::AppExit;
use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use crate::core::{GameState, SimConfig, SimRng};

use super::error::{MapLoadError, EXIT_CODE_LOAD_FAILED};
use super::object::{MapObject, ObjectKind, BLOCK_SPRITE, TILE_HALF};

/// Optional property flags on a raw map entry.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawObjectProps {
    #[serde(default)]
    pub invisible: bool,
    #[serde(default)]
    pub special: bool,
}

/// One entry of the map document as read from RON.
///
/// An entry carries either a `loc` (a 32x32 object centered there) or an
/// explicit `rect`. Kind is usually implied by the sprite index; entries
/// default to `Unset` and are normalized at load time.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMapObject {
    #[serde(default)]
    pub loc: Option<(f32, f32)>,
    #[serde(default)]
    pub rect: Option<((f32, f32), (f32, f32))>,
    #[serde(default)]
    pub sprite: usize,
    #[serde(default)]
    pub kind: ObjectKind,
    #[serde(default)]
    pub props: RawObjectProps,
}

/// The aggregate root of the static world.
///
/// Owns every tile and block exclusively; `objects` is the superset in
/// document order, and each Tile/Block appears in exactly one of
/// `tiles`/`blocks`. Insertion order is preserved everywhere so iteration
/// and tie-breaking stay deterministic.
#[derive(Resource, Debug, Default)]
pub struct WorldMap {
    pub tiles: Vec<MapObject>,
    pub blocks: Vec<MapObject>,
    pub objects: Vec<MapObject>,
    /// Union of all object rects; entities are clamped inside this.
    pub bounds: Rect,
}

impl WorldMap {
    /// Build a map from already-normalized objects.
    pub fn from_objects(objects: Vec<MapObject>) -> Self {
        let mut map = WorldMap::default();
        for object in objects {
            map.push(object);
        }
        map
    }

    fn push(&mut self, object: MapObject) {
        match object.kind {
            ObjectKind::Tile => self.tiles.push(object.clone()),
            ObjectKind::Block => self.blocks.push(object.clone()),
            _ => {}
        }
        self.bounds = if self.objects.is_empty() {
            object.rect
        } else {
            self.bounds.union(object.rect)
        };
        self.objects.push(object);
    }

    /// Every object whose rectangle contains the point, any kind.
    pub fn objects_at(&self, point: Vec2) -> Vec<&MapObject> {
        self.objects.iter().filter(|o| o.contains(point)).collect()
    }

    /// Kind-filtered view over [`Self::objects_at`]: tiles only.
    pub fn tiles_at(&self, point: Vec2) -> Vec<&MapObject> {
        self.objects_at(point)
            .into_iter()
            .filter(|o| o.kind == ObjectKind::Tile)
            .collect()
    }

    /// Kind-filtered view over [`Self::objects_at`]: blocks only.
    pub fn blocks_at(&self, point: Vec2) -> Vec<&MapObject> {
        self.objects_at(point)
            .into_iter()
            .filter(|o| o.kind == ObjectKind::Block)
            .collect()
    }

    /// First tile containing the point, in document order.
    pub fn tile_at(&self, point: Vec2) -> Option<&MapObject> {
        self.tiles.iter().find(|t| t.contains(point))
    }

    /// The tile whose center is closest to the point.
    ///
    /// Ties break toward the first-encountered tile in document order,
    /// which keeps respawn/teleport clamping deterministic.
    pub fn nearest_tile(&self, point: Vec2) -> Option<&MapObject> {
        let mut best: Option<(&MapObject, f32)> = None;
        for tile in &self.tiles {
            let dist = tile.center.distance_squared(point);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((tile, dist)),
            }
        }
        best.map(|(tile, _)| tile)
    }

    /// Uniform-random tile center. Returns the zero point when the world
    /// has no tiles - a documented degenerate case, not an error.
    pub fn random_tile(&self, rng: &mut SimRng) -> Vec2 {
        if self.tiles.is_empty() {
            return Vec2::ZERO;
        }
        self.tiles[rng.index(self.tiles.len())].center
    }
}

/// Normalize a raw document entry into a [`MapObject`].
///
/// Sprite index 53 is always a block; otherwise `Unset` entries default to
/// tiles. Entries with neither a loc nor a rect are dropped.
fn normalize(raw: &RawMapObject) -> Option<MapObject> {
    let (center, rect) = match (raw.loc, raw.rect) {
        (Some((x, y)), _) => {
            let center = Vec2::new(x, y);
            (
                center,
                Rect::from_center_half_size(center, Vec2::splat(TILE_HALF)),
            )
        }
        (None, Some(((min_x, min_y), (max_x, max_y)))) => {
            let rect = Rect::new(min_x, min_y, max_x, max_y);
            (rect.center(), rect)
        }
        (None, None) => return None,
    };

    let kind = if raw.sprite == BLOCK_SPRITE {
        ObjectKind::Block
    } else {
        match raw.kind {
            ObjectKind::Tile | ObjectKind::Block => raw.kind,
            _ => ObjectKind::Tile,
        }
    };

    Some(MapObject {
        center,
        rect,
        kind,
        sprite: raw.sprite,
        invisible: raw.props.invisible,
        special: raw.props.special,
    })
}

/// Parse a map document from RON text.
pub fn parse_map(path: &str, contents: &str) -> Result<WorldMap, MapLoadError> {
    let raw: Vec<RawMapObject> =
        ron::from_str(contents).map_err(|e| MapLoadError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;

    let map = WorldMap::from_objects(raw.iter().filter_map(normalize).collect());
    if map.tiles.is_empty() && map.blocks.is_empty() {
        return Err(MapLoadError::Empty {
            path: path.to_string(),
        });
    }
    Ok(map)
}

/// Load the map document from disk.
pub fn load_map_file(path: &str) -> Result<WorldMap, MapLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| MapLoadError::ReadError {
        path: path.to_string(),
        details: e.to_string(),
    })?;
    parse_map(path, &contents)
}

/// Load the world map once at construction, then move on to the title
/// screen. A bad or missing map is fatal: the failure is logged and the
/// process exits with a fixed non-zero code.
pub fn load_world_map(
    mut commands: Commands,
    config: Res<SimConfig>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: EventWriter<AppExit>,
) {
    match load_map_file(&config.map_path) {
        Ok(map) => {
            info!(
                "loaded map '{}': {} tiles, {} blocks",
                config.map_path,
                map.tiles.len(),
                map.blocks.len()
            );
            commands.insert_resource(map);
            next_state.set(GameState::Title);
        }
        Err(e) => {
            error!("error loading map: {e}");
            exit.send(AppExit::from_code(EXIT_CODE_LOAD_FAILED));
        }
    }
}
