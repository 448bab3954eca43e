//! Static world: the spatial object model, map loading, and the tile graph.

mod error;
mod graph;
mod map;
mod object;
mod plugin;
mod spawning;

pub use error::{MapLoadError, EXIT_CODE_LOAD_FAILED};
pub use graph::{find_path, object_neighbors};
pub use map::{load_map_file, parse_map, RawMapObject, WorldMap};
pub use object::{rects_overlap, MapObject, ObjectKind, BLOCK_SPRITE, TILE_HALF, TILE_SIZE};
pub use plugin::WorldPlugin;
