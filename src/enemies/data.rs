//! Mob definitions loaded from RON data files.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Directory scanned for mob definition files.
pub const MOB_DATA_DIR: &str = "assets/data/mobs";

/// Stat block for one mob kind, as authored in `assets/data/mobs/*.ron`.
#[derive(Debug, Clone, Deserialize)]
pub struct MobDefinition {
    pub name: String,
    pub max_health: i32,
    pub max_mana: i32,
    /// Walking speed in world units per second
    pub move_speed: f32,
    /// Distance at which the mob notices the player
    pub aggro_radius: f32,
    /// Distance at which the mob stops chasing and starts casting
    pub attack_range: f32,
    /// Seconds between casts while attacking
    pub attack_cooldown: f32,
    /// Experience granted to the killer
    pub xp_value: u32,
    /// Sprite atlas index for renderers
    pub sprite: usize,
}

impl MobDefinition {
    /// Built-in fallback so a missing data directory still yields a
    /// playable world.
    fn skeleton() -> Self {
        Self {
            name: "skeleton".to_string(),
            max_health: 20,
            max_mana: 20,
            move_speed: 60.0,
            aggro_radius: 160.0,
            attack_range: 96.0,
            attack_cooldown: 1.2,
            xp_value: 10,
            sprite: 21,
        }
    }
}

/// All known mob kinds, keyed by name. Iteration order follows the
/// sorted file names so spawn batches are deterministic.
#[derive(Resource, Debug, Default)]
pub struct MobRegistry {
    definitions: HashMap<String, MobDefinition>,
    order: Vec<String>,
}

impl MobRegistry {
    pub fn insert(&mut self, def: MobDefinition) {
        if !self.definitions.contains_key(&def.name) {
            self.order.push(def.name.clone());
        }
        self.definitions.insert(def.name.clone(), def);
    }

    pub fn get(&self, name: &str) -> Option<&MobDefinition> {
        self.definitions.get(name)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names for a spawn batch of `count` mobs, cycling through the
    /// registered kinds in order. Empty registry yields an empty batch.
    pub fn spawn_cycle(&self, count: usize) -> Vec<String> {
        if self.order.is_empty() {
            return Vec::new();
        }
        (0..count)
            .map(|i| self.order[i % self.order.len()].clone())
            .collect()
    }
}

/// Load every mob definition file at construction.
///
/// A missing or unreadable directory degrades to the built-in skeleton
/// with a warning; an unparsable file is skipped with an error. Play can
/// proceed either way.
pub fn load_mob_definitions(mut commands: Commands) {
    let mut registry = MobRegistry::default();

    match read_definition_files(Path::new(MOB_DATA_DIR)) {
        Ok(defs) => {
            for def in defs {
                info!("loaded mob definition '{}'", def.name);
                registry.insert(def);
            }
        }
        Err(e) => {
            warn!("could not read mob data directory '{MOB_DATA_DIR}': {e}");
        }
    }

    if registry.is_empty() {
        warn!("no mob definitions found, falling back to the built-in skeleton");
        registry.insert(MobDefinition::skeleton());
    }

    commands.insert_resource(registry);
}

fn read_definition_files(dir: &Path) -> Result<Vec<MobDefinition>, std::io::Error> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "ron"))
        .collect();
    paths.sort();

    let mut defs = Vec::new();
    for path in paths {
        let contents = fs::read_to_string(&path)?;
        match ron::from_str::<MobDefinition>(&contents) {
            Ok(def) => defs.push(def),
            Err(e) => error!("invalid mob definition '{}': {e}", path.display()),
        }
    }
    Ok(defs)
}
