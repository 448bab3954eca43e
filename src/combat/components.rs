//! Combat components: vitality stats, spells, and live effects.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::core::Direction;

/// Upper bound on health and mana. Stats are clamped into `0..=STAT_MAX`
/// at every mutation site, so no reader ever sees an out-of-range value.
pub const STAT_MAX: i32 = 255;

/// Mana cost shared by every spell.
pub const SPELL_COST: i32 = 5;

/// Hit points, clamped into `0..=STAT_MAX`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health(i32);

impl Health {
    pub fn new(value: i32) -> Self {
        Self(value.clamp(0, STAT_MAX))
    }

    pub fn current(&self) -> i32 {
        self.0
    }

    pub fn take(&mut self, amount: i32) {
        self.0 = (self.0 - amount).clamp(0, STAT_MAX);
    }

    pub fn restore(&mut self, amount: i32) {
        self.0 = (self.0 + amount).clamp(0, STAT_MAX);
    }

    pub fn is_depleted(&self) -> bool {
        self.0 == 0
    }
}

/// Spell fuel, clamped into `0..=STAT_MAX`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mana(i32);

impl Mana {
    pub fn new(value: i32) -> Self {
        Self(value.clamp(0, STAT_MAX))
    }

    pub fn current(&self) -> i32 {
        self.0
    }

    /// Spend mana for a cast. The gate is having any mana at all; the
    /// cost is then deducted and clamped, so a low-mana cast is allowed
    /// and simply empties the pool.
    pub fn try_spend(&mut self, cost: i32) -> bool {
        if self.0 <= 0 {
            return false;
        }
        self.0 = (self.0 - cost).clamp(0, STAT_MAX);
        true
    }

    pub fn restore(&mut self, amount: i32) {
        self.0 = (self.0 + amount).clamp(0, STAT_MAX);
    }
}

/// The spell vocabulary. Behavior differences (motion, shape, damage)
/// all key off this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpellKind {
    /// Fast projectile that flies straight and dies on first hit
    MagicBullet,
    /// Stationary ring expanding around the caster
    ManaStorm,
}

impl SpellKind {
    pub fn damage(self) -> i32 {
        match self {
            SpellKind::MagicBullet => 10,
            SpellKind::ManaStorm => 5,
        }
    }

    /// Lifetime in seconds.
    pub fn ttl(self) -> f32 {
        match self {
            SpellKind::MagicBullet => 2.0,
            SpellKind::ManaStorm => 1.5,
        }
    }
}

/// Projectile flight speed in world units per second.
pub const BULLET_SPEED: f32 = 200.0;
/// Bullet collision half-extent.
pub const BULLET_HALF: f32 = 6.0;
/// Radius a mana storm reaches at the end of its lifetime.
pub const STORM_MAX_RADIUS: f32 = 64.0;

/// A live spell effect in the world.
///
/// The hit set records every entity this effect has already damaged;
/// membership is permanent for the effect's lifetime, so nothing is
/// damaged twice by the same cast.
#[derive(Component, Debug)]
pub struct Effect {
    pub kind: SpellKind,
    pub caster: Entity,
    /// Cast origin; storms stay centered here
    pub origin: Vec2,
    /// Flight direction for bullets, zero for storms
    pub direction: Vec2,
    pub damage: i32,
    /// Seconds since the cast
    pub age: f32,
    pub ttl: f32,
    pub hit: HashSet<Entity>,
}

impl Effect {
    pub fn bullet(caster: Entity, origin: Vec2, direction: Vec2) -> Self {
        Self {
            kind: SpellKind::MagicBullet,
            caster,
            origin,
            direction,
            damage: SpellKind::MagicBullet.damage(),
            age: 0.0,
            ttl: SpellKind::MagicBullet.ttl(),
            hit: HashSet::new(),
        }
    }

    pub fn storm(caster: Entity, origin: Vec2) -> Self {
        Self {
            kind: SpellKind::ManaStorm,
            caster,
            origin,
            direction: Vec2::ZERO,
            damage: SpellKind::ManaStorm.damage(),
            age: 0.0,
            ttl: SpellKind::ManaStorm.ttl(),
            hit: HashSet::new(),
        }
    }

    /// Current storm radius, growing linearly from zero over the lifetime.
    pub fn radius(&self) -> f32 {
        (self.age / self.ttl).clamp(0.0, 1.0) * STORM_MAX_RADIUS
    }

    pub fn expired(&self) -> bool {
        self.age >= self.ttl
    }
}

/// Marker for entities whose health reached zero. Insertion happens
/// exactly once, together with the corresponding death event.
#[derive(Component, Debug, Default)]
pub struct Dead;

/// Request to cast a spell, sent by player input or mob AI and resolved
/// by the combat systems.
#[derive(Event, Debug)]
pub struct CastSpellEvent {
    pub caster: Entity,
    pub origin: Vec2,
    pub kind: SpellKind,
    pub direction: Direction,
}
