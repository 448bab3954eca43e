//! Player components and progression math.

use bevy::prelude::*;

/// Marker for the player character. There is exactly one.
#[derive(Component, Debug, Default)]
pub struct Player;

/// Player starting health.
pub const PLAYER_HEALTH: i32 = 100;
/// Player starting mana.
pub const PLAYER_MANA: i32 = 50;
/// Player walking speed in world units per second.
pub const PLAYER_SPEED: f32 = 120.0;

/// Lifetime progression: level, partial experience, and the kill tally.
///
/// Progression survives world resets; only vitals and position are
/// re-seeded when a new run starts.
#[derive(Component, Debug, Clone, Copy)]
pub struct PlayerStats {
    pub level: u32,
    /// Experience toward the next level, not lifetime total
    pub xp: u32,
    pub kills: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            kills: 0,
        }
    }
}

impl PlayerStats {
    /// Experience required to go from `level` to `level + 1`.
    pub fn xp_to_next(level: u32) -> u32 {
        100 * level
    }

    /// Add experience, consuming thresholds until the remainder fits.
    /// Returns true when at least one level was gained.
    pub fn gain_xp(&mut self, amount: u32) -> bool {
        self.xp += amount;
        let mut leveled = false;
        while self.xp >= Self::xp_to_next(self.level) {
            self.xp -= Self::xp_to_next(self.level);
            self.level += 1;
            leveled = true;
        }
        leveled
    }
}

/// Passive mana regeneration tick.
#[derive(Component, Debug)]
pub struct ManaRegen(pub Timer);

impl Default for ManaRegen {
    fn default() -> Self {
        Self(Timer::from_seconds(0.5, TimerMode::Repeating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_grow_with_level() {
        assert_eq!(PlayerStats::xp_to_next(1), 100);
        assert_eq!(PlayerStats::xp_to_next(2), 200);
        assert!(PlayerStats::xp_to_next(10) > PlayerStats::xp_to_next(9));
    }

    #[test]
    fn gaining_below_threshold_keeps_the_level() {
        let mut stats = PlayerStats::default();
        assert!(!stats.gain_xp(99));
        assert_eq!(stats.level, 1);
        assert_eq!(stats.xp, 99);
    }

    #[test]
    fn one_big_gain_can_cross_several_levels() {
        let mut stats = PlayerStats::default();
        // 100 + 200 = 300 consumed, 50 left over at level 3.
        assert!(stats.gain_xp(350));
        assert_eq!(stats.level, 3);
        assert_eq!(stats.xp, 50);
    }

    #[test]
    fn exact_threshold_levels_with_zero_remainder() {
        let mut stats = PlayerStats::default();
        assert!(stats.gain_xp(100));
        assert_eq!(stats.level, 2);
        assert_eq!(stats.xp, 0);
    }
}
