//! Item and inventory components.

use bevy::prelude::*;

/// What a pickup is worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Gold(u32),
    Potion,
}

/// A pickup lying in the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct Item {
    pub kind: ItemKind,
}

/// Items despawn if nobody collects them in time.
#[derive(Component, Debug)]
pub struct ItemTtl(pub Timer);

impl Default for ItemTtl {
    fn default() -> Self {
        Self(Timer::from_seconds(30.0, TimerMode::Once))
    }
}

/// Everything the player has collected.
#[derive(Component, Debug, Default)]
pub struct Inventory {
    pub items: Vec<ItemKind>,
}

impl Inventory {
    pub fn add(&mut self, kind: ItemKind) {
        self.items.push(kind);
    }

    /// Total gold across all collected coin piles.
    pub fn gold(&self) -> u32 {
        self.items
            .iter()
            .map(|kind| match kind {
                ItemKind::Gold(amount) => *amount,
                ItemKind::Potion => 0,
            })
            .sum()
    }

    pub fn potions(&self) -> usize {
        self.items
            .iter()
            .filter(|kind| matches!(kind, ItemKind::Potion))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gold_sums_across_piles_and_ignores_potions() {
        let mut inventory = Inventory::default();
        inventory.add(ItemKind::Gold(5));
        inventory.add(ItemKind::Potion);
        inventory.add(ItemKind::Gold(7));

        assert_eq!(inventory.gold(), 12);
        assert_eq!(inventory.potions(), 1);
    }
}
