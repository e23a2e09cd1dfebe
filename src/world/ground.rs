//! Items lying on the dungeon floor

use ahash::AHashMap;

use crate::core::types::Position;
use crate::entity::Item;

/// Registry of dropped items, keyed by tile
pub trait GroundItems {
    fn drop_items(&mut self, pos: Position, items: Vec<Item>);
    fn items_at(&self, pos: Position) -> &[Item];
    /// Remove the oldest item on a tile
    fn take_first(&mut self, pos: Position) -> Option<Item>;
}

#[derive(Debug, Clone, Default)]
pub struct ItemRegistry {
    tiles: AHashMap<Position, Vec<Item>>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(&mut self, pos: Position, item: Item) {
        self.tiles.entry(pos).or_default().push(item);
    }

    /// Total item count across all tiles
    pub fn len(&self) -> usize {
        self.tiles.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl GroundItems for ItemRegistry {
    fn drop_items(&mut self, pos: Position, items: Vec<Item>) {
        if items.is_empty() {
            return;
        }
        self.tiles.entry(pos).or_default().extend(items);
    }

    fn items_at(&self, pos: Position) -> &[Item] {
        self.tiles.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    fn take_first(&mut self, pos: Position) -> Option<Item> {
        let pile = self.tiles.get_mut(&pos)?;
        if pile.is_empty() {
            return None;
        }
        let item = pile.remove(0);
        if pile.is_empty() {
            self.tiles.remove(&pos);
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_appends_to_existing_pile() {
        let mut registry = ItemRegistry::new();
        let pos = Position::new(2, 2);
        registry.place(pos, Item::food());
        registry.drop_items(pos, vec![Item::dagger(), Item::gold(5)]);

        let names: Vec<&str> = registry.items_at(pos).iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["food", "dagger", "gold coin"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_take_first_clears_empty_tile() {
        let mut registry = ItemRegistry::new();
        let pos = Position::new(1, 1);
        registry.place(pos, Item::sword());

        assert_eq!(registry.take_first(pos).map(|i| i.damage), Some(10));
        assert!(registry.items_at(pos).is_empty());
        assert!(registry.is_empty());
        assert!(registry.take_first(pos).is_none());
    }

    #[test]
    fn test_dropping_nothing_creates_no_pile() {
        let mut registry = ItemRegistry::new();
        registry.drop_items(Position::new(0, 0), Vec::new());
        assert!(registry.is_empty());
    }
}
