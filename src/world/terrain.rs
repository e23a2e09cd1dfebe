//! Terrain passability
//!
//! Map generation lives outside the simulation core; the turn loop only asks
//! whether a tile can be entered.

use ahash::AHashSet;

use crate::core::types::Position;

/// Read-only view of the dungeon's walkable tiles
pub trait Terrain {
    fn is_passable(&self, pos: Position) -> bool;
}

/// Bounded grid of floor with individually blocked cells
#[derive(Debug, Clone)]
pub struct GridMap {
    width: i32,
    height: i32,
    walls: AHashSet<Position>,
}

impl GridMap {
    /// All floor, no walls
    pub fn open(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            walls: AHashSet::new(),
        }
    }

    /// Floor enclosed by a one-tile wall border
    pub fn walled_room(width: i32, height: i32) -> Self {
        let mut map = Self::open(width, height);
        for x in 0..width {
            map.block(Position::new(x, 0));
            map.block(Position::new(x, height - 1));
        }
        for y in 0..height {
            map.block(Position::new(0, y));
            map.block(Position::new(width - 1, y));
        }
        map
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn block(&mut self, pos: Position) {
        self.walls.insert(pos);
    }

    pub fn unblock(&mut self, pos: Position) {
        self.walls.remove(&pos);
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }
}

impl Terrain for GridMap {
    fn is_passable(&self, pos: Position) -> bool {
        self.in_bounds(pos) && !self.walls.contains(&pos)
    }
}
