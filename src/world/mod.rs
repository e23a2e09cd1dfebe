//! Contracts for the map and ground-item collaborators, with in-memory impls

pub mod ground;
pub mod terrain;

pub use ground::{GroundItems, ItemRegistry};
pub use terrain::{GridMap, Terrain};
