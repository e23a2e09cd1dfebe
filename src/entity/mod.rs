pub mod actor;
pub mod item;

pub use actor::{AiState, Entity, Stats, Wound};
pub use item::{Item, ItemKind, WeaponClass};
