//! Hierarchical body model: tissues, parts, and whole-body capacities

pub mod anatomy;
pub mod capability;
pub mod constants;
pub mod part;
pub mod tissue;

pub use anatomy::{Body, StatusSummary};
pub use capability::{Capability, DamageKind};
pub use part::{BodyPart, PartStatus};
pub use tissue::{Tissue, TissueSpec};
