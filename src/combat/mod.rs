pub mod resolution;
pub mod targeting;

pub use resolution::{resolve_attack, CombatOutcome, Strike};
pub use targeting::{hit_weight, select_target_part};
