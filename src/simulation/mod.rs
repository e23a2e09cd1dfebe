//! Turn loop: player actions, AI reactions, narration

pub mod ai;
pub mod game;
pub mod log;
pub mod selection;

pub use game::{ActionOutcome, Game};
pub use log::MessageLog;
pub use selection::{CycleDirection, TargetSelection};
