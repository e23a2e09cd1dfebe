//! Body model constants - fixed properties of the damage model

/// Maximum health of a body part per unit of size
pub const HEALTH_PER_SIZE: f32 = 100.0;

/// Fraction of max health at which a part is destroyed (one-way)
pub const DESTRUCTION_THRESHOLD: f32 = 0.8;

// Part status thresholds on health fraction (strictly greater than)
pub const STATUS_HEALTHY: f32 = 0.8;
pub const STATUS_DAMAGED: f32 = 0.5;
pub const STATUS_BADLY_DAMAGED: f32 = 0.2;

// Status summary brackets
pub const SUMMARY_HEALTHY: f32 = 0.8;
pub const SUMMARY_CRITICAL: f32 = 0.3;
