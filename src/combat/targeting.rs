//! Hit location selection
//!
//! Head and torso draw most blows; limbs less; everything else rarely.
//! Weights do not need to sum to one: a roll that runs past every
//! candidate falls back to a uniform pick.

use rand::Rng;

use crate::body::{Body, BodyPart};

/// Weight for parts absent from the table
pub const DEFAULT_HIT_WEIGHT: f32 = 0.05;

/// Relative chance of a part being hit
pub fn hit_weight(part_name: &str) -> f32 {
    match part_name.to_ascii_lowercase().as_str() {
        "head" | "torso" => 0.30,
        "left arm" | "right arm" | "left leg" | "right leg" => 0.10,
        _ => DEFAULT_HIT_WEIGHT,
    }
}

/// Walk candidates accumulating weight; first one whose running total
/// reaches the roll wins.
pub fn pick_weighted(candidates: &[&BodyPart], roll: f32) -> Option<usize> {
    let mut cumulative = 0.0;
    for (idx, part) in candidates.iter().enumerate() {
        cumulative += hit_weight(&part.name);
        if roll <= cumulative {
            return Some(idx);
        }
    }
    None
}

/// Choose a part to hit among the non-destroyed parts of `body`.
///
/// Returns `None` only when every part is destroyed.
pub fn select_target_part<R: Rng + ?Sized>(body: &Body, rng: &mut R) -> Option<String> {
    let candidates: Vec<&BodyPart> = body
        .parts()
        .into_iter()
        .filter(|p| !p.is_destroyed())
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let roll: f32 = rng.gen();
    let idx = pick_weighted(&candidates, roll).unwrap_or_else(|| rng.gen_range(0..candidates.len()));
    Some(candidates[idx].name.clone())
}
