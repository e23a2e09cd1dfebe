//! Tissue catalog: the armor-bearing layers a body part is made of
//!
//! Each layer absorbs incoming damage point-for-point up to its armor value
//! before the remainder reaches the next layer inward.

use serde::{Deserialize, Serialize};

/// Tissue kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tissue {
    Skin,
    Fat,
    Muscle,
    Bone,
    /// Soft internal organ, no armor
    Organ,
}

/// Static catalog entry for a tissue kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TissueSpec {
    pub kind: Tissue,
    pub thickness: f32,
    pub armor: f32,
}

impl Tissue {
    pub fn all() -> [Tissue; 5] {
        [Tissue::Skin, Tissue::Fat, Tissue::Muscle, Tissue::Bone, Tissue::Organ]
    }

    /// Catalog lookup
    pub const fn spec(self) -> TissueSpec {
        let (thickness, armor) = match self {
            Tissue::Skin => (1.0, 1.0),
            Tissue::Fat => (2.0, 0.5),
            Tissue::Muscle => (5.0, 2.0),
            Tissue::Bone => (3.0, 5.0),
            Tissue::Organ => (2.0, 0.0),
        };
        TissueSpec {
            kind: self,
            thickness,
            armor,
        }
    }
}

impl TissueSpec {
    /// Split incoming damage into (absorbed, passed through)
    pub fn absorb(&self, incoming: f32) -> (f32, f32) {
        let blocked = self.armor.min(incoming);
        (blocked, incoming - blocked)
    }
}
