//! Items: weapons, food, and loot
//!
//! Weapons are classified by how they wound; the class picks the damage kind.

use serde::{Deserialize, Serialize};

use crate::body::DamageKind;

/// Item identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Sword,
    Dagger,
    Axe,
    Gold,
    Food,
    Backpack,
}

/// How a weapon wounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponClass {
    /// Swords, axes
    Slashing,
    /// Daggers
    Piercing,
    /// Fists and anything unclassified
    Blunt,
}

impl WeaponClass {
    pub fn damage_kind(self) -> DamageKind {
        match self {
            WeaponClass::Slashing => DamageKind::Cut,
            WeaponClass::Piercing => DamageKind::Puncture,
            WeaponClass::Blunt => DamageKind::Bruise,
        }
    }
}

/// A carried or dropped item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub name: String,
    pub symbol: char,
    /// Bonus damage when wielded
    pub damage: u32,
    pub amount: u32,
    pub stackable: bool,
    /// Recovery when eaten
    pub heals: u32,
    /// Capacity if this is a container
    pub volume: Option<u32>,
}

impl Item {
    fn base(kind: ItemKind, name: &str, symbol: char) -> Self {
        Self {
            kind,
            name: name.to_string(),
            symbol,
            damage: 0,
            amount: 1,
            stackable: false,
            heals: 0,
            volume: None,
        }
    }

    pub fn sword() -> Self {
        Self { damage: 10, ..Self::base(ItemKind::Sword, "iron sword", '/') }
    }

    pub fn dagger() -> Self {
        Self { damage: 5, ..Self::base(ItemKind::Dagger, "dagger", '|') }
    }

    pub fn axe() -> Self {
        Self { damage: 15, ..Self::base(ItemKind::Axe, "battle axe", ')') }
    }

    pub fn gold(amount: u32) -> Self {
        Self {
            amount,
            stackable: true,
            ..Self::base(ItemKind::Gold, "gold coin", '$')
        }
    }

    pub fn food() -> Self {
        Self { heals: 10, ..Self::base(ItemKind::Food, "food", '%') }
    }

    pub fn backpack() -> Self {
        Self { volume: Some(50), ..Self::base(ItemKind::Backpack, "backpack", '[') }
    }

    pub fn from_kind(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Sword => Self::sword(),
            ItemKind::Dagger => Self::dagger(),
            ItemKind::Axe => Self::axe(),
            ItemKind::Gold => Self::gold(1),
            ItemKind::Food => Self::food(),
            ItemKind::Backpack => Self::backpack(),
        }
    }

    pub fn is_weapon(&self) -> bool {
        self.damage > 0
    }

    pub fn weapon_class(&self) -> WeaponClass {
        match self.kind {
            ItemKind::Sword | ItemKind::Axe => WeaponClass::Slashing,
            ItemKind::Dagger => WeaponClass::Piercing,
            _ => WeaponClass::Blunt,
        }
    }
}
