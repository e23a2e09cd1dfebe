//! Property tests for body part damage bookkeeping

use proptest::prelude::*;
use qrogue::body::{Body, BodyPart, Capability, DamageKind, Tissue};

fn damage_kind() -> impl Strategy<Value = DamageKind> {
    prop_oneof![
        Just(DamageKind::Bruise),
        Just(DamageKind::Cut),
        Just(DamageKind::Puncture),
        Just(DamageKind::Fracture),
    ]
}

fn hits() -> impl Strategy<Value = Vec<(f32, DamageKind)>> {
    prop::collection::vec((0.0f32..400.0, damage_kind()), 1..20)
}

fn arm() -> BodyPart {
    BodyPart::new(
        "arm",
        6.0,
        &[Capability::Grasp],
        &[Tissue::Skin, Tissue::Muscle, Tissue::Bone],
    )
}

proptest! {
    #[test]
    fn health_stays_in_unit_range_and_never_rises(blows in hits()) {
        let mut part = arm();
        let mut previous = part.health();
        for (amount, kind) in blows {
            part.apply_damage(amount, kind);
            let health = part.health();
            prop_assert!((0.0..=1.0).contains(&health));
            prop_assert!(health <= previous);
            previous = health;
        }
    }

    #[test]
    fn ledger_matches_total(blows in hits()) {
        let mut part = arm();
        for (amount, kind) in blows {
            part.apply_damage(amount, kind);
        }
        let sum: f32 = DamageKind::all().iter().map(|k| part.damage_of(*k)).sum();
        prop_assert!((sum - part.total_damage()).abs() < 1e-2);
    }

    #[test]
    fn destruction_is_permanent(blows in hits(), heal in 0.0f32..1000.0) {
        let mut part = arm();
        let mut destroyed = false;
        for (amount, kind) in blows {
            part.apply_damage(amount, kind);
            if destroyed {
                prop_assert!(part.is_destroyed());
            }
            destroyed = part.is_destroyed();
        }
        part.heal_bruise(heal);
        prop_assert_eq!(part.is_destroyed(), destroyed);
    }

    #[test]
    fn armor_never_adds_damage(amount in 0.0f32..500.0, kind in damage_kind()) {
        let mut part = arm();
        let applied = part.apply_damage(amount, kind);
        prop_assert!(applied >= 0.0);
        prop_assert!(applied <= amount);
        // skin 1 + muscle 2 + bone 5
        prop_assert!((applied - (amount - 8.0).max(0.0)).abs() < 1e-3);
    }

    #[test]
    fn capacities_stay_in_unit_range(
        targets in prop::collection::vec(0usize..15, 1..30),
        amount in 0.0f32..1500.0,
        kind in damage_kind(),
    ) {
        let mut body = Body::human();
        let names: Vec<String> = body.parts().iter().map(|p| p.name.clone()).collect();
        for idx in targets {
            body.apply_damage(&names[idx], amount, kind);
            for flag in Capability::all() {
                let capacity = body.capacity_for(flag);
                prop_assert!((0.0..=1.0).contains(&capacity));
            }
        }
    }
}
