use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qrogue::body::{Body, Capability, DamageKind};
use qrogue::combat::{resolve_attack, select_target_part};
use qrogue::core::{Position, SimulationConfig};
use qrogue::entity::{AiState, Entity, Item, Stats};
use qrogue::world::ItemRegistry;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn capacity_benchmark(c: &mut Criterion) {
    let mut body = Body::human();
    body.apply_damage("left eye", 50.0, DamageKind::Cut);

    c.bench_function("capacity_cached", |b| {
        b.iter(|| black_box(body.capacity_for(black_box(Capability::Sight))))
    });

    c.bench_function("capacity_cold", |b| {
        b.iter(|| {
            body.invalidate_cache();
            black_box(body.capacity_for(black_box(Capability::Sight)))
        })
    });
}

fn targeting_benchmark(c: &mut Criterion) {
    let body = Body::human();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    c.bench_function("select_target_part", |b| {
        b.iter(|| black_box(select_target_part(&body, &mut rng)))
    });
}

fn exchange_benchmark(c: &mut Criterion) {
    let config = SimulationConfig::default();

    c.bench_function("resolve_attack_fresh_bodies", |b| {
        b.iter_with_setup(
            || {
                let player = Entity::player(Position::new(1, 1), Stats::default())
                    .with_weapon(Item::sword());
                let goblin = Entity::new("Goblin", 'g', Position::new(2, 1), Stats::default())
                    .with_ai(AiState::Hostile, true);
                (player, goblin, ItemRegistry::new(), ChaCha8Rng::seed_from_u64(3))
            },
            |(mut player, mut goblin, mut ground, mut rng)| {
                black_box(resolve_attack(
                    &mut player,
                    &mut goblin,
                    None,
                    &mut ground,
                    &mut rng,
                    &config,
                ))
            },
        )
    });
}

criterion_group!(benches, capacity_benchmark, targeting_benchmark, exchange_benchmark);
criterion_main!(benches);
