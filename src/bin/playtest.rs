//! Headless playtest
//!
//! Drops a scripted player into a walled room with goblins and runs the
//! turn loop until the turn limit or the player's death.

use std::path::PathBuf;

use clap::Parser;
use qrogue::body::StatusSummary;
use qrogue::core::{Position, Result, SimulationConfig};
use qrogue::entity::{AiState, Item, ItemKind};
use qrogue::simulation::{ActionOutcome, Game};
use qrogue::world::{GridMap, GroundItems, Terrain};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Headless playtest - scripted player vs goblins
#[derive(Parser, Debug)]
#[command(name = "playtest")]
#[command(about = "Run a scripted dungeon crawl and report the outcome")]
struct Args {
    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum player turns
    #[arg(long, default_value_t = 300)]
    turns: u64,

    /// Number of goblins to spawn
    #[arg(long, default_value_t = 8)]
    goblins: usize,

    /// Number of loose items to scatter
    #[arg(long, default_value_t = 20)]
    items: usize,

    /// Room width in tiles
    #[arg(long, default_value_t = 40)]
    width: i32,

    /// Room height in tiles
    #[arg(long, default_value_t = 24)]
    height: i32,

    /// TOML file overriding simulation constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

#[derive(Serialize)]
struct PlaytestReport {
    seed: u64,
    turns: u64,
    player_alive: bool,
    goblins_slain: usize,
    goblins_total: usize,
    items_carried: usize,
    player_status: StatusSummary,
    last_messages: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("qrogue=warn")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut spawn_rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    let map = GridMap::walled_room(args.width, args.height);
    let start = Position::new(1, 1);
    let mut game = Game::new(map, start, config, seed);

    for _ in 0..args.goblins {
        if let Some(pos) = free_tile(&game, &mut spawn_rng) {
            game.spawn_goblin(pos);
        }
    }
    if let Some(pos) = free_tile(&game, &mut spawn_rng) {
        game.spawn_merchant(pos);
    }

    let kinds = [
        ItemKind::Sword,
        ItemKind::Dagger,
        ItemKind::Axe,
        ItemKind::Food,
        ItemKind::Gold,
        ItemKind::Backpack,
    ];
    for _ in 0..args.items {
        if let Some(pos) = free_tile(&game, &mut spawn_rng) {
            let kind = kinds[spawn_rng.gen_range(0..kinds.len())];
            game.items.place(pos, Item::from_kind(kind));
        }
    }

    tracing::info!(seed, goblins = game.entities.len(), "playtest starting");

    while !game.is_over() && game.turns() < args.turns {
        play_turn(&mut game);
    }

    let report = PlaytestReport {
        seed,
        turns: game.turns(),
        player_alive: game.player.is_alive(),
        goblins_slain: game
            .entities
            .iter()
            .filter(|e| e.hostile && e.ai_state() == AiState::Dead)
            .count(),
        goblins_total: game.entities.iter().filter(|e| e.hostile).count(),
        items_carried: game.player.inventory.len(),
        player_status: game.player.body_status(),
        last_messages: game.messages().lines().map(str::to_string).collect(),
    };

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print_text(&report, &game.body_status_report()),
        other => {
            eprintln!("Unknown format '{}', defaulting to json", other);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// One scripted player decision
fn play_turn(game: &mut Game<GridMap>) {
    if game.targeting().is_some() {
        game.confirm_attack();
        return;
    }

    if game.player.hp < 60 && game.player.inventory.iter().any(|i| i.kind == ItemKind::Food) {
        game.eat();
        return;
    }

    if !game.items.items_at(game.player.position).is_empty() {
        if let ActionOutcome::PickedUp(item) = game.pick_up() {
            equip_if_better(game, item);
        }
        return;
    }

    let here = game.player.position;
    let nearest = game
        .entities
        .iter()
        .filter(|e| e.hostile && e.is_alive())
        .min_by(|a, b| {
            a.position
                .distance(&here)
                .total_cmp(&b.position.distance(&here))
        })
        .map(|e| e.position);

    let Some(target) = nearest else {
        game.wait();
        return;
    };

    let (dx, dy) = ((target.x - here.x).signum(), (target.y - here.y).signum());
    let step = if dx != 0 && game.terrain.is_passable(here.offset(dx, 0)) {
        (dx, 0)
    } else {
        (0, dy)
    };
    if step == (0, 0) {
        game.wait();
        return;
    }
    // Bumping a hostile starts targeting; any other refusal would stall the clock
    let outcome = game.move_player(step.0, step.1);
    if !outcome.consumed_turn() && !matches!(outcome, ActionOutcome::Engaged(_)) {
        game.wait();
    }
}

fn equip_if_better(game: &mut Game<GridMap>, item: Item) {
    let current = game.player.weapon.as_ref().map_or(0, |w| w.damage);
    if item.is_weapon() && item.damage > current {
        game.player.weapon = Some(item);
    }
}

fn free_tile(game: &Game<GridMap>, rng: &mut ChaCha8Rng) -> Option<Position> {
    let (w, h) = (game.terrain.width(), game.terrain.height());
    (0..200).find_map(|_| {
        let pos = Position::new(rng.gen_range(0..w), rng.gen_range(0..h));
        let taken = pos == game.player.position || game.entity_at(pos).is_some();
        (game.terrain.is_passable(pos) && !taken).then_some(pos)
    })
}

fn print_text(report: &PlaytestReport, body_lines: &[String]) {
    println!("Playtest Result");
    println!("===============");
    println!("Seed: {}", report.seed);
    println!("Turns: {}", report.turns);
    println!(
        "Player: {}",
        if report.player_alive { "alive" } else { "dead" }
    );
    println!(
        "Goblins slain: {}/{}",
        report.goblins_slain, report.goblins_total
    );
    println!("Items carried: {}", report.items_carried);
    println!();
    for line in body_lines {
        println!("{}", line);
    }
    println!();
    println!("Last messages:");
    for line in &report.last_messages {
        println!("  {}", line);
    }
}
