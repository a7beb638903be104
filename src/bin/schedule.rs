//! CLI demo: load a roster from CSV, generate a doubles schedule, print it.
//! Run with: cargo run --bin schedule -- roster.csv [rounds] [courts]
//! The CSV needs a `name` header column; `color` and `gender` are optional.
//! Override with env: SEED (u64, pins the schedule), JSON=1 (machine output).

use doubles_scheduler::{
    compute_stats, generate_schedule, generate_schedule_with_rng, Player, PlayerId,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;

#[derive(Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    gender: Option<String>,
}

fn load_roster(path: &str) -> Result<Vec<Player>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut players = Vec::new();
    for row in reader.deserialize() {
        let row: RosterRow = row?;
        let mut player = Player::new(row.name.trim());
        player.color = row.color;
        player.gender = row.gender;
        players.push(player);
    }
    Ok(players)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(p) => p,
        None => {
            eprintln!("usage: schedule <roster.csv> [rounds] [courts]");
            std::process::exit(2);
        }
    };
    let rounds: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(6).max(1);
    let courts: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(2).max(1);

    let players = load_roster(&path)?;
    log::info!(
        "Loaded {} player(s) from {}; {} round(s), {} court(s)",
        players.len(),
        path,
        rounds,
        courts
    );

    let seed = std::env::var("SEED").ok().and_then(|s| s.parse::<u64>().ok());
    let schedule = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_schedule_with_rng(&players, rounds, courts, &mut rng)
        }
        None => generate_schedule(&players, rounds, courts),
    };

    if std::env::var("JSON").map(|v| v == "1").unwrap_or(false) {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    let names: HashMap<PlayerId, &str> = players.iter().map(|p| (p.id, p.name.as_str())).collect();
    let name_of = |id: PlayerId| names.get(&id).copied().unwrap_or("?");
    for card in &schedule {
        println!(
            "Match {:>3}: {} & {} vs {} & {}",
            card.index,
            name_of(card.team_a.0),
            name_of(card.team_a.1),
            name_of(card.team_b.0),
            name_of(card.team_b.1),
        );
    }

    println!();
    for stat in compute_stats(&players, &schedule, &HashMap::new()) {
        println!("{:<24} plays {}", stat.name, stat.play_count);
    }
    Ok(())
}
