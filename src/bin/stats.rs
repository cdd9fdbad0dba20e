//! Stat report: projects a pokemon's stats at a given level, following one
//! evolution jump when the level clears the entry's threshold.

use anyhow::{anyhow, bail, Result};
use pokemon_battle_sim::parser::load_pokedex;
use pokemon_battle_sim::stats::{resolve, Resolution, StatReport};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!("Usage: stats <pokedex>");
    std::process::exit(1);
}

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let dex_path = match args.next() {
        Some(path) if !path.starts_with('-') => PathBuf::from(path),
        _ => usage(),
    };
    if args.next().is_some() {
        usage();
    }

    let dex = load_pokedex(&dex_path)?;

    print!("Enter pokemon's name and level: ");
    io::stdout().flush()?;
    let line = io::stdin()
        .lock()
        .lines()
        .next()
        .ok_or_else(|| anyhow!("expected a name and level on stdin"))??;
    let mut fields = line.split_whitespace();
    let name = fields
        .next()
        .ok_or_else(|| anyhow!("missing pokemon name"))?;
    let level: u32 = fields
        .next()
        .ok_or_else(|| anyhow!("missing level"))?
        .parse()
        .map_err(|_| anyhow!("level must be a positive integer"))?;
    if level == 0 {
        bail!("level must be at least 1");
    }

    let index = dex
        .find(name)
        .ok_or_else(|| anyhow!("Pokemon '{name}' not found in the pokedex"))?;

    if level == 1 {
        print_base_factors(dex.entry(index));
        return Ok(());
    }

    match resolve(&dex, index, level)? {
        Resolution::Direct(report) => print_report(&report),
        Resolution::Evolved { from, into, report } => {
            println!("\n*** {from} IS EVOLVING INTO {into}! ***");
            print_report(&report);
        }
        Resolution::ChooseEvolution { .. } => {
            println!("*** EEVEE IS EVOLVING. PICK EVOLUTION. ***");
        }
    }
    Ok(())
}

/// Level 1 reports the raw per-level factors without rounding.
fn print_base_factors(entry: &pokemon_battle_sim::model::PokedexEntry) {
    println!("HP: {}", entry.base_hp / 100.0);
    println!(
        "Attack: {}",
        (entry.base_attack + entry.base_special_attack) / 2.0 / 100.0
    );
    println!(
        "Defense: {}",
        (entry.base_defense + entry.base_special_defense) / 2.0 / 100.0
    );
    println!("Speed: {}", entry.base_speed / 100.0);
    println!("Type: {}", entry.typ);
}

fn print_report(report: &StatReport) {
    println!("\n------ {}'s STATS ------\n", report.name);
    println!("HP: {}", report.hp);
    println!("Attack: {}", report.attack);
    println!("Defense: {}", report.defense);
    println!("Speed: {}", report.speed);
    println!("Type: {}", report.typ);
    if report.evolve_level == 0 {
        println!("CANNOT EVOLVE.");
    } else {
        println!("EVOLVES AT: {}", report.evolve_level);
    }
}
