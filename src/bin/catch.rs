//! Catch encounter: the trainer's projected pokemon battles a randomly
//! spawned wild pokemon from a route file. Winning means the wild pokemon
//! can be caught.

use anyhow::{anyhow, bail, Result};
use pokemon_battle_sim::battle::{Battle, Side};
use pokemon_battle_sim::clock_seed;
use pokemon_battle_sim::parser::{load_pokedex, load_route};
use pokemon_battle_sim::spawn::spawn;
use pokemon_battle_sim::stats::project;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!("Usage: catch [--seed N] [--json] <route> <pokedex>");
    std::process::exit(1);
}

fn main() -> Result<()> {
    let mut seed = None;
    let mut json = false;
    let mut paths: Vec<PathBuf> = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow!("--seed requires a number"))?;
                seed = Some(val.parse()?);
            }
            "--json" => json = true,
            _ if arg.starts_with('-') => usage(),
            _ => paths.push(PathBuf::from(arg)),
        }
    }
    if paths.len() != 2 {
        usage();
    }

    let route = load_route(&paths[0])?;
    let dex = load_pokedex(&paths[1])?;

    print!("Enter trainer Pokemon's name and level: ");
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
    // The trainer's side battles with the unrounded projection.
    let trainer = project(dex.entry(index), level);

    let mut rng = SmallRng::seed_from_u64(seed.unwrap_or_else(clock_seed));
    let encounter = spawn(&route, &mut rng)?;
    println!("\nA LV. {} {} appeared!", encounter.level, encounter.combatant.name);

    let outcome = Battle::new(trainer, encounter.combatant, rng.gen())?.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!();
    for line in outcome.log.lines() {
        println!("{line}");
    }
    match outcome.winner {
        Side::A => println!("{} won! Can catch.", outcome.winner_name),
        Side::B => println!("{} won! Cannot catch.", outcome.winner_name),
    }
    Ok(())
}
