//! Direct battle between two interactively entered combatants.

use anyhow::{anyhow, Result};
use pokemon_battle_sim::battle::Battle;
use pokemon_battle_sim::clock_seed;
use pokemon_battle_sim::model::Combatant;
use pokemon_battle_sim::parser::parse_combatant;
use std::env;
use std::io::{self, BufRead};

fn usage() -> ! {
    eprintln!("Usage: battle [--seed N]");
    std::process::exit(1);
}

fn main() -> Result<()> {
    let mut seed = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow!("--seed requires a number"))?;
                seed = Some(val.parse()?);
            }
            _ => usage(),
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mon1 = prompt_combatant(&mut lines, "1st")?;
    let mon2 = prompt_combatant(&mut lines, "2nd")?;

    let outcome = Battle::new(mon1, mon2, seed.unwrap_or_else(clock_seed))?.run()?;

    println!();
    for line in outcome.log.lines() {
        println!("{line}");
    }
    println!("{} won!", outcome.winner_name);
    Ok(())
}

fn prompt_combatant(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    ordinal: &str,
) -> Result<Combatant> {
    println!("Enter {ordinal} pokemon's name, HP, attack, defense, speed, & type.");
    let line = lines
        .next()
        .ok_or_else(|| anyhow!("expected a pokemon record on stdin"))??;
    parse_combatant(&line)
}
