//! Whitespace-delimited record parsing for pokedex and route files.
//!
//! Pokedex lines: `name hp atk def spa spd spe type evolve_level`.
//! Route files: a first line `low high`, then `name hp atk def spe type`
//! per spawn entry. Malformed lines fail with the offending line number
//! instead of reading garbage.

use crate::model::{Combatant, Pokedex, PokedexEntry, Route, SpawnTemplate};
use anyhow::{anyhow, bail, Context, Result};
use std::path::Path;
use std::str::FromStr;

pub fn load_pokedex(path: &Path) -> Result<Pokedex> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pokedex file at {}", path.display()))?;
    parse_pokedex(&raw).with_context(|| format!("Failed to parse pokedex file at {}", path.display()))
}

pub fn load_route(path: &Path) -> Result<Route> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read route file at {}", path.display()))?;
    parse_route(&raw).with_context(|| format!("Failed to parse route file at {}", path.display()))
}

pub fn parse_pokedex(text: &str) -> Result<Pokedex> {
    let mut entries = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry = parse_dex_line(line)
            .with_context(|| format!("Malformed pokedex record on line {}", idx + 1))?;
        entries.push(entry);
    }
    Ok(Pokedex::new(entries))
}

pub fn parse_route(text: &str) -> Result<Route> {
    let mut spawns = Vec::new();
    let mut range = None;
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if range.is_none() {
            range = Some(
                parse_range(line)
                    .with_context(|| format!("Malformed level range on line {}", idx + 1))?,
            );
            continue;
        }
        let spawn = parse_route_line(line)
            .with_context(|| format!("Malformed route record on line {}", idx + 1))?;
        spawns.push(spawn);
    }
    let (level_low, level_high) = range.ok_or_else(|| anyhow!("Route file is empty"))?;
    Ok(Route {
        level_low,
        level_high,
        spawns,
    })
}

/// One interactively entered combatant: `name hp attack defense speed type`.
pub fn parse_combatant(line: &str) -> Result<Combatant> {
    let mut fields = line.split_whitespace();
    let name = name_field(&mut fields)?;
    let hp = field(&mut fields, "HP")?;
    let attack = field(&mut fields, "attack")?;
    let defense = field(&mut fields, "defense")?;
    let speed = field(&mut fields, "speed")?;
    let typ = field(&mut fields, "type")?;
    Ok(Combatant {
        name,
        typ,
        attack,
        defense,
        speed,
        hp,
    })
}

fn parse_dex_line(line: &str) -> Result<PokedexEntry> {
    let mut fields = line.split_whitespace();
    let name = name_field(&mut fields)?;
    let base_hp = field(&mut fields, "HP")?;
    let base_attack = field(&mut fields, "attack")?;
    let base_defense = field(&mut fields, "defense")?;
    let base_special_attack = field(&mut fields, "special attack")?;
    let base_special_defense = field(&mut fields, "special defense")?;
    let base_speed = field(&mut fields, "speed")?;
    let typ = field(&mut fields, "type")?;
    let evolve_level = field(&mut fields, "evolution level")?;
    Ok(PokedexEntry {
        name,
        base_hp,
        base_attack,
        base_defense,
        base_special_attack,
        base_special_defense,
        base_speed,
        typ,
        evolve_level,
    })
}

fn parse_range(line: &str) -> Result<(u32, u32)> {
    let mut fields = line.split_whitespace();
    let low: u32 = field(&mut fields, "low level")?;
    let high: u32 = field(&mut fields, "high level")?;
    if low == 0 {
        bail!("levels start at 1, got low bound 0");
    }
    if low > high {
        bail!("level range {low}-{high} is inverted");
    }
    Ok((low, high))
}

fn parse_route_line(line: &str) -> Result<SpawnTemplate> {
    let mut fields = line.split_whitespace();
    let name = name_field(&mut fields)?;
    let hp = field(&mut fields, "HP")?;
    let attack = field(&mut fields, "attack")?;
    let defense = field(&mut fields, "defense")?;
    let speed = field(&mut fields, "speed")?;
    let typ = field(&mut fields, "type")?;
    Ok(SpawnTemplate {
        name,
        hp,
        attack,
        defense,
        speed,
        typ,
    })
}

fn name_field<'a>(fields: &mut impl Iterator<Item = &'a str>) -> Result<String> {
    fields
        .next()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("missing name field"))
}

fn field<'a, T: FromStr>(fields: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<T> {
    let token = fields
        .next()
        .ok_or_else(|| anyhow!("missing {what} field"))?;
    token
        .parse()
        .map_err(|_| anyhow!("{what} field '{token}' is invalid"))
}
