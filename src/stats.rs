//! Level-scaled stat projection and evolution resolution.
//!
//! The battle side of the split uses [`project`], which keeps full
//! floating-point precision; the stat-report side uses [`report`], which
//! rounds to whole numbers. Damage math in the catch scenario depends on the
//! unrounded values, so the two must not be conflated.

use crate::model::{Combatant, Pokedex, PokedexEntry};
use crate::types::Type;
use anyhow::{anyhow, Result};
use serde::Serialize;

/// Scale a pokedex entry to a battle-ready combatant at `level`.
///
/// The franchise-derived formula: each stat is `base / 100 * level`, with
/// attack and defense averaging their physical and special base stats first.
pub fn project(entry: &PokedexEntry, level: u32) -> Combatant {
    let level = level as f64;
    Combatant {
        name: entry.name.clone(),
        typ: entry.typ,
        attack: (entry.base_attack + entry.base_special_attack) / 2.0 / 100.0 * level,
        defense: (entry.base_defense + entry.base_special_defense) / 2.0 / 100.0 * level,
        speed: entry.base_speed / 100.0 * level,
        hp: entry.base_hp / 100.0 * level,
    }
}

/// Rounded presentation of a projection, for the stats driver.
#[derive(Clone, Debug, Serialize)]
pub struct StatReport {
    pub name: String,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
    #[serde(rename = "type")]
    pub typ: Type,
    pub evolve_level: u32,
}

pub fn report(entry: &PokedexEntry, level: u32) -> StatReport {
    let projected = project(entry, level);
    StatReport {
        name: entry.name.clone(),
        hp: projected.hp.round() as i64,
        attack: projected.attack.round() as i64,
        defense: projected.defense.round() as i64,
        speed: projected.speed.round() as i64,
        typ: entry.typ,
        evolve_level: entry.evolve_level,
    }
}

/// Outcome of an evolution-aware projection.
#[derive(Clone, Debug)]
pub enum Resolution {
    /// No evolution threshold crossed; the entry's own stats.
    Direct(StatReport),
    /// The threshold was crossed: stats of the next entry in the pokedex.
    Evolved {
        from: String,
        into: String,
        report: StatReport,
    },
    /// Eevee has multiple evolutions and cannot resolve automatically; the
    /// caller must pick one.
    ChooseEvolution { name: String },
}

/// Resolve the entry at `index` at `level`, following at most one evolution
/// jump. The evolved entry is reported as-is even when its own threshold is
/// also met — chains advance one stage per projection.
pub fn resolve(dex: &Pokedex, index: usize, level: u32) -> Result<Resolution> {
    let entry = dex.entry(index);
    if entry.evolve_level != 0 && level >= entry.evolve_level {
        if entry.name == "eevee" {
            return Ok(Resolution::ChooseEvolution {
                name: entry.name.clone(),
            });
        }
        let evolved = dex.get(index + 1).ok_or_else(|| {
            anyhow!(
                "'{}' evolves at level {} but the pokedex has no entry after it",
                entry.name,
                entry.evolve_level
            )
        })?;
        return Ok(Resolution::Evolved {
            from: entry.name.clone(),
            into: evolved.name.clone(),
            report: report(evolved, level),
        });
    }
    Ok(Resolution::Direct(report(entry, level)))
}
