//! Turn-based Pokémon combat simulation.
//!
//! The combat core is shared by three scenario drivers (`battle`, `catch`,
//! `stats` under `src/bin/`): the type-effectiveness chart, the damage
//! formula, the turn engine, and level-scaled stat projection. Drivers only
//! gather input and render the outcome.

pub mod battle;
pub mod battle_log;
pub mod model;
pub mod parser;
pub mod spawn;
pub mod stats;
pub mod types;

/// Commonly used exports for the scenario drivers and external consumers.
pub mod prelude {
    pub use crate::battle::{first_attacker, hit_damage, Battle, BattleOutcome, Side};
    pub use crate::battle_log::BattleLog;
    pub use crate::model::{Combatant, Pokedex, PokedexEntry, Route, SpawnTemplate};
    pub use crate::parser::{load_pokedex, load_route, parse_combatant};
    pub use crate::spawn::{spawn, Encounter, SPAWN_POOL_SIZE};
    pub use crate::stats::{project, report, resolve, Resolution, StatReport};
    pub use crate::types::{effectiveness, Effectiveness, Type};
}

/// Seed drawn from the system clock, for drivers started without an explicit
/// `--seed`.
pub fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
