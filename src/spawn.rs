//! Wild-encounter selection for the catch scenario.

use crate::model::{Combatant, Route};
use anyhow::{bail, Result};
use rand::Rng;

/// The draw always covers the first 20 route entries, not however many the
/// route holds. A route with fewer entries is rejected up front instead of
/// reading out of bounds.
pub const SPAWN_POOL_SIZE: usize = 20;

#[derive(Clone, Debug)]
pub struct Encounter {
    pub combatant: Combatant,
    pub level: u32,
}

/// Pick a uniformly random template from the spawn pool and a uniformly
/// random level within the route's range, then scale the template linearly.
/// Route stats are per-level factors, so there is no divide-by-100 here.
pub fn spawn(route: &Route, rng: &mut impl Rng) -> Result<Encounter> {
    if route.spawns.len() < SPAWN_POOL_SIZE {
        bail!(
            "route has {} spawn entries; the spawn pool needs at least {SPAWN_POOL_SIZE}",
            route.spawns.len()
        );
    }
    let template = &route.spawns[rng.gen_range(0..SPAWN_POOL_SIZE)];
    let level = rng.gen_range(route.level_low..=route.level_high);
    let scale = level as f64;
    Ok(Encounter {
        combatant: Combatant {
            name: template.name.clone(),
            typ: template.typ,
            attack: template.attack * scale,
            defense: template.defense * scale,
            speed: template.speed * scale,
            hp: template.hp * scale,
        },
        level,
    })
}
