use crate::types::Type;
use serde::Serialize;

/// A creature's battle-relevant state. `hp` is the only field mutated during
/// combat; it may go negative and is never clamped.
#[derive(Clone, Debug, Serialize)]
pub struct Combatant {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: Type,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub hp: f64,
}

impl Combatant {
    pub fn is_fainted(&self) -> bool {
        self.hp <= 0.0
    }
}

/// One pokedex record, stored with its raw base stats. `evolve_level == 0`
/// means the creature does not evolve; otherwise the *next* entry in the
/// pokedex is the evolved form, so evolution chains must be stored as
/// contiguous, level-ordered runs.
#[derive(Clone, Debug)]
pub struct PokedexEntry {
    pub name: String,
    pub base_hp: f64,
    pub base_attack: f64,
    pub base_defense: f64,
    pub base_special_attack: f64,
    pub base_special_defense: f64,
    pub base_speed: f64,
    pub typ: Type,
    pub evolve_level: u32,
}

/// Ordered pokedex collection. Entry order matters for evolution resolution.
#[derive(Clone, Debug, Default)]
pub struct Pokedex {
    entries: Vec<PokedexEntry>,
}

impl Pokedex {
    pub fn new(entries: Vec<PokedexEntry>) -> Self {
        Self { entries }
    }

    /// Linear scan by name; when a name appears twice the last entry wins.
    pub fn find(&self, name: &str) -> Option<usize> {
        let mut found = None;
        for (idx, entry) in self.entries.iter().enumerate() {
            if entry.name == name {
                found = Some(idx);
            }
        }
        found
    }

    pub fn entry(&self, index: usize) -> &PokedexEntry {
        &self.entries[index]
    }

    pub fn get(&self, index: usize) -> Option<&PokedexEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A catchable creature template from a route file. Stats are per-level
/// scale factors, used as-is (no divide-by-100 — the route file already
/// stores scaled-down values).
#[derive(Clone, Debug)]
pub struct SpawnTemplate {
    pub name: String,
    pub hp: f64,
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub typ: Type,
}

/// A route: the level range of wild creatures plus the ordered spawn pool.
#[derive(Clone, Debug)]
pub struct Route {
    pub level_low: u32,
    pub level_high: u32,
    pub spawns: Vec<SpawnTemplate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> PokedexEntry {
        PokedexEntry {
            name: name.to_string(),
            base_hp: 50.0,
            base_attack: 50.0,
            base_defense: 50.0,
            base_special_attack: 50.0,
            base_special_defense: 50.0,
            base_speed: 50.0,
            typ: Type::Normal,
            evolve_level: 0,
        }
    }

    #[test]
    fn find_returns_last_match() {
        let dex = Pokedex::new(vec![entry("rattata"), entry("pidgey"), entry("rattata")]);
        assert_eq!(dex.find("rattata"), Some(2));
        assert_eq!(dex.find("pidgey"), Some(1));
        assert_eq!(dex.find("mewtwo"), None);
    }
}
