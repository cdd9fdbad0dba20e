use anyhow::anyhow;
use once_cell::sync::Lazy;
use phf::phf_map;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The 18 elemental types. Declaration order is significant: it matches the
/// row/column order of the effectiveness chart, so `as usize` is the chart
/// index.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

pub const TYPE_COUNT: usize = 18;

impl Type {
    /// All types in chart order.
    pub const ALL: [Type; TYPE_COUNT] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
        Type::Fairy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fighting => "fighting",
            Type::Flying => "flying",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Rock => "rock",
            Type::Bug => "bug",
            Type::Ghost => "ghost",
            Type::Steel => "steel",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Grass => "grass",
            Type::Electric => "electric",
            Type::Psychic => "psychic",
            Type::Ice => "ice",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Fairy => "fairy",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

static TYPE_NAMES: phf::Map<&'static str, Type> = phf_map! {
    "normal" => Type::Normal,
    "fighting" => Type::Fighting,
    "flying" => Type::Flying,
    "poison" => Type::Poison,
    "ground" => Type::Ground,
    "rock" => Type::Rock,
    "bug" => Type::Bug,
    "ghost" => Type::Ghost,
    "steel" => Type::Steel,
    "fire" => Type::Fire,
    "water" => Type::Water,
    "grass" => Type::Grass,
    "electric" => Type::Electric,
    "psychic" => Type::Psychic,
    "ice" => Type::Ice,
    "dragon" => Type::Dragon,
    "dark" => Type::Dark,
    "fairy" => Type::Fairy,
};

impl FromStr for Type {
    type Err = anyhow::Error;

    /// Case-insensitive lookup. An unrecognized name is a hard error rather
    /// than a silent fallback to `normal`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        TYPE_NAMES
            .get(lowered.as_str())
            .copied()
            .ok_or_else(|| anyhow!("Unknown type '{s}'"))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Ref: https://pokemondb.net/type — row = attacking type, column = defending
// type, both in `Type::ALL` order. Matchups the chart leaves implicit are 1.
static CHART: Lazy<[[f64; TYPE_COUNT]; TYPE_COUNT]> = Lazy::new(|| {
    [
        // normal
        [1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 0.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        // fighting
        [2.0, 1.0, 0.5, 0.5, 1.0, 2.0, 0.5, 0.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 0.5],
        // flying
        [1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0],
        // poison
        [1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 1.0, 0.5, 0.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0],
        // ground
        [1.0, 1.0, 0.0, 2.0, 1.0, 2.0, 0.5, 1.0, 2.0, 2.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        // rock
        [1.0, 0.5, 2.0, 1.0, 0.5, 1.0, 2.0, 1.0, 0.5, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0],
        // bug
        [1.0, 0.5, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 1.0, 2.0, 1.0, 2.0, 1.0, 1.0, 2.0, 0.5],
        // ghost
        [0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 1.0],
        // steel
        [1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5, 0.5, 1.0, 0.5, 1.0, 2.0, 1.0, 1.0, 2.0],
        // fire
        [1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 2.0, 1.0, 2.0, 0.5, 0.5, 2.0, 1.0, 1.0, 2.0, 0.5, 1.0, 1.0],
        // water
        [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0],
        // grass
        [1.0, 1.0, 0.5, 0.5, 2.0, 2.0, 0.5, 1.0, 0.5, 0.5, 2.0, 0.5, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0],
        // electric
        [1.0, 1.0, 2.0, 1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 0.5, 0.5, 1.0, 1.0, 0.5, 1.0, 1.0],
        // psychic
        [1.0, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 0.0, 1.0],
        // ice
        [1.0, 1.0, 2.0, 1.0, 2.0, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 2.0, 1.0, 1.0, 0.5, 2.0, 1.0, 1.0],
        // dragon
        [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 0.0],
        // dark
        [1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 0.5, 0.5],
        // fairy
        [1.0, 2.0, 1.0, 0.5, 1.0, 1.0, 1.0, 1.0, 0.5, 0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 1.0],
    ]
});

/// Damage multiplier for `attacker` hitting `defender`. Total over all 324
/// ordered pairs; every cell is one of 0, 0.5, 1 or 2. The chart is not
/// symmetric (type advantage is directional).
pub fn effectiveness(attacker: Type, defender: Type) -> f64 {
    CHART[attacker.index()][defender.index()]
}

/// Narration category for a multiplier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Effectiveness {
    Immune,
    NotVery,
    Neutral,
    Super,
}

impl Effectiveness {
    pub fn of(multiplier: f64) -> Self {
        if multiplier == 0.0 {
            Effectiveness::Immune
        } else if multiplier == 0.5 {
            Effectiveness::NotVery
        } else if multiplier == 2.0 {
            Effectiveness::Super
        } else {
            Effectiveness::Neutral
        }
    }
}
