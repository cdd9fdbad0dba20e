//! The turn engine: alternating single-attack turns until one side faints.
//!
//! Per turn: effectiveness lookup, a d20 miss roll (1 = miss), damage of
//! `max(1, attack - defense) * effectiveness`, a d20 crit roll (20 = double
//! damage), then the roles swap. The engine takes exclusive ownership of the
//! two combatants and returns an immutable [`BattleOutcome`].

use crate::battle_log::BattleLog;
use crate::model::Combatant;
use crate::types::{effectiveness, Effectiveness};
use anyhow::{bail, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Engine state. A battle moves `NotStarted -> TurnInProgress(..)* ->
/// Finished(winner)` and never goes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    NotStarted,
    TurnInProgress(Side),
    Finished(Side),
}

/// Turn bound for battles that cannot converge (two mutually immune types
/// deal zero damage forever).
pub const MAX_TURNS: u32 = 1000;

const MISS_ROLL: u32 = 1;
const CRIT_ROLL: u32 = 20;

/// Which side opens the battle. Only a strictly faster side A attacks first;
/// speed ties go to side B.
pub fn first_attacker(a: &Combatant, b: &Combatant) -> Side {
    if a.speed > b.speed {
        Side::A
    } else {
        Side::B
    }
}

/// Damage of a connecting, non-crit hit. The floor of 1 applies to the stat
/// difference, so a connecting hit always deals at least the effectiveness
/// multiplier; an immune matchup still deals 0.
pub fn hit_damage(attack: f64, defense: f64, effect: f64) -> f64 {
    (attack - defense).max(1.0) * effect
}

/// Final outcome record. `mon_a`/`mon_b` are the end-of-battle snapshots;
/// the loser's hp is at or below zero and is not clamped.
#[derive(Clone, Debug, Serialize)]
pub struct BattleOutcome {
    pub winner: Side,
    pub winner_name: String,
    pub turns: u32,
    pub mon_a: Combatant,
    pub mon_b: Combatant,
    pub log: BattleLog,
}

pub struct Battle {
    mon_a: Combatant,
    mon_b: Combatant,
    phase: Phase,
    turn: u32,
    log: BattleLog,
    rng: SmallRng,
}

impl Battle {
    /// Both combatants must enter with positive hp; the loop condition is
    /// also the entry condition.
    pub fn new(mon_a: Combatant, mon_b: Combatant, seed: u64) -> Result<Self> {
        if mon_a.is_fainted() {
            bail!("'{}' cannot battle with {} HP", mon_a.name, mon_a.hp);
        }
        if mon_b.is_fainted() {
            bail!("'{}' cannot battle with {} HP", mon_b.name, mon_b.hp);
        }
        Ok(Self {
            mon_a,
            mon_b,
            phase: Phase::NotStarted,
            turn: 0,
            log: BattleLog::new(),
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    /// Run the battle to completion.
    pub fn run(mut self) -> Result<BattleOutcome> {
        let mut attacker = first_attacker(&self.mon_a, &self.mon_b);
        loop {
            self.phase = Phase::TurnInProgress(attacker);
            self.turn += 1;
            if self.turn > MAX_TURNS {
                bail!(
                    "battle between '{}' and '{}' did not finish within {MAX_TURNS} turns",
                    self.mon_a.name,
                    self.mon_b.name
                );
            }
            self.log.turn_header(self.turn);
            self.resolve_turn(attacker);
            if let Some(winner) = self.winner() {
                self.phase = Phase::Finished(winner);
                break;
            }
            attacker = attacker.opponent();
        }
        let Phase::Finished(winner) = self.phase else {
            unreachable!("loop exits only via Finished");
        };
        Ok(BattleOutcome {
            winner,
            winner_name: self.side(winner).name.clone(),
            turns: self.turn,
            mon_a: self.mon_a,
            mon_b: self.mon_b,
            log: self.log,
        })
    }

    /// Side A's health is checked first, so side B takes the win whenever A
    /// is down. Each turn damages only the defender, so at most one side
    /// crosses zero per resolution; the order fixes the reporting convention.
    fn winner(&self) -> Option<Side> {
        if self.mon_a.is_fainted() {
            Some(Side::B)
        } else if self.mon_b.is_fainted() {
            Some(Side::A)
        } else {
            None
        }
    }

    fn side(&self, side: Side) -> &Combatant {
        match side {
            Side::A => &self.mon_a,
            Side::B => &self.mon_b,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::A => &mut self.mon_a,
            Side::B => &mut self.mon_b,
        }
    }

    fn resolve_turn(&mut self, attacker: Side) {
        let defender = attacker.opponent();
        let attacker_name = self.side(attacker).name.clone();
        let effect = effectiveness(self.side(attacker).typ, self.side(defender).typ);

        self.log.attacking(&attacker_name);
        self.log.effectiveness(Effectiveness::of(effect));

        if self.roll_d20() == MISS_ROLL {
            self.log.miss();
            return;
        }

        let damage = hit_damage(
            self.side(attacker).attack,
            self.side(defender).defense,
            effect,
        );
        self.log.damage(damage);

        let damage = if self.roll_d20() == CRIT_ROLL {
            self.log.crit();
            damage * 2.0
        } else {
            damage
        };
        self.side_mut(defender).hp -= damage;

        let (a_name, a_hp) = (self.mon_a.name.clone(), self.mon_a.hp);
        self.log.hp(&a_name, a_hp);
        let (b_name, b_hp) = (self.mon_b.name.clone(), self.mon_b.hp);
        self.log.hp(&b_name, b_hp);
    }

    fn roll_d20(&mut self) -> u32 {
        self.rng.gen_range(1..=20)
    }
}
