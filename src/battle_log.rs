//! Ordered narration transcript of a battle.
//!
//! Lines are plain console text; the drivers print them verbatim. The whole
//! log can also be exported as JSON for machine consumption.

use crate::types::Effectiveness;
use serde::Serialize;
use serde_json::json;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(transparent)]
pub struct BattleLog {
    lines: Vec<String>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_header(&mut self, turn: u32) {
        self.lines.push(format!("------------ TURN {turn} ------------"));
    }

    pub fn attacking(&mut self, name: &str) {
        self.lines.push(format!("*** {name} is attacking. ***"));
    }

    /// Only super-effective and not-very-effective matchups are narrated.
    pub fn effectiveness(&mut self, effect: Effectiveness) {
        match effect {
            Effectiveness::Super => self.lines.push("IT'S SUPER EFFECTIVE!".to_string()),
            Effectiveness::NotVery => self.lines.push("IT'S NOT VERY EFFECTIVE...".to_string()),
            Effectiveness::Immune | Effectiveness::Neutral => {}
        }
    }

    pub fn miss(&mut self) {
        self.lines.push("THE ATTACK MISSED!".to_string());
    }

    pub fn crit(&mut self) {
        self.lines.push("A CRITICAL HIT!".to_string());
    }

    pub fn damage(&mut self, amount: f64) {
        self.lines.push(format!("DAMAGE: {amount}"));
    }

    pub fn hp(&mut self, name: &str, hp: f64) {
        self.lines.push(format!("{name} HP: {hp}"));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({ "log": self.lines })
    }
}
