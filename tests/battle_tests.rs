use pokemon_battle_sim::battle::{first_attacker, hit_damage, Battle, Side, MAX_TURNS};
use pokemon_battle_sim::model::Combatant;
use pokemon_battle_sim::types::{effectiveness, Type};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn mon(name: &str, typ: Type, attack: f64, defense: f64, speed: f64, hp: f64) -> Combatant {
    Combatant {
        name: name.to_string(),
        typ,
        attack,
        defense,
        speed,
        hp,
    }
}

#[test]
fn faster_side_attacks_first() {
    let fast = mon("fast", Type::Normal, 10.0, 10.0, 100.0, 50.0);
    let slow = mon("slow", Type::Normal, 10.0, 10.0, 1.0, 50.0);
    assert_eq!(first_attacker(&fast, &slow), Side::A);
    assert_eq!(first_attacker(&slow, &fast), Side::B);
}

#[test]
fn speed_tie_goes_to_second_combatant() {
    let a = mon("first", Type::Normal, 10.0, 10.0, 50.0, 50.0);
    let b = mon("second", Type::Normal, 10.0, 10.0, 50.0, 50.0);
    assert_eq!(first_attacker(&a, &b), Side::B);
}

#[test]
fn fire_against_grass_deals_doubled_stat_difference() {
    // attack 50 vs defense 20 at 2x effectiveness: (50 - 20) * 2 = 60.
    let effect = effectiveness(Type::Fire, Type::Grass);
    assert_eq!(effect, 2.0);
    assert_eq!(hit_damage(50.0, 20.0, effect), 60.0);
}

#[test]
fn dominated_attack_still_deals_the_floor() {
    assert_eq!(hit_damage(10.0, 50.0, 1.0), 1.0);
    assert_eq!(hit_damage(10.0, 50.0, 0.5), 0.5);
    assert_eq!(hit_damage(10.0, 50.0, 2.0), 2.0);
}

#[test]
fn immune_matchup_deals_nothing() {
    assert_eq!(hit_damage(100.0, 0.0, effectiveness(Type::Normal, Type::Ghost)), 0.0);
}

#[test]
fn one_sided_battle_has_exactly_one_winner() {
    // The dark side one-shots the ghost on any connecting hit, and the ghost
    // cannot chew through a billion HP within the turn bound.
    let goliath = mon("goliath", Type::Dark, 1000.0, 0.0, 100.0, 1e9);
    let wisp = mon("wisp", Type::Ghost, 50.0, 0.0, 1.0, 10.0);
    let outcome = Battle::new(goliath, wisp, 1234).unwrap().run().unwrap();
    assert_eq!(outcome.winner, Side::A);
    assert_eq!(outcome.winner_name, "goliath");
    assert!(outcome.mon_b.hp <= 0.0);
    assert!(outcome.mon_a.hp > 0.0);
    assert!(outcome.turns >= 1);
}

#[test]
fn loser_health_is_not_clamped_at_zero() {
    let goliath = mon("goliath", Type::Dark, 1000.0, 0.0, 100.0, 1e9);
    let wisp = mon("wisp", Type::Ghost, 50.0, 0.0, 1.0, 10.0);
    let outcome = Battle::new(goliath, wisp, 99).unwrap().run().unwrap();
    // Overkill damage leaves the HP well below zero.
    assert!(outcome.mon_b.hp < 0.0);
}

#[test]
fn same_seed_replays_identically() {
    let a = mon("blaze", Type::Fire, 30.0, 10.0, 60.0, 80.0);
    let b = mon("sprout", Type::Grass, 25.0, 12.0, 40.0, 90.0);
    let first = Battle::new(a.clone(), b.clone(), 777).unwrap().run().unwrap();
    let second = Battle::new(a, b, 777).unwrap().run().unwrap();
    assert_eq!(first.winner, second.winner);
    assert_eq!(first.turns, second.turns);
    assert_eq!(first.log.lines(), second.log.lines());
}

#[test]
fn mutual_immunity_hits_the_turn_bound() {
    // normal vs ghost is immune in both directions: no damage ever lands.
    let plain = mon("plain", Type::Normal, 100.0, 0.0, 10.0, 50.0);
    let shade = mon("shade", Type::Ghost, 100.0, 0.0, 20.0, 50.0);
    let err = Battle::new(plain, shade, 5).unwrap().run().unwrap_err();
    assert!(err.to_string().contains(&MAX_TURNS.to_string()));
}

#[test]
fn fainted_entrant_is_rejected() {
    let up = mon("up", Type::Normal, 10.0, 10.0, 10.0, 50.0);
    let down = mon("down", Type::Normal, 10.0, 10.0, 10.0, 0.0);
    assert!(Battle::new(up.clone(), down.clone(), 1).is_err());
    assert!(Battle::new(down, up, 1).is_err());
}

/// Find a seed whose first two d20 draws satisfy `pred`, by replaying the
/// same `SmallRng` stream the engine uses.
fn hunt_seed(pred: impl Fn(u32, u32) -> bool) -> u64 {
    (0u64..100_000)
        .find(|&seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let first: u32 = rng.gen_range(1..=20);
            let second: u32 = rng.gen_range(1..=20);
            pred(first, second)
        })
        .expect("no matching seed in range")
}

#[test]
fn missed_attack_leaves_defender_untouched() {
    // First draw is a 1: the opening attack misses and consumes only the
    // miss roll. Second draw is the counterattacker's miss roll; it must
    // connect so the battle ends on turn 2.
    let seed = hunt_seed(|first, second| first == 1 && second != 1);
    let swift = mon("swift", Type::Normal, 1000.0, 0.0, 100.0, 10.0);
    let anvil = mon("anvil", Type::Normal, 1000.0, 0.0, 1.0, 50.0);
    let outcome = Battle::new(swift, anvil, seed).unwrap().run().unwrap();
    assert!(outcome
        .log
        .lines()
        .contains(&"THE ATTACK MISSED!".to_string()));
    assert_eq!(outcome.turns, 2);
    assert_eq!(outcome.winner, Side::B);
    // The missed turn changed nothing: the defender still has full HP.
    assert_eq!(outcome.mon_b.hp, 50.0);
}

#[test]
fn critical_hit_exactly_doubles_damage() {
    // First draw connects, second draw is a 20: the opening attack crits.
    let seed = hunt_seed(|first, second| first != 1 && second == 20);
    let striker = mon("striker", Type::Normal, 30.0, 0.0, 100.0, 100.0);
    let sponge = mon("sponge", Type::Normal, 1.0, 10.0, 1.0, 25.0);
    let base = hit_damage(30.0, 10.0, effectiveness(Type::Normal, Type::Normal));
    assert_eq!(base, 20.0);
    let outcome = Battle::new(striker, sponge, seed).unwrap().run().unwrap();
    assert!(outcome
        .log
        .lines()
        .contains(&"A CRITICAL HIT!".to_string()));
    // The non-crit hit (20) would have left 5 HP; the doubled hit (40) ends
    // the battle on turn 1 at exactly 25 - 2 * 20.
    assert_eq!(outcome.turns, 1);
    assert_eq!(outcome.winner, Side::A);
    assert_eq!(outcome.mon_b.hp, 25.0 - 2.0 * base);
}

#[test]
fn narration_opens_with_the_first_turn() {
    let goliath = mon("goliath", Type::Dark, 1000.0, 0.0, 100.0, 1e9);
    let wisp = mon("wisp", Type::Ghost, 50.0, 0.0, 1.0, 10.0);
    let outcome = Battle::new(goliath, wisp, 42).unwrap().run().unwrap();
    let lines = outcome.log.lines();
    assert_eq!(lines[0], "------------ TURN 1 ------------");
    assert_eq!(lines[1], "*** goliath is attacking. ***");
    // dark vs ghost is super effective, so the commentary follows.
    assert_eq!(lines[2], "IT'S SUPER EFFECTIVE!");
}
