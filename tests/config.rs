//! Integration tests for environment-driven simulation settings.

use bracket_sim::config::{parse_seed, SEED_VAR};
use bracket_sim::{run_tournament, SimulationConfig};

#[test]
fn parse_seed_accepts_integers_and_ignores_the_rest() {
    assert_eq!(parse_seed(Some("42")), Some(42));
    assert_eq!(parse_seed(Some("  7 ")), Some(7));
    assert_eq!(parse_seed(Some("")), None);
    assert_eq!(parse_seed(Some("not-a-seed")), None);
    assert_eq!(parse_seed(Some("-1")), None);
    assert_eq!(parse_seed(None), None);
}

#[test]
fn same_seed_replays_same_bracket() {
    let config = SimulationConfig { seed: Some(1234) };
    let a = run_tournament(&mut config.random_source(None)).unwrap();
    let b = run_tournament(&mut config.random_source(None)).unwrap();
    assert_eq!(a.players(), b.players());
    let scores = |br: &bracket_sim::Bracket| -> Vec<_> {
        br.matches().map(|(_, m)| m.result.clone()).collect()
    };
    assert_eq!(scores(&a), scores(&b));
}

#[test]
fn explicit_seed_overrides_configured_one() {
    let config = SimulationConfig { seed: Some(1) };
    let a = run_tournament(&mut config.random_source(Some(99))).unwrap();
    let b = run_tournament(&mut SimulationConfig { seed: Some(99) }.random_source(None)).unwrap();
    assert_eq!(a.players(), b.players());
}

#[test]
fn from_env_reads_seed_variable() {
    std::env::set_var(SEED_VAR, "31");
    assert_eq!(SimulationConfig::from_env().seed, Some(31));

    std::env::set_var(SEED_VAR, "junk");
    assert_eq!(SimulationConfig::from_env().seed, None);

    std::env::remove_var(SEED_VAR);
    assert_eq!(SimulationConfig::from_env(), SimulationConfig::default());
}
