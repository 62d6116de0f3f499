//! Setup phase: build the bracket skeleton and seed players randomly.

use crate::models::Bracket;
use crate::random::RandomSource;

/// Fixed roster used when no other names are given.
pub const DEFAULT_ROSTER: [&str; 8] = [
    "Alice", "Bob", "Carol", "David", "Eva", "Frank", "Grace", "Henry",
];

/// Build a bracket from [`DEFAULT_ROSTER`] in random order.
pub fn build_tournament<R: RandomSource>(rng: &mut R) -> Bracket {
    build_tournament_with_roster(&DEFAULT_ROSTER, rng)
}

/// Shuffle `roster` and seat it into the 8 leaf slots, left to right.
///
/// Panics if the roster is not exactly 8 distinct, non-empty names.
pub fn build_tournament_with_roster<R: RandomSource>(roster: &[&str], rng: &mut R) -> Bracket {
    let mut names: Vec<String> = roster.iter().map(|n| n.to_string()).collect();
    rng.shuffle(&mut names);
    log::info!("Random player order: {}", names.join(", "));
    Bracket::new(names)
}
