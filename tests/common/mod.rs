//! Shared helpers: a scripted random source for exact-outcome scenarios.

#![allow(dead_code)]

use bracket_sim::{Bracket, RandomSource};
use std::collections::VecDeque;

/// Replays a fixed list of draws; panics if a draw is out of range or the script runs out.
pub struct ScriptedSource {
    draws: VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        let v = self.draws.pop_front().expect("scripted draws exhausted");
        assert!(
            (low..=high).contains(&v),
            "scripted draw {v} outside [{low}, {high}]"
        );
        v
    }
}

/// Shuffle draws that turn the default roster into
/// [Bob, Alice, Carol, David, Eva, Frank, Grace, Henry].
pub const BOB_ALICE_SHUFFLE: [u32; 7] = [7, 6, 5, 4, 3, 2, 0];

/// Shuffle draws that leave the roster order untouched.
pub const IDENTITY_SHUFFLE: [u32; 7] = [7, 6, 5, 4, 3, 2, 1];

/// Score draws (left, right) for QF1..QF4, SF1, SF2, FINAL after BOB_ALICE_SHUFFLE:
/// QF1 Bob 3 / Alice 8, QF2 Carol 5 / David 5 (tie, left wins), QF3 Eva 2 / Frank 9,
/// QF4 Grace 10 / Henry 1, SF1 Alice 6 / Carol 4, SF2 Frank 7 / Grace 9,
/// FINAL Alice 9 / Grace 9 (tie, Alice).
pub const ALICE_CHAMPION_SCORES: [u32; 14] = [3, 8, 5, 5, 2, 9, 10, 1, 6, 4, 7, 9, 9, 9];

/// Same as ALICE_CHAMPION_SCORES except Carol beats Alice 6-4 in SF1 and Grace wins the final.
pub const ALICE_OUT_IN_SEMIS_SCORES: [u32; 14] = [3, 8, 5, 5, 2, 9, 10, 1, 4, 6, 7, 9, 2, 5];

/// Bracket seeded with BOB_ALICE_SHUFFLE and played with `scores`.
pub fn scripted_bracket(scores: &[u32]) -> Bracket {
    let mut rng = ScriptedSource::new(BOB_ALICE_SHUFFLE.iter().chain(scores).copied());
    let bracket = bracket_sim::run_tournament(&mut rng).unwrap();
    assert_eq!(rng.remaining(), 0);
    bracket
}
