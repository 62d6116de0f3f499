//! Plain-text rendering of a bracket for the console and `/text` endpoint.

use crate::logic::height;
use crate::models::{Bracket, NodeId};
use std::fmt::Write;

/// "  Player: <name>" per seat, left to right.
pub fn render_players(bracket: &Bracket) -> String {
    let mut out = String::new();
    for name in bracket.players() {
        let _ = writeln!(out, "  Player: {}", name);
    }
    out
}

/// One line per match at `round` (tree height), left to right.
pub fn render_round(bracket: &Bracket, round: u32) -> String {
    fn walk(bracket: &Bracket, at: NodeId, round: u32, out: &mut String) {
        let Some((left, right)) = bracket.children(at) else {
            return;
        };
        if height(bracket, at) == round {
            if let Some(m) = bracket.node(at).as_match() {
                let _ = writeln!(
                    out,
                    "  Match {}: {} vs {} -> winner: {} (score {})",
                    m.id,
                    bracket.node(left).display_name(),
                    bracket.node(right).display_name(),
                    m.winner().unwrap_or("?"),
                    m.score()
                );
            }
        }
        walk(bracket, left, round, out);
        walk(bracket, right, round, out);
    }

    let mut out = String::new();
    walk(bracket, bracket.root(), round, &mut out);
    out
}

/// Players, then every round up to the final.
pub fn render_bracket(bracket: &Bracket) -> String {
    let final_round = height(bracket, bracket.root());
    let mut out = String::from("=== ROUND 0: PLAYERS ===\n");
    out.push_str(&render_players(bracket));
    for round in 1..=final_round {
        if round == final_round {
            let _ = writeln!(out, "\n=== FINAL (ROUND {}) ===", round);
        } else {
            let _ = writeln!(out, "\n=== ROUND {} ===", round);
        }
        out.push_str(&render_round(bracket, round));
    }
    out
}
