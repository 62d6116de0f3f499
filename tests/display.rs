//! Integration tests for the text rendering of a bracket.

mod common;

use bracket_sim::{build_tournament, render_bracket, render_players, render_round};
use common::{scripted_bracket, ScriptedSource, ALICE_CHAMPION_SCORES, BOB_ALICE_SHUFFLE};

#[test]
fn players_listed_in_seat_order() {
    let bracket = scripted_bracket(&ALICE_CHAMPION_SCORES);
    let lines: Vec<_> = render_players(&bracket).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "  Player: Bob");
    assert_eq!(lines[1], "  Player: Alice");
    assert_eq!(lines[7], "  Player: Henry");
}

#[test]
fn round_lines_show_sides_and_winner() {
    let bracket = scripted_bracket(&ALICE_CHAMPION_SCORES);
    assert_eq!(
        render_round(&bracket, 2),
        "  Match 5: Alice vs Carol -> winner: Alice (score 6)\n\
         \x20 Match 6: Frank vs Grace -> winner: Grace (score 9)\n"
    );
    assert_eq!(
        render_round(&bracket, 3),
        "  Match 7: Alice vs Grace -> winner: Alice (score 9)\n"
    );
}

#[test]
fn unplayed_matches_render_placeholders() {
    let bracket = build_tournament(&mut ScriptedSource::new(BOB_ALICE_SHUFFLE));
    assert_eq!(
        render_round(&bracket, 3),
        "  Match 7: SF1 TBD vs SF2 TBD -> winner: ? (score 0)\n"
    );
}

#[test]
fn full_bracket_has_every_section() {
    let text = render_bracket(&scripted_bracket(&ALICE_CHAMPION_SCORES));
    assert!(text.starts_with("=== ROUND 0: PLAYERS ===\n  Player: Bob\n"));
    assert!(text.contains("\n=== ROUND 1 ===\n  Match 1: Bob vs Alice -> winner: Alice (score 8)\n"));
    assert!(text.contains("\n=== ROUND 2 ===\n"));
    assert!(text.ends_with("=== FINAL (ROUND 3) ===\n  Match 7: Alice vs Grace -> winner: Alice (score 9)\n"));
    assert_eq!(text.matches("  Match ").count(), 7);
}
