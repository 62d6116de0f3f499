//! Match simulation: random scores, winners propagated bottom-up round by round.

use crate::logic::queries::champion;
use crate::logic::search::find_match_by_id;
use crate::logic::setup::build_tournament;
use crate::models::{
    Bracket, BracketError, BracketState, MatchId, MatchResult, FINAL_ID, QUARTERFINAL_IDS,
    SEMIFINAL_IDS,
};
use crate::random::RandomSource;

/// Lowest and highest score a side can draw.
pub const MIN_SCORE: u32 = 1;
pub const MAX_SCORE: u32 = 10;

/// Play one match: draw left then right score, left wins ties.
///
/// Both children must already be decided (or be players), and the match must not have
/// been played yet.
pub fn play_match<R: RandomSource>(
    bracket: &mut Bracket,
    match_id: MatchId,
    rng: &mut R,
) -> Result<MatchResult, BracketError> {
    let node = find_match_by_id(bracket, match_id).ok_or(BracketError::UnknownMatch(match_id))?;
    let label = match bracket.node(node).as_match() {
        Some(m) if m.is_played() => return Err(BracketError::AlreadyPlayed(match_id)),
        Some(m) => m.label.clone(),
        None => return Err(BracketError::UnknownMatch(match_id)),
    };
    let (left, right) = bracket
        .children(node)
        .ok_or(BracketError::UnknownMatch(match_id))?;
    let (left, right) = (bracket.node(left), bracket.node(right));
    if !left.is_resolved() || !right.is_resolved() {
        return Err(BracketError::ChildrenUnresolved(match_id));
    }
    let (left_name, right_name) = (left.display_name(), right.display_name());

    let left_score = rng.uniform_int(MIN_SCORE, MAX_SCORE);
    let right_score = rng.uniform_int(MIN_SCORE, MAX_SCORE);
    let (winner, score) = if left_score >= right_score {
        (left_name.clone(), left_score)
    } else {
        (right_name.clone(), right_score)
    };
    log::info!(
        "{}: {} ({}) vs {} ({}) -> winner {}",
        label,
        left_name,
        left_score,
        right_name,
        right_score,
        winner
    );

    let result = MatchResult {
        winner,
        score,
        left_score,
        right_score,
    };
    bracket.record_result(node, result.clone());
    Ok(result)
}

/// Play every match of one round and advance the bracket state.
///
/// Matches already played through [`play_match`] keep their result and are skipped.
fn play_round<R: RandomSource>(
    bracket: &mut Bracket,
    expected: BracketState,
    match_ids: &[MatchId],
    next: BracketState,
    rng: &mut R,
) -> Result<(), BracketError> {
    if bracket.state != expected {
        return Err(BracketError::InvalidState);
    }
    for &id in match_ids {
        match play_match(bracket, id, rng) {
            Ok(_) | Err(BracketError::AlreadyPlayed(_)) => {}
            Err(e) => return Err(e),
        }
    }
    bracket.state = next;
    log::info!("Bracket {}: {:?} played", bracket.id, expected);
    Ok(())
}

/// Round 1: matches 1-4.
pub fn play_quarterfinals<R: RandomSource>(
    bracket: &mut Bracket,
    rng: &mut R,
) -> Result<(), BracketError> {
    play_round(
        bracket,
        BracketState::QuarterFinals,
        &QUARTERFINAL_IDS,
        BracketState::SemiFinals,
        rng,
    )
}

/// Round 2: matches 5-6, fed by the quarterfinal winners.
pub fn play_semifinals<R: RandomSource>(
    bracket: &mut Bracket,
    rng: &mut R,
) -> Result<(), BracketError> {
    play_round(
        bracket,
        BracketState::SemiFinals,
        &SEMIFINAL_IDS,
        BracketState::Final,
        rng,
    )
}

/// Round 3: match 7. The bracket is completed afterwards.
pub fn play_final<R: RandomSource>(bracket: &mut Bracket, rng: &mut R) -> Result<(), BracketError> {
    play_round(
        bracket,
        BracketState::Final,
        &[FINAL_ID],
        BracketState::Completed,
        rng,
    )
}

/// Play whatever rounds are left, in order.
pub fn play_all_rounds<R: RandomSource>(
    bracket: &mut Bracket,
    rng: &mut R,
) -> Result<(), BracketError> {
    loop {
        match bracket.state {
            BracketState::QuarterFinals => play_quarterfinals(bracket, rng)?,
            BracketState::SemiFinals => play_semifinals(bracket, rng)?,
            BracketState::Final => play_final(bracket, rng)?,
            BracketState::Completed => return Ok(()),
        }
    }
}

/// Build a freshly seeded bracket and play it to completion.
pub fn run_tournament<R: RandomSource>(rng: &mut R) -> Result<Bracket, BracketError> {
    let mut bracket = build_tournament(rng);
    play_all_rounds(&mut bracket, rng)?;
    if let Some(m) = champion(&bracket) {
        log::info!(
            "Bracket {}: champion {} (score {})",
            bracket.id,
            m.winner().unwrap_or("?"),
            m.score()
        );
    }
    Ok(bracket)
}
