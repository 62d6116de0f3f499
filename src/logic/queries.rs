//! Read-only bracket queries: ladders, paths, meeting points and scores.

use crate::logic::search::{find_leaf_by_name, find_match_by_id, height, lowest_common_ancestor};
use crate::models::{Bracket, MatchId, MatchNode, Meeting, Node, NodeId};

/// Match ids a player would have to win through to take the title, first round first.
///
/// Depends only on the bracket shape. Empty if the player is not seated.
pub fn theoretical_ladder(bracket: &Bracket, player: &str) -> Vec<MatchId> {
    fn collect(bracket: &Bracket, at: NodeId, player: &str, ladder: &mut Vec<MatchId>) -> bool {
        let node = bracket.node(at);
        let (left, right) = match bracket.children(at) {
            Some(children) => children,
            None => return matches!(node, Node::Player { name } if name == player),
        };
        if collect(bracket, left, player, ladder) || collect(bracket, right, player, ladder) {
            ladder.extend(node.match_id());
            return true;
        }
        false
    }

    let mut ladder = Vec::new();
    collect(bracket, bracket.root(), player, &mut ladder);
    ladder
}

/// Matches the player actually played, stopping at (and including) their first loss.
///
/// Unplayed matches on the ladder are skipped. Empty if the player is not seated.
pub fn path_to_final(bracket: &Bracket, player: &str) -> Vec<MatchId> {
    let mut path = Vec::new();
    for match_id in theoretical_ladder(bracket, player) {
        let winner = find_match_by_id(bracket, match_id)
            .and_then(|id| bracket.node(id).as_match())
            .and_then(|m| m.winner());
        let Some(winner) = winner else {
            continue;
        };
        path.push(match_id);
        if winner != player {
            break;
        }
    }
    path
}

/// Match and round where two players would meet if both kept winning.
///
/// None if either player is missing or both names are the same player.
pub fn would_meet(bracket: &Bracket, first: &str, second: &str) -> Option<Meeting> {
    let a = find_leaf_by_name(bracket, first)?;
    let b = find_leaf_by_name(bracket, second)?;
    let meeting = lowest_common_ancestor(bracket, bracket.root(), a, b)?;
    let match_id = bracket.node(meeting).match_id()?;
    Some(Meeting {
        match_id,
        round: height(bracket, meeting),
    })
}

/// Sum of winning scores over every match the player won; 0 if they never won.
pub fn total_score_by_name(bracket: &Bracket, player: &str) -> u32 {
    bracket
        .matches()
        .filter(|(_, m)| m.winner() == Some(player))
        .map(|(_, m)| m.score())
        .sum()
}

/// The player's chronologically earliest win.
///
/// Every run starts at the match directly above the player's seat, so this is that
/// match if they won it and None otherwise.
pub fn first_win<'a>(bracket: &'a Bracket, player: &str) -> Option<&'a MatchNode> {
    let seat = find_leaf_by_name(bracket, player)?;
    let first = bracket.node(bracket.parent(seat)?).as_match()?;
    (first.winner() == Some(player)).then_some(first)
}

/// Winner of the final, once played.
pub fn champion(bracket: &Bracket) -> Option<&MatchNode> {
    bracket
        .node(bracket.root())
        .as_match()
        .filter(|m| m.is_played())
}
