//! Depth-first search primitives over the bracket arena.

use crate::models::{Bracket, MatchId, Node, NodeId};

/// First node under `from` (pre-order, left before right) satisfying `predicate`.
pub fn find_first<F>(bracket: &Bracket, from: NodeId, predicate: F) -> Option<NodeId>
where
    F: Fn(&Node) -> bool,
{
    fn walk<F: Fn(&Node) -> bool>(bracket: &Bracket, at: NodeId, predicate: &F) -> Option<NodeId> {
        if predicate(bracket.node(at)) {
            return Some(at);
        }
        let (left, right) = bracket.children(at)?;
        walk(bracket, left, predicate).or_else(|| walk(bracket, right, predicate))
    }
    walk(bracket, from, &predicate)
}

/// Leaf seated with `name`. Match nodes won by that player are never returned.
pub fn find_leaf_by_name(bracket: &Bracket, name: &str) -> Option<NodeId> {
    find_first(bracket, bracket.root(), |node| {
        matches!(node, Node::Player { name: n } if n == name)
    })
}

pub fn find_match_by_id(bracket: &Bracket, match_id: MatchId) -> Option<NodeId> {
    find_first(bracket, bracket.root(), |node| node.match_id() == Some(match_id))
}

/// First match in pre-order whose recorded winner is `name`.
///
/// Parents are checked before children, so for a player with several wins this is the
/// highest-round one. Use [`crate::first_win`] for the earliest win.
pub fn find_match_by_name(bracket: &Bracket, name: &str) -> Option<NodeId> {
    find_first(bracket, bracket.root(), |node| {
        node.as_match().and_then(|m| m.winner()) == Some(name)
    })
}

/// Lowest common ancestor of `a` and `b` within the subtree at `root`.
///
/// Returns `root` if it is `a` or `b`, or if they sit in different subtrees; None if
/// neither is below `root`.
pub fn lowest_common_ancestor(
    bracket: &Bracket,
    root: NodeId,
    a: NodeId,
    b: NodeId,
) -> Option<NodeId> {
    if root == a || root == b {
        return Some(root);
    }
    let (left, right) = bracket.children(root)?;
    let in_left = lowest_common_ancestor(bracket, left, a, b);
    let in_right = lowest_common_ancestor(bracket, right, a, b);
    match (in_left, in_right) {
        (Some(_), Some(_)) => Some(root),
        (found, None) | (None, found) => found,
    }
}

/// Height of the subtree at `node`; leaves are 0.
pub fn height(bracket: &Bracket, node: NodeId) -> u32 {
    match bracket.children(node) {
        None => 0,
        Some((left, right)) => height(bracket, left).max(height(bracket, right)) + 1,
    }
}
