//! Bracket, BracketState and BracketError.

use crate::models::node::{MatchId, MatchNode, MatchResult, Node};
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

/// Unique identifier for a bracket.
pub type BracketId = Uuid;

/// Number of seeded players (leaves).
pub const PLAYER_COUNT: usize = 8;
/// Number of match nodes.
pub const MATCH_COUNT: usize = 7;
/// Total nodes in the arena.
pub const NODE_COUNT: usize = PLAYER_COUNT + MATCH_COUNT;

pub const QUARTERFINAL_IDS: [MatchId; 4] = [1, 2, 3, 4];
pub const SEMIFINAL_IDS: [MatchId; 2] = [5, 6];
pub const FINAL_ID: MatchId = 7;

/// Match id and label for arena slots 0..MATCH_COUNT (root first, then level by level).
const MATCH_SLOTS: [(MatchId, &str); MATCH_COUNT] = [
    (7, "FINAL"),
    (5, "SF1"),
    (6, "SF2"),
    (1, "QF1"),
    (2, "QF2"),
    (3, "QF3"),
    (4, "QF4"),
];

/// Errors that can occur while simulating a bracket.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// Bracket is not in a state that allows this round to be played.
    InvalidState,
    /// No match node carries this id.
    UnknownMatch(MatchId),
    /// Match already has a recorded winner.
    AlreadyPlayed(MatchId),
    /// At least one child of the match has no winner yet.
    ChildrenUnresolved(MatchId),
}

impl std::fmt::Display for BracketError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BracketError::InvalidState => write!(f, "Invalid state for this round"),
            BracketError::UnknownMatch(id) => write!(f, "No match with id {}", id),
            BracketError::AlreadyPlayed(id) => write!(f, "Match {} was already played", id),
            BracketError::ChildrenUnresolved(id) => {
                write!(f, "Match {} cannot be played before both sides are decided", id)
            }
        }
    }
}

/// Next round to be played.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketState {
    /// Players seeded; matches 1-4 pending.
    #[default]
    QuarterFinals,
    /// Matches 5-6 pending.
    SemiFinals,
    /// Match 7 pending.
    Final,
    /// Every match has a winner; the bracket is read-only from here on.
    Completed,
}

/// Where two players would cross if both kept winning.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Meeting {
    pub match_id: MatchId,
    /// Height of the meeting match: 1 quarterfinal, 2 semifinal, 3 final.
    pub round: u32,
}

/// Index of a node in the bracket arena.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Complete binary tree of matches stored as a flat arena.
///
/// Slot 0 is the final; the children of slot `i` are `2i + 1` and `2i + 2`.
/// Slots 0-6 are matches and slots 7-14 are the players, left to right.
#[derive(Clone, Debug, Serialize)]
pub struct Bracket {
    pub id: BracketId,
    pub state: BracketState,
    nodes: Vec<Node>,
}

impl Bracket {
    /// Build the 7-match skeleton and seat `players` in slot order
    /// (QF1.left, QF1.right, QF2.left, ..., QF4.right).
    ///
    /// Panics unless exactly 8 distinct, non-empty names are given.
    pub fn new(players: Vec<String>) -> Self {
        assert_eq!(
            players.len(),
            PLAYER_COUNT,
            "bracket needs exactly {} players",
            PLAYER_COUNT
        );
        let mut seen = HashSet::new();
        for name in &players {
            assert!(!name.is_empty(), "player names must be non-empty");
            assert!(seen.insert(name.as_str()), "duplicate player name {:?}", name);
        }

        let mut nodes = Vec::with_capacity(NODE_COUNT);
        nodes.extend(
            MATCH_SLOTS
                .iter()
                .map(|&(id, label)| Node::Match(MatchNode::new(id, label))),
        );
        nodes.extend(players.into_iter().map(|name| Node::Player { name }));

        Self {
            id: Uuid::new_v4(),
            state: BracketState::QuarterFinals,
            nodes,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Node at `id`. NodeIds only come from this bracket, so the slot always exists.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Left and right children of a match; None for leaves.
    pub fn children(&self, id: NodeId) -> Option<(NodeId, NodeId)> {
        if self.node(id).is_leaf() {
            return None;
        }
        Some((NodeId(2 * id.0 + 1), NodeId(2 * id.0 + 2)))
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        (id.0 > 0).then(|| NodeId((id.0 - 1) / 2))
    }

    /// Player names in slot order.
    pub fn players(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter_map(|n| match n {
                Node::Player { name } => Some(name.as_str()),
                Node::Match(_) => None,
            })
            .collect()
    }

    /// All match nodes, root first.
    pub fn matches(&self) -> impl Iterator<Item = (NodeId, &MatchNode)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_match().map(|m| (NodeId(i), m)))
    }

    /// Store the outcome of a match. Callers guarantee `id` is an unplayed match.
    pub(crate) fn record_result(&mut self, id: NodeId, result: MatchResult) {
        if let Node::Match(m) = &mut self.nodes[id.0] {
            m.result = Some(result);
        }
    }
}
