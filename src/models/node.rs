//! Bracket nodes: player leaves and match nodes.

use serde::Serialize;

/// Identifier of a match node (1-4 quarterfinals, 5-6 semifinals, 7 final).
pub type MatchId = u32;

/// Outcome recorded on a match node once it has been played.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchResult {
    pub winner: String,
    /// The winner's drawn score (always >= 1 once played).
    pub score: u32,
    pub left_score: u32,
    pub right_score: u32,
}

/// An internal node of the bracket: one contest between its two children.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchNode {
    pub id: MatchId,
    /// Short name used in logs and display (e.g. "QF1", "SF2", "FINAL").
    pub label: String,
    /// None if not yet played.
    pub result: Option<MatchResult>,
}

impl MatchNode {
    pub fn new(id: MatchId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            result: None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    /// Winner score, 0 meaning "not yet played".
    pub fn score(&self) -> u32 {
        self.result.as_ref().map_or(0, |r| r.score)
    }

    pub fn winner(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.winner.as_str())
    }
}

/// A bracket node: either a seeded player or a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Player { name: String },
    Match(MatchNode),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Player { .. })
    }

    pub fn match_id(&self) -> Option<MatchId> {
        match self {
            Node::Player { .. } => None,
            Node::Match(m) => Some(m.id),
        }
    }

    pub fn as_match(&self) -> Option<&MatchNode> {
        match self {
            Node::Player { .. } => None,
            Node::Match(m) => Some(m),
        }
    }

    /// Name shown for this node: the player, the recorded winner, or "<label> TBD".
    pub fn display_name(&self) -> String {
        match self {
            Node::Player { name } => name.clone(),
            Node::Match(m) => match &m.result {
                Some(r) => r.winner.clone(),
                None => format!("{} TBD", m.label),
            },
        }
    }

    /// True for leaves and for matches that already have a winner.
    pub fn is_resolved(&self) -> bool {
        match self {
            Node::Player { .. } => true,
            Node::Match(m) => m.is_played(),
        }
    }
}
