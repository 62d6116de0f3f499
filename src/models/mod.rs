//! Data structures for the bracket: nodes, the bracket arena, state and errors.

mod bracket;
mod node;

pub use bracket::{
    Bracket, BracketError, BracketId, BracketState, Meeting, NodeId, FINAL_ID, MATCH_COUNT,
    NODE_COUNT, PLAYER_COUNT, QUARTERFINAL_IDS, SEMIFINAL_IDS,
};
pub use node::{MatchId, MatchNode, MatchResult, Node};
