//! Single-elimination bracket simulator: library with models, logic and rendering.

pub mod config;
pub mod display;
pub mod logic;
pub mod models;
pub mod random;

pub use config::SimulationConfig;
pub use display::{render_bracket, render_players, render_round};
pub use logic::{
    build_tournament, build_tournament_with_roster, champion, find_first, find_leaf_by_name,
    find_match_by_id, find_match_by_name, first_win, height, lowest_common_ancestor,
    path_to_final, play_all_rounds, play_final, play_match, play_quarterfinals, play_semifinals,
    run_tournament, theoretical_ladder, total_score_by_name, would_meet, DEFAULT_ROSTER,
    MAX_SCORE, MIN_SCORE,
};
pub use models::{
    Bracket, BracketError, BracketId, BracketState, MatchId, MatchNode, MatchResult, Meeting, Node,
    NodeId, FINAL_ID, MATCH_COUNT, NODE_COUNT, PLAYER_COUNT, QUARTERFINAL_IDS, SEMIFINAL_IDS,
};
pub use random::{RandomSource, RngSource};
