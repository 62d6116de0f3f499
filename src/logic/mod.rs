//! Bracket logic: setup, simulation, search and queries.

mod queries;
mod search;
mod setup;
mod simulation;

pub use queries::{
    champion, first_win, path_to_final, theoretical_ladder, total_score_by_name, would_meet,
};
pub use search::{
    find_first, find_leaf_by_name, find_match_by_id, find_match_by_name, height,
    lowest_common_ancestor,
};
pub use setup::{build_tournament, build_tournament_with_roster, DEFAULT_ROSTER};
pub use simulation::{
    play_all_rounds, play_final, play_match, play_quarterfinals, play_semifinals, run_tournament,
    MAX_SCORE, MIN_SCORE,
};
