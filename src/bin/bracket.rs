//! Console demo: simulate one bracket and print it along with a few queries.
//! Run with: cargo run --bin bracket [PLAYER] [OPPONENT]
//! Set BRACKET_SEED for a reproducible run.

use bracket_sim::{
    champion, first_win, path_to_final, render_bracket, run_tournament, total_score_by_name,
    would_meet, SimulationConfig,
};

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let player = args.next().unwrap_or_else(|| "Alice".to_string());
    let opponent = args.next().unwrap_or_else(|| "Grace".to_string());

    let config = SimulationConfig::from_env();
    let mut rng = config.random_source(None);
    let bracket = match run_tournament(&mut rng) {
        Ok(b) => b,
        Err(e) => {
            log::error!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", render_bracket(&bracket));

    let path = path_to_final(&bracket, &player);
    if path.is_empty() {
        println!("Path to final for {}: (no matches or player not found)", player);
    } else {
        let steps: Vec<String> = path.iter().map(|id| format!("Match {}", id)).collect();
        println!(
            "Path to final for {} (stop at first loss): {}",
            player,
            steps.join(" -> ")
        );
    }

    match would_meet(&bracket, &player, &opponent) {
        Some(m) => println!(
            "{} and {} would meet at match {} in round {} (if both keep winning).",
            player, opponent, m.match_id, m.round
        ),
        None => println!("{} and {} would never meet in this bracket.", player, opponent),
    }

    println!(
        "Total score for {} (matches won): {}",
        player,
        total_score_by_name(&bracket, &player)
    );
    match first_win(&bracket, &player) {
        Some(m) => println!("First match {} won: match {} with score {}", player, m.id, m.score()),
        None => println!("{} did not win any match.", player),
    }

    if let Some(m) = champion(&bracket) {
        println!("Champion: {} with score {}", m.winner().unwrap_or("?"), m.score());
    }
}
