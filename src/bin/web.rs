//! Web server exposing simulated brackets and their queries as JSON.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), BRACKET_SEED (fixed seed).

use actix_web::{
    get, post,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use bracket_sim::{
    first_win, path_to_final, render_bracket, run_tournament, total_score_by_name, would_meet,
    Bracket, BracketId, SimulationConfig,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-bracket entry: bracket data + last activity time (for auto-cleanup).
struct BracketEntry {
    bracket: Bracket,
    last_activity: Instant,
}

/// In-memory brackets by id. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<BracketId, BracketEntry>>>;

/// Inactivity threshold: brackets not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateBracketBody {
    #[serde(default)]
    seed: Option<u64>,
}

/// Path segment: bracket id (e.g. /api/brackets/{id})
#[derive(Deserialize)]
struct BracketPath {
    id: BracketId,
}

/// Path segments: bracket id and player name (e.g. /api/brackets/{id}/players/{name}/path)
#[derive(Deserialize)]
struct BracketPlayerPath {
    id: BracketId,
    name: String,
}

#[derive(Deserialize)]
struct MeetQuery {
    a: String,
    b: String,
}

/// Run `f` against a bracket (404 if not found). Touching it refreshes last_activity.
fn with_bracket(state: &AppState, id: BracketId, f: impl FnOnce(&Bracket) -> HttpResponse) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&entry.bracket)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No bracket" })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "bracket-sim",
    })
}

/// Seed and simulate a new bracket (returns it with id; client stores id for queries).
#[post("/api/brackets")]
async fn api_create_bracket(
    state: AppState,
    config: Data<SimulationConfig>,
    body: Option<Json<CreateBracketBody>>,
) -> HttpResponse {
    let mut rng = config.random_source(body.and_then(|b| b.seed));
    let bracket = match run_tournament(&mut rng) {
        Ok(b) => b,
        Err(e) => {
            log::error!("Simulation failed: {}", e);
            return HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }));
        }
    };
    let response = HttpResponse::Ok().json(&bracket);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        bracket.id,
        BracketEntry {
            bracket,
            last_activity: Instant::now(),
        },
    );
    response
}

#[get("/api/brackets/{id}")]
async fn api_get_bracket(state: AppState, path: Path<BracketPath>) -> HttpResponse {
    with_bracket(&state, path.id, |b| HttpResponse::Ok().json(b))
}

/// Same bracket as the console layout.
#[get("/api/brackets/{id}/text")]
async fn api_bracket_text(state: AppState, path: Path<BracketPath>) -> HttpResponse {
    with_bracket(&state, path.id, |b| {
        HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(render_bracket(b))
    })
}

#[get("/api/brackets/{id}/players/{name}/path")]
async fn api_player_path(state: AppState, path: Path<BracketPlayerPath>) -> HttpResponse {
    with_bracket(&state, path.id, |b| {
        HttpResponse::Ok().json(serde_json::json!({ "path": path_to_final(b, &path.name) }))
    })
}

#[get("/api/brackets/{id}/players/{name}/score")]
async fn api_player_score(state: AppState, path: Path<BracketPlayerPath>) -> HttpResponse {
    with_bracket(&state, path.id, |b| {
        HttpResponse::Ok().json(serde_json::json!({ "total": total_score_by_name(b, &path.name) }))
    })
}

/// Earliest match the player won; `null` if none.
#[get("/api/brackets/{id}/players/{name}/first-win")]
async fn api_player_first_win(state: AppState, path: Path<BracketPlayerPath>) -> HttpResponse {
    with_bracket(&state, path.id, |b| {
        HttpResponse::Ok().json(serde_json::json!({ "match": first_win(b, &path.name) }))
    })
}

/// Where players `a` and `b` would meet; `null` if they never would.
#[get("/api/brackets/{id}/meet")]
async fn api_would_meet(state: AppState, path: Path<BracketPath>, query: Query<MeetQuery>) -> HttpResponse {
    with_bracket(&state, path.id, |b| {
        HttpResponse::Ok().json(serde_json::json!({ "meeting": would_meet(b, &query.a, &query.b) }))
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let config = Data::new(SimulationConfig::from_env());
    let state = Data::new(RwLock::new(HashMap::<BracketId, BracketEntry>::new()));

    // Background task: every 30 minutes, remove brackets inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive bracket(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .service(api_health)
            .service(api_create_bracket)
            .service(api_get_bracket)
            .service(api_bracket_text)
            .service(api_player_path)
            .service(api_player_score)
            .service(api_player_first_win)
            .service(api_would_meet)
    })
    .bind(bind)?
    .run()
    .await
}
