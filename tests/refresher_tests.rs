use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use price_targets::config::RefresherSettings;
use price_targets::controllers::SymbolQuery;
use price_targets::models::{Ack, Rating, Realtime, Ticker};
use price_targets::services::refresher::Refresher;

/// In-process stand-ins for the realtime, bot, and ratings_history
/// services, with enough bookkeeping to assert exactly which writes a
/// tick performed.
#[derive(Clone, Default)]
struct World {
    current: Arc<Mutex<HashMap<String, Rating>>>,
    history: Arc<Mutex<HashMap<String, Rating>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    bot_down: Arc<Mutex<bool>>,
    realtime_hits: Arc<Mutex<Vec<String>>>,
    bot_hits: Arc<Mutex<usize>>,
    bot_posts: Arc<Mutex<Vec<Value>>>,
    history_posts: Arc<Mutex<Vec<(String, Rating)>>>,
}

impl World {
    fn set_ratings(&self, symbol: &str, current: Rating, history: Rating) {
        self.current.lock().unwrap().insert(symbol.to_string(), current);
        self.history.lock().unwrap().insert(symbol.to_string(), history);
    }

    fn fail_realtime_for(&self, symbol: &str) {
        self.failing.lock().unwrap().insert(symbol.to_string());
    }
}

async fn stub_realtime(State(world): State<World>, Query(q): Query<SymbolQuery>) -> Response {
    let symbol = q.symbol.unwrap_or_default();
    world.realtime_hits.lock().unwrap().push(symbol.clone());

    if world.failing.lock().unwrap().contains(&symbol) {
        return (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": "backend down" })),
        )
            .into_response();
    }

    let rating = *world.current.lock().unwrap().get(&symbol).unwrap();
    let rating_history = *world.history.lock().unwrap().get(&symbol).unwrap();

    Json(Realtime {
        rating,
        rating_history,
        ticker: Ticker {
            company_name: format!("{symbol} Corp."),
            price: 22.55,
            symbol,
        },
    })
    .into_response()
}

async fn stub_bot(State(world): State<World>, Json(body): Json<Value>) -> Response {
    *world.bot_hits.lock().unwrap() += 1;

    if *world.bot_down.lock().unwrap() {
        return (StatusCode::INTERNAL_SERVER_ERROR, "bot down").into_response();
    }

    let symbol = body["ticker"]["symbol"].as_str().unwrap_or_default().to_string();
    world.bot_posts.lock().unwrap().push(body);
    Json(Ack {
        success: true,
        symbol,
    })
    .into_response()
}

async fn stub_history(
    State(world): State<World>,
    Query(q): Query<SymbolQuery>,
    Json(rating): Json<Rating>,
) -> Json<Ack> {
    let symbol = q.symbol.unwrap_or_default();
    world
        .history_posts
        .lock()
        .unwrap()
        .push((symbol.clone(), rating));
    world.history.lock().unwrap().insert(symbol.clone(), rating);
    Json(Ack {
        success: true,
        symbol,
    })
}

async fn spawn_world(world: World) -> String {
    let app = Router::new()
        .route("/realtime", get(stub_realtime))
        .route("/bot", post(stub_bot))
        .route("/ratings_history", post(stub_history))
        .with_state(world);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn refresher(base: &str, symbols: Vec<&str>) -> Refresher {
    Refresher::new(RefresherSettings {
        realtime_uri: format!("{base}/realtime"),
        bot_uri: format!("{base}/bot"),
        ratings_history_uri: format!("{base}/ratings_history"),
        symbols: symbols.into_iter().map(str::to_string).collect(),
        pacing: Duration::ZERO,
    })
}

fn rating(average: f64, highest: f64, lowest: f64) -> Rating {
    Rating {
        average,
        highest,
        lowest,
    }
}

#[tokio::test]
async fn unchanged_rating_makes_no_writes() {
    let world = World::default();
    world.set_ratings("GME", rating(5.0, 6.0, 4.0), rating(5.0, 6.0, 4.0));
    let base = spawn_world(world.clone()).await;

    let report = refresher(&base, vec!["GME"]).run_tick().await;

    assert_eq!(report.processed, 1);
    assert_eq!(report.unchanged, 1);
    assert_eq!(report.updated, 0);
    assert!(report.errors.is_empty());
    assert_eq!(*world.bot_hits.lock().unwrap(), 0);
    assert!(world.history_posts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn changed_rating_pushes_update_and_new_baseline() {
    let world = World::default();
    world.set_ratings("GME", rating(5.5, 6.0, 4.0), rating(5.0, 6.0, 4.0));
    let base = spawn_world(world.clone()).await;

    let report = refresher(&base, vec!["GME"]).run_tick().await;

    assert_eq!(report.updated, 1);
    assert_eq!(report.unchanged, 0);
    assert!(report.errors.is_empty());

    // The bot receives the whole merged record.
    let bot_posts = world.bot_posts.lock().unwrap();
    assert_eq!(bot_posts.len(), 1);
    assert_eq!(bot_posts[0]["ticker"]["symbol"], "GME");
    assert_eq!(bot_posts[0]["rating"]["average"], 5.5);
    assert_eq!(bot_posts[0]["rating_history"]["average"], 5.0);

    // The new baseline is the current rating, not the old history.
    let history_posts = world.history_posts.lock().unwrap();
    assert_eq!(history_posts.len(), 1);
    assert_eq!(history_posts[0].0, "GME");
    assert_eq!(history_posts[0].1, rating(5.5, 6.0, 4.0));
}

#[tokio::test]
async fn second_tick_after_propagation_is_a_noop() {
    let world = World::default();
    world.set_ratings("GME", rating(5.5, 6.0, 4.0), rating(5.0, 6.0, 4.0));
    let base = spawn_world(world.clone()).await;
    let job = refresher(&base, vec!["GME"]);

    let first = job.run_tick().await;
    assert_eq!(first.updated, 1);

    // The first tick moved the baseline, so the second sees no change.
    let second = job.run_tick().await;
    assert_eq!(second.updated, 0);
    assert_eq!(second.unchanged, 1);
    assert_eq!(*world.bot_hits.lock().unwrap(), 1);
    assert_eq!(world.history_posts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn failing_symbol_is_recorded_and_the_tick_continues() {
    let world = World::default();
    world.set_ratings("GME", rating(5.5, 6.0, 4.0), rating(5.0, 6.0, 4.0));
    world.fail_realtime_for("BAD");
    let base = spawn_world(world.clone()).await;

    let report = refresher(&base, vec!["BAD", "GME"]).run_tick().await;

    assert_eq!(report.processed, 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].0, "BAD");
    assert_eq!(report.updated, 1);
    assert_eq!(
        *world.realtime_hits.lock().unwrap(),
        vec!["BAD".to_string(), "GME".to_string()]
    );
}

#[tokio::test]
async fn empty_tracked_list_is_a_noop() {
    let world = World::default();
    let base = spawn_world(world.clone()).await;

    let report = refresher(&base, vec![]).run_tick().await;

    assert_eq!(report.processed, 0);
    assert!(world.realtime_hits.lock().unwrap().is_empty());
    assert_eq!(*world.bot_hits.lock().unwrap(), 0);
}

#[tokio::test]
async fn duplicate_symbols_are_processed_independently() {
    let world = World::default();
    world.set_ratings("GME", rating(5.0, 6.0, 4.0), rating(5.0, 6.0, 4.0));
    let base = spawn_world(world.clone()).await;

    let report = refresher(&base, vec!["GME", "GME"]).run_tick().await;

    assert_eq!(report.processed, 2);
    assert_eq!(report.unchanged, 2);
    assert_eq!(world.realtime_hits.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn bot_failure_prevents_the_baseline_write() {
    let world = World::default();
    world.set_ratings("GME", rating(5.5, 6.0, 4.0), rating(5.0, 6.0, 4.0));
    *world.bot_down.lock().unwrap() = true;
    let base = spawn_world(world.clone()).await;

    let report = refresher(&base, vec!["GME"]).run_tick().await;

    assert_eq!(report.updated, 0);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(*world.bot_hits.lock().unwrap(), 1);
    assert!(world.history_posts.lock().unwrap().is_empty());
    // The stored baseline still holds the previous value.
    assert_eq!(
        world.history.lock().unwrap()["GME"],
        rating(5.0, 6.0, 4.0)
    );
}
