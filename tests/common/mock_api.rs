//! In-process mock of the catalog API for loader tests.

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One record served by the mock.
#[derive(Debug, Clone)]
pub struct MockEntry {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
}

impl MockEntry {
    pub fn new(id: u32, name: &str, types: &[&str]) -> Self {
        Self {
            id,
            name: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Default)]
pub struct MockState {
    pub entries: Vec<MockEntry>,
    /// Keys (name or id) answered with 500.
    pub failing: Mutex<HashSet<String>>,
    /// Delay before every detail response.
    pub detail_delay: Mutex<Duration>,
    pub detail_hits: AtomicUsize,
    pub list_hits: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

pub struct MockApi {
    pub addr: SocketAddr,
    pub state: Arc<MockState>,
    task: JoinHandle<()>,
}

#[derive(Debug, Deserialize)]
struct ListParams {
    limit: Option<usize>,
    offset: Option<usize>,
}

impl MockApi {
    pub async fn start(entries: Vec<MockEntry>) -> Self {
        let state = Arc::new(MockState {
            entries,
            ..MockState::default()
        });
        let app = Router::new()
            .route("/api/v2/pokemon", get(list_handler))
            .route("/api/v2/pokemon/{key}", get(detail_handler))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock api");
        let addr = listener.local_addr().expect("mock api addr");
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state, task }
    }

    /// Serve the first `count` entries of a generated roster.
    pub async fn with_generated(count: u32) -> Self {
        Self::start(generated_entries(count)).await
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api/v2", self.addr)
    }

    pub fn fail_on(&self, key: &str) {
        self.state.failing.lock().insert(key.to_string());
    }

    pub fn set_detail_delay(&self, delay: Duration) {
        *self.state.detail_delay.lock() = delay;
    }

    pub fn detail_hits(&self) -> usize {
        self.state.detail_hits.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub fn generated_entries(count: u32) -> Vec<MockEntry> {
    const CYCLE: [&[&str]; 4] = [&["grass", "poison"], &["fire"], &["fire", "flying"], &["water"]];
    (1..=count)
        .map(|id| MockEntry::new(id, &format!("mon-{id:03}"), CYCLE[(id as usize - 1) % 4]))
        .collect()
}

async fn list_handler(
    State(state): State<Arc<MockState>>,
    Query(params): Query<ListParams>,
) -> Json<serde_json::Value> {
    state.list_hits.fetch_add(1, Ordering::SeqCst);
    let limit = params.limit.unwrap_or(20);
    let offset = params.offset.unwrap_or(0);
    let results: Vec<_> = state
        .entries
        .iter()
        .skip(offset)
        .take(limit)
        .map(|e| {
            json!({
                "name": e.name,
                "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", e.id),
            })
        })
        .collect();
    Json(json!({
        "count": state.entries.len(),
        "next": null,
        "previous": null,
        "results": results,
    }))
}

async fn detail_handler(
    State(state): State<Arc<MockState>>,
    Path(key): Path<String>,
) -> Response {
    state.detail_hits.fetch_add(1, Ordering::SeqCst);
    let now = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.max_in_flight.fetch_max(now, Ordering::SeqCst);

    let delay = *state.detail_delay.lock();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let response = detail_response(&state, &key);
    state.in_flight.fetch_sub(1, Ordering::SeqCst);
    response
}

fn detail_response(state: &MockState, key: &str) -> Response {
    if state.failing.lock().contains(key) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    let entry = state
        .entries
        .iter()
        .find(|e| e.name == key || e.id.to_string() == key);
    let Some(entry) = entry else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };
    let types: Vec<_> = entry
        .types
        .iter()
        .enumerate()
        .map(|(idx, t)| json!({"slot": idx + 1, "type": {"name": t, "url": "t"}}))
        .collect();
    Json(json!({
        "id": entry.id,
        "name": entry.name,
        "height": 10 + entry.id,
        "weight": 100 + entry.id,
        "types": types,
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp", "url": "s"}},
            {"base_stat": 49, "effort": 1, "stat": {"name": "attack", "url": "s"}}
        ],
        "abilities": [
            {"ability": {"name": "overgrow", "url": "a"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": "a"}, "is_hidden": true, "slot": 3}
        ],
        "sprites": {
            "front_default": format!("https://img/{}.png", entry.id),
            "other": {"official-artwork": {"front_default": null}}
        }
    }))
    .into_response()
}
