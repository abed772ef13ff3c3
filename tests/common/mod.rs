#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Form, Json, Router};
use serde_json::{Value, json};

use glowview::config::ClientConfig;

pub const NOTICE_COUNT: u64 = 5;

/// Fixture API served from a background runtime; dropping the guard stops it.
pub struct ServerGuard {
    pub base_url: String,
    state: Arc<Fixture>,
    _runtime: tokio::runtime::Runtime,
}

impl ServerGuard {
    pub fn config(&self, page_size: u32) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            page_size: std::num::NonZeroU32::new(page_size).unwrap(),
            ..ClientConfig::default()
        }
    }

    /// Form bodies received by `PUT /api/v2/users/{id}/profile`, in arrival order.
    pub fn saved_forms(&self) -> Vec<Vec<(String, String)>> {
        self.state.saved.lock().unwrap().clone()
    }

    /// Query strings received by `GET /api/v2/notices`.
    pub fn list_queries(&self) -> Vec<HashMap<String, String>> {
        self.state.list_queries.lock().unwrap().clone()
    }
}

struct Fixture {
    notices: Vec<Value>,
    profiles: Mutex<HashMap<String, Value>>,
    saved: Mutex<Vec<Vec<(String, String)>>>,
    list_queries: Mutex<Vec<HashMap<String, String>>>,
}

pub fn spawn_server() -> Result<ServerGuard> {
    let runtime = tokio::runtime::Runtime::new().context("build tokio runtime")?;
    let state = Arc::new(Fixture {
        notices: (1..=NOTICE_COUNT).map(notice).collect(),
        profiles: Mutex::new(profiles()),
        saved: Mutex::new(Vec::new()),
        list_queries: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/api/v2/notices", get(list_notices))
        .route("/api/v2/notices/:id", get(get_notice))
        .route(
            "/api/v2/users/:id/profile",
            get(get_profile).put(put_profile),
        )
        .with_state(state.clone());

    let listener = runtime
        .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
        .context("bind fixture listener")?;
    let addr = listener.local_addr().context("fixture local addr")?;
    runtime.spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(ServerGuard {
        base_url: format!("http://{}", addr),
        state,
        _runtime: runtime,
    })
}

fn notice(id: u64) -> Value {
    let (code, name) = if id % 2 == 0 {
        ("EVENT", "이벤트")
    } else {
        ("SERVICE", "서비스")
    };
    // Both offset spellings the backend emits.
    let created_at = if id % 2 == 0 {
        format!("2024-03-0{}T09:00:00+0900", id)
    } else {
        format!("2024-03-0{}T09:00:00+09:00", id)
    };
    json!({
        "notice_id": id,
        "board_type_code": "NOTICE",
        "board_category_code": code,
        "board_category_name": name,
        "subject": format!("notice {}", id),
        "content": format!("<p>body {}</p>", id),
        "created_at": created_at,
    })
}

fn profiles() -> HashMap<String, Value> {
    let mut profiles = HashMap::new();
    profiles.insert(
        "u1".to_string(),
        json!({
            "user_id": "u1",
            "name": "김철수",
            "contact": "010-1234-5678",
            "zip": "04524",
            "address": "서울 중구 세종대로 110",
            "address_more": "3층",
            "email": "u1@example.com",
        }),
    );
    profiles.insert(
        "u2".to_string(),
        json!({
            "user_id": "u2",
            "name": "이영희",
            "contact": "",
            "zip": "06236",
            "address": "서울 강남구 테헤란로 152",
            "address_more": "",
        }),
    );
    profiles
}

async fn list_notices(
    State(state): State<Arc<Fixture>>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.list_queries.lock().unwrap().push(query.clone());

    let limit: usize = query
        .get("limit")
        .and_then(|v| v.parse().ok())
        .unwrap_or(20);
    let offset: usize = query
        .get("cursor")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let matching: Vec<&Value> = state
        .notices
        .iter()
        .filter(|n| match query.get("board_category") {
            Some(code) => n["board_category_code"] == code.as_str(),
            None => true,
        })
        .collect();

    let end = (offset + limit).min(matching.len());
    let page: Vec<&Value> = matching[offset.min(end)..end].to_vec();
    let mut body = json!({ "notices": page, "paging": {} });
    if end < matching.len() {
        body["paging"]["next"] = json!(end);
    }
    if !query.contains_key("cursor") {
        body["total_count"] = json!(matching.len());
        body["categories"] = json!([
            { "category_code": "SERVICE", "category_name": "서비스" },
            { "category_code": "EVENT", "category_name": "이벤트" },
        ]);
    }
    Json(body)
}

async fn get_notice(
    State(state): State<Arc<Fixture>>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, StatusCode> {
    state
        .notices
        .iter()
        .find(|n| n["notice_id"] == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_profile(
    State(state): State<Arc<Fixture>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    state
        .profiles
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)
}

async fn put_profile(
    State(state): State<Arc<Fixture>>,
    Path(id): Path<String>,
    Form(fields): Form<Vec<(String, String)>>,
) -> StatusCode {
    let mut profiles = state.profiles.lock().unwrap();
    let Some(profile) = profiles.get_mut(&id) else {
        return StatusCode::NOT_FOUND;
    };
    for (key, value) in &fields {
        profile[key.as_str()] = json!(value);
    }
    state.saved.lock().unwrap().push(fields);
    StatusCode::NO_CONTENT
}
