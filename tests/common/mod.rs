#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    routing::get,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use vk_links::Config;

/// One request received by the fake VK API.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: String,
    pub params: HashMap<String, String>,
    pub authorization: Option<String>,
}

#[derive(Clone)]
struct FakeState {
    replies: Arc<HashMap<String, (StatusCode, Value)>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

/// Local stand-in for `https://api.vk.com/method`.
pub struct FakeVk {
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl FakeVk {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|call| call.method).collect()
    }

    pub fn config(&self, token: &str) -> Config {
        let mut config = Config::with_token(token);
        config.api_base_url = self.base_url.clone();
        config
    }
}

/// Builder collecting canned replies per VK method.
#[derive(Default)]
pub struct FakeVkBuilder {
    replies: HashMap<String, (StatusCode, Value)>,
}

impl FakeVkBuilder {
    pub fn reply(mut self, method: &str, body: Value) -> Self {
        self.replies
            .insert(method.to_string(), (StatusCode::OK, body));
        self
    }

    pub fn reply_status(mut self, method: &str, status: StatusCode, body: Value) -> Self {
        self.replies.insert(method.to_string(), (status, body));
        self
    }

    pub async fn start(self) -> FakeVk {
        let state = FakeState {
            replies: Arc::new(self.replies),
            calls: Arc::new(Mutex::new(Vec::new())),
        };
        let calls = state.calls.clone();

        let app = Router::new()
            .route("/method/{method}", get(handle))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeVk {
            base_url: format!("http://{addr}/method"),
            calls,
        }
    }
}

pub fn fake_vk() -> FakeVkBuilder {
    FakeVkBuilder::default()
}

async fn handle(
    State(state): State<FakeState>,
    Path(method): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    state.calls.lock().unwrap().push(RecordedCall {
        method: method.clone(),
        params,
        authorization,
    });

    match state.replies.get(&method) {
        Some((status, body)) => (*status, Json(body.clone())),
        None => (
            StatusCode::OK,
            Json(json!({
                "error": { "error_code": 3, "error_msg": "Unknown method passed" }
            })),
        ),
    }
}

pub fn not_banned() -> Value {
    json!({ "response": { "status": "not_banned", "link": "https://example.com" } })
}

pub fn short_link(short_url: &str) -> Value {
    json!({
        "response": {
            "short_url": short_url,
            "url": "https://example.com",
            "key": "abc",
            "access_key": "0123456789abcdef"
        }
    })
}

pub fn stats(views: &[u64]) -> Value {
    let records: Vec<Value> = views
        .iter()
        .map(|views| json!({ "timestamp": 0, "views": views }))
        .collect();
    json!({ "response": { "key": "abc", "stats": records } })
}
