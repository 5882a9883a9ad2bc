#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use koto_console::api::ApiClient;
use koto_console::config::ApiConfig;
use serde_json::{json, Value};

/// In-process stand-in for the KOTO backend.
#[derive(Clone, Default)]
pub struct FakeBackend {
    /// Child folders keyed by parent id (`""` is the root), as `(id, name)`.
    pub folders: Arc<Mutex<HashMap<String, Vec<(String, String)>>>>,
    /// Parent ids whose listing answers with HTTP 500.
    pub failing: Arc<Mutex<Vec<String>>>,
    /// Parent ids whose listing answers with a body lacking `folders`.
    pub garbled: Arc<Mutex<Vec<String>>>,
    /// Body served by `GET /api/config`.
    pub config: Arc<Mutex<Value>>,
    /// Bodies received by `POST /api/config`, in order.
    pub saved: Arc<Mutex<Vec<Value>>>,
    /// Every request as `"METHOD /path?query"`.
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl FakeBackend {
    /// A drive with `Docs` (holding `Contracts`) and `Media` (empty) at the root.
    pub fn with_drive() -> Self {
        let backend = Self::default();
        backend.set_children("", &[("A", "Docs"), ("B", "Media")]);
        backend.set_children("A", &[("A1", "Contracts")]);
        backend.set_children("B", &[]);
        backend.set_children("A1", &[]);
        *backend.config.lock().unwrap() = json!({
            "user_name": "井崎さん",
            "personality": "元気な秘書",
            "master_prompt": "",
            "knowledge_sources": [],
            "reminders": [],
            "notion_databases": [],
        });
        backend
    }

    pub fn set_children(&self, parent: &str, children: &[(&str, &str)]) {
        self.folders.lock().unwrap().insert(
            parent.to_string(),
            children
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
        );
    }

    pub fn fail_listing(&self, parent: &str) {
        self.failing.lock().unwrap().push(parent.to_string());
    }

    pub fn garble_listing(&self, parent: &str) {
        self.garbled.lock().unwrap().push(parent.to_string());
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn saved(&self) -> Vec<Value> {
        self.saved.lock().unwrap().clone()
    }

    /// Number of listing requests for one parent id.
    pub fn listing_requests_for(&self, parent: &str) -> usize {
        let wanted = format!("GET /api/folders?parentId={parent}");
        self.requests().iter().filter(|r| **r == wanted).count()
    }
}

async fn list_folders(
    State(backend): State<FakeBackend>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    let parent = query.get("parentId").cloned().unwrap_or_default();
    backend
        .requests
        .lock()
        .unwrap()
        .push(format!("GET /api/folders?parentId={parent}"));

    if backend.failing.lock().unwrap().contains(&parent) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if backend.garbled.lock().unwrap().contains(&parent) {
        return Ok(Json(json!({ "items": [] })));
    }
    let children = backend
        .folders
        .lock()
        .unwrap()
        .get(&parent)
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    let folders: Vec<Value> = children
        .into_iter()
        .map(|(id, name)| json!({ "id": id, "name": name }))
        .collect();
    Ok(Json(json!({ "folders": folders })))
}

async fn get_config(State(backend): State<FakeBackend>) -> Json<Value> {
    backend.requests.lock().unwrap().push("GET /api/config".into());
    let body = backend.config.lock().unwrap().clone();
    Json(body)
}

async fn post_config(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> StatusCode {
    backend.requests.lock().unwrap().push("POST /api/config".into());
    backend.saved.lock().unwrap().push(body.clone());
    *backend.config.lock().unwrap() = body;
    StatusCode::OK
}

/// Serve `backend` on an ephemeral local port. Returns the base URL.
pub async fn spawn_backend(backend: FakeBackend) -> String {
    let router = Router::new()
        .route("/api/folders", get(list_folders))
        .route("/api/config", get(get_config).post(post_config))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// API client pointed at `base_url`.
pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: Some(5),
    })
    .unwrap()
}

/// Spin up a fake backend and return it with a client already pointed at it.
pub async fn backend_and_client(backend: FakeBackend) -> (FakeBackend, ApiClient) {
    let base = spawn_backend(backend.clone()).await;
    (backend, client_for(&base))
}
