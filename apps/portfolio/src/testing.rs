//! In-process stand-in for the portfolio backend, used by unit tests.
//!
//! Mirrors the backend's routes and payloads, counts hits per endpoint and
//! can hold a request open until the test releases it.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::{Notify, Semaphore};

use crate::api_client::{self, ApiClient};
use crate::config::Config;

pub const TOKEN: &str = "stub-token";
pub const USERNAME: &str = "admin";
pub const INITIAL_PASSWORD: &str = "correct-horse";
const SEEDED_TIMESTAMP: &str = "2025-03-01 14:30:00";

pub struct StoredCv {
    pub name: String,
    pub bytes: Vec<u8>,
    pub modified: String,
}

pub struct StubState {
    pub login_hits: AtomicUsize,
    pub verify_hits: AtomicUsize,
    pub cv_info_hits: AtomicUsize,
    pub upload_hits: AtomicUsize,
    pub delete_hits: AtomicUsize,
    pub password_hits: AtomicUsize,
    pub cv: Mutex<Option<StoredCv>>,
    pub password: Mutex<String>,
    /// Raw body for failed logins; `None` sends `{"error": "invalid credentials"}`.
    pub login_error_body: Mutex<Option<String>>,
    password_changed: AtomicBool,
    held: Mutex<HashSet<&'static str>>,
    arrived: Notify,
    gate: Semaphore,
}

impl StubState {
    fn new() -> Self {
        Self {
            login_hits: AtomicUsize::new(0),
            verify_hits: AtomicUsize::new(0),
            cv_info_hits: AtomicUsize::new(0),
            upload_hits: AtomicUsize::new(0),
            delete_hits: AtomicUsize::new(0),
            password_hits: AtomicUsize::new(0),
            cv: Mutex::new(None),
            password: Mutex::new(INITIAL_PASSWORD.to_string()),
            login_error_body: Mutex::new(None),
            password_changed: AtomicBool::new(false),
            held: Mutex::new(HashSet::new()),
            arrived: Notify::new(),
            gate: Semaphore::new(0),
        }
    }

    async fn pause_if_held(&self, endpoint: &str) {
        let held = self.held.lock().unwrap().contains(endpoint);
        if held {
            self.arrived.notify_one();
            let _permit = self.gate.acquire().await;
        }
    }
}

pub struct StubBackend {
    pub state: Arc<StubState>,
    addr: SocketAddr,
}

impl StubBackend {
    pub async fn start() -> Self {
        let state = Arc::new(StubState::new());
        let app = router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { state, addr }
    }

    pub fn config(&self) -> Config {
        Config::for_api_url(&format!("http://{}", self.addr))
    }

    pub fn api(&self) -> ApiClient {
        ApiClient::new(&self.config()).unwrap()
    }

    pub fn token(&self) -> &'static str {
        TOKEN
    }

    pub fn password(&self) -> String {
        self.state.password.lock().unwrap().clone()
    }

    pub fn seed_cv(&self, name: &str, bytes: &[u8]) {
        *self.state.cv.lock().unwrap() = Some(StoredCv {
            name: name.to_string(),
            bytes: bytes.to_vec(),
            modified: SEEDED_TIMESTAMP.to_string(),
        });
    }

    /// Requests to `endpoint` block until `release` is called.
    pub fn hold(&self, endpoint: &'static str) {
        self.state.held.lock().unwrap().insert(endpoint);
    }

    /// Resolves once a held request has arrived.
    pub async fn wait_for_held_request(&self) {
        self.state.arrived.notified().await;
    }

    pub fn release(&self) {
        self.state.gate.add_permits(1);
    }
}

/// Config for a port nothing listens on.
pub async fn unreachable_config() -> Config {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Config::for_api_url(&format!("http://{addr}"))
}

type Shared = State<Arc<StubState>>;

fn router(state: Arc<StubState>) -> Router {
    Router::new()
        .route(api_client::LOGIN, post(login))
        .route(api_client::VERIFY, get(verify))
        .route(api_client::CV_INFO, get(cv_info))
        .route(api_client::UPLOAD_CV, post(upload_cv))
        .route(api_client::DOWNLOAD_CV, get(download_cv))
        .route(api_client::DELETE_CV, delete(delete_cv))
        .route(api_client::CHANGE_PASSWORD, put(change_password))
        .route(api_client::CV_STATS, get(cv_stats))
        .with_state(state)
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(format!("Bearer {TOKEN}").as_str())
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn unauthorized() -> Response {
    error(StatusCode::UNAUTHORIZED, "Unauthorized")
}

async fn login(State(state): Shared, Json(body): Json<Value>) -> Response {
    state.login_hits.fetch_add(1, Ordering::SeqCst);
    state.pause_if_held(api_client::LOGIN).await;

    let password = state.password.lock().unwrap().clone();
    if body["username"] == USERNAME && body["password"] == password.as_str() {
        return Json(json!({
            "token": TOKEN,
            "message": "Login successful",
            "first_login": !state.password_changed.load(Ordering::SeqCst),
        }))
        .into_response();
    }

    let custom = state.login_error_body.lock().unwrap().clone();
    match custom {
        Some(raw) => (StatusCode::UNAUTHORIZED, raw).into_response(),
        None => error(StatusCode::UNAUTHORIZED, "invalid credentials"),
    }
}

async fn verify(State(state): Shared, headers: HeaderMap) -> Response {
    state.verify_hits.fetch_add(1, Ordering::SeqCst);
    state.pause_if_held(api_client::VERIFY).await;

    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "valid": true,
        "username": USERNAME,
        "message": "Token is valid",
        "first_login": !state.password_changed.load(Ordering::SeqCst),
    }))
    .into_response()
}

async fn cv_info(State(state): Shared, headers: HeaderMap) -> Response {
    state.cv_info_hits.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }
    let cv = state.cv.lock().unwrap();
    match cv.as_ref() {
        Some(cv) => Json(json!({
            "exists": true,
            "name": cv.name,
            "size": cv.bytes.len(),
            "lastModified": cv.modified,
            "uploadedAt": cv.modified,
        }))
        .into_response(),
        None => error(StatusCode::NOT_FOUND, "No CV found"),
    }
}

async fn upload_cv(State(state): Shared, headers: HeaderMap, mut multipart: Multipart) -> Response {
    state.upload_hits.fetch_add(1, Ordering::SeqCst);
    state.pause_if_held(api_client::UPLOAD_CV).await;

    if !authorized(&headers) {
        return unauthorized();
    }

    let mut upload = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("cv") {
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_string();
        match field.bytes().await {
            Ok(bytes) => upload = Some((name, bytes.to_vec())),
            Err(_) => return error(StatusCode::BAD_REQUEST, "No file uploaded"),
        }
    }

    let Some((name, bytes)) = upload else {
        return error(StatusCode::BAD_REQUEST, "No file uploaded");
    };
    if !name.to_lowercase().ends_with(".pdf") {
        return error(StatusCode::BAD_REQUEST, "Only PDF files are allowed");
    }

    let size = bytes.len();
    let modified = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    *state.cv.lock().unwrap() = Some(StoredCv {
        name: name.clone(),
        bytes,
        modified: modified.clone(),
    });

    Json(json!({
        "success": true,
        "message": "CV uploaded successfully",
        "filename": "current_cv.pdf",
        "originalName": name,
        "size": size,
        "uploadedAt": modified,
    }))
    .into_response()
}

async fn download_cv(State(state): Shared) -> Response {
    let cv = state.cv.lock().unwrap();
    match cv.as_ref() {
        Some(cv) => (
            [(header::CONTENT_TYPE, "application/pdf")],
            cv.bytes.clone(),
        )
            .into_response(),
        None => error(StatusCode::NOT_FOUND, "No CV found"),
    }
}

async fn delete_cv(State(state): Shared, headers: HeaderMap) -> Response {
    state.delete_hits.fetch_add(1, Ordering::SeqCst);
    state.pause_if_held(api_client::DELETE_CV).await;

    if !authorized(&headers) {
        return unauthorized();
    }
    let removed = state.cv.lock().unwrap().take();
    match removed {
        Some(_) => Json(json!({ "success": true, "message": "CV deleted successfully" }))
            .into_response(),
        None => error(StatusCode::INTERNAL_SERVER_ERROR, "no CV found to delete"),
    }
}

async fn change_password(
    State(state): Shared,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.password_hits.fetch_add(1, Ordering::SeqCst);
    state.pause_if_held(api_client::CHANGE_PASSWORD).await;

    if !authorized(&headers) {
        return unauthorized();
    }

    let current = body["current_password"].as_str().unwrap_or_default();
    let new = body["new_password"].as_str().unwrap_or_default();

    let mut password = state.password.lock().unwrap();
    if current != password.as_str() {
        return error(StatusCode::UNAUTHORIZED, "Current password is incorrect");
    }
    if new.chars().count() < 8 {
        return error(
            StatusCode::BAD_REQUEST,
            "New password must be at least 8 characters long",
        );
    }
    *password = new.to_string();
    state.password_changed.store(true, Ordering::SeqCst);

    Json(json!({ "success": true, "message": "Password changed successfully" })).into_response()
}

async fn cv_stats(State(state): Shared, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let cv = state.cv.lock().unwrap();
    let (count, size) = match cv.as_ref() {
        Some(cv) => (1, cv.bytes.len()),
        None => (0, 0),
    };
    Json(json!({
        "fileCount": count,
        "totalSize": size,
        "totalSizeMB": size as f64 / 1024.0 / 1024.0,
    }))
    .into_response()
}
