//! In-process stand-in for the Streamflix backend
//!
//! Serves every endpoint the console calls on a random local port and
//! records each request it receives.

use super::constants::*;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use streamflix_console::HttpBackend;
use tokio::net::TcpListener;

/// A request as seen by the fake backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string
    pub uri: String,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeState {
    fn record(&self, method: &Method, uri: &Uri, headers: &HeaderMap, body: Option<Value>) {
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            uri: uri.to_string(),
            content_type,
            body,
        });
    }
}

/// Fake backend bound to 127.0.0.1 on a random port
///
/// When dropped, the server shuts down.
pub struct FakeBackendServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,
    state: FakeState,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl FakeBackendServer {
    pub async fn spawn() -> Self {
        let state = FakeState::default();

        let app = Router::new()
            .route("/api/users/register", post(register))
            .route("/api/users/{id}", get(get_user))
            .route("/api/content", post(create_content).get(list_content))
            .route("/api/content/genre/{genre}", get(list_genre))
            .route("/api/content/{id}", get(get_content))
            .route("/api/videos/watch", post(echo))
            .route("/api/videos/rate", post(echo))
            .route("/api/videos/watch/user/{user_id}", get(watch_history))
            .route(
                "/api/videos/rate/content/{content_id}/average",
                get(average_rating),
            )
            .route("/api/recommendations/{user_id}", get(recommendations))
            .route("/api/demo/singleton-test", get(singleton_test))
            .route("/api/gateway/health", get(gateway_health))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Fake backend failed");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            state,
            _shutdown_tx: Some(shutdown_tx),
        }
    }

    /// An HTTP backend pointed at this server.
    pub fn backend(&self) -> Arc<HttpBackend> {
        Arc::new(HttpBackend::new(self.base_url.clone()).expect("Failed to build backend"))
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("Fake backend received no request")
    }
}

async fn register(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record(&method, &uri, &headers, Some(body.clone()));
    if body["username"] == TAKEN_USERNAME {
        return (
            StatusCode::CONFLICT,
            Json(json!({"error": "Username already exists"})),
        )
            .into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "id": KNOWN_USER_ID,
            "username": body["username"],
            "email": body["email"],
            "subscriptionTier": body["tier"]
        })),
    )
        .into_response()
}

async fn get_user(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    state.record(&method, &uri, &headers, None);
    if id == MISSING_USER_ID.to_string() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "User not found"})),
        )
            .into_response();
    }
    Json(json!({"id": id, "username": "alice"})).into_response()
}

async fn create_content(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record(&method, &uri, &headers, Some(body.clone()));
    let mut created = body;
    created["id"] = json!(100);
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn list_content(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<Value> {
    state.record(&method, &uri, &headers, None);
    Json(json!([{"id": 1, "title": "Inception"}, {"id": 2, "title": "The Crown"}]))
}

async fn list_genre(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(genre): Path<String>,
) -> Json<Value> {
    state.record(&method, &uri, &headers, None);
    Json(json!([{"id": 1, "genre": genre}]))
}

async fn get_content(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    state.record(&method, &uri, &headers, None);
    if id == GARBLED_CONTENT_ID.to_string() {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }
    if id == UNAVAILABLE_CONTENT_ID.to_string() {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    Json(json!({"id": id, "title": "Inception", "contentType": "MOVIE"})).into_response()
}

async fn echo(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    state.record(&method, &uri, &headers, Some(body.clone()));
    Json(json!({"status": "recorded", "received": body}))
}

async fn watch_history(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Json<Value> {
    state.record(&method, &uri, &headers, None);
    Json(json!([{"userId": user_id, "contentId": 1, "progress": 360}]))
}

async fn average_rating(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(content_id): Path<String>,
) -> Json<Value> {
    state.record(&method, &uri, &headers, None);
    Json(json!({"contentId": content_id, "averageRating": 4.5}))
}

async fn recommendations(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.record(&method, &uri, &headers, None);
    Json(json!({"userId": user_id, "limit": params.get("limit"), "items": []}))
}

async fn singleton_test(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<Value> {
    state.record(&method, &uri, &headers, None);
    Json(json!({"sameInstance": true}))
}

async fn gateway_health(
    State(state): State<FakeState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Json<Value> {
    state.record(&method, &uri, &headers, None);
    Json(json!({"status": "UP"}))
}
