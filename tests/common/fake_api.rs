//! In-process fake of the backend under test.
//!
//! It implements the three endpoints of the HTTP contract with an in-memory
//! collection, behind a permissive CORS layer, so the checker can be
//! exercised without a real deployment.
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

#[derive(Clone, Default)]
struct AppState {
    records: Arc<Mutex<Vec<Value>>>,
}

#[derive(Deserialize)]
struct CreateStatusCheck {
    client_name: String,
}

async fn api_root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

async fn wrong_greeting() -> Json<Value> {
    Json(json!({ "message": "Goodbye" }))
}

async fn create_status(State(state): State<AppState>, Json(request): Json<CreateStatusCheck>) -> Json<Value> {
    let record = json!({
        "id": Uuid::new_v4().to_string(),
        "client_name": request.client_name,
        "timestamp": Utc::now().to_rfc3339(),
    });

    state.records.lock().expect("the record store should not be poisoned").push(record.clone());

    Json(record)
}

async fn list_status(State(state): State<AppState>) -> Json<Value> {
    let records = state.records.lock().expect("the record store should not be poisoned").clone();

    Json(Value::Array(records))
}

fn cors() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .route("/api/", get(api_root))
        .route("/api/status", post(create_status).get(list_status))
        .layer(cors())
        .with_state(AppState::default())
}

/// Same contract, but the root greeting is wrong. Used to verify that a
/// failing root check does not cascade into the other checks.
#[must_use]
pub fn routes_with_wrong_greeting() -> Router {
    Router::new()
        .route("/api/", get(wrong_greeting))
        .route("/api/status", post(create_status).get(list_status))
        .layer(cors())
        .with_state(AppState::default())
}

/// Starts the healthy fake backend on an ephemeral port.
pub async fn start() -> SocketAddr {
    serve(routes()).await
}

/// Binds the given router to an ephemeral port and serves it in the
/// background for the rest of the test.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("it should bind to an ephemeral port");

    let addr = listener.local_addr().expect("it should expose the bound address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("the fake backend should keep serving");
    });

    addr
}

/// An address where nothing is listening, to exercise transport failures.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("it should bind to an ephemeral port");

    let addr = listener.local_addr().expect("it should expose the bound address");

    drop(listener);

    addr
}
