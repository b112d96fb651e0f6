//! Static greeting endpoints.

use crate::state::AppState;
use axum::{
    response::IntoResponse,
    routing::{get, post},
    Router,
};

/// Registers the greeting routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(hello))
        .route("/some2", post(welcome))
}

/// Root greeting. Stateless, cannot fail.
async fn hello() -> impl IntoResponse {
    "Hello World"
}

/// Acknowledgement for the secondary route.
async fn welcome() -> impl IntoResponse {
    "Welcome!"
}
