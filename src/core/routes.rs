// HTTP routes configuration

use crate::handlers::greeting::greeting_handler;
use axum::{routing::any, Router};

pub fn build_router() -> Router {
    Router::new()
        .route("/", any(greeting_handler))
        // Every other path is answered the same way
        .fallback(greeting_handler)
}
