use axum::{
  extract::DefaultBodyLimit,
  routing::{get, post},
  Router,
};
use tower_http::cors::CorsLayer;

use crate::{
  handlers::{health_handler, send_email_handler},
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/send-email", post(send_email_handler))
    .route("/health", get(health_handler))
    // Uploads are buffered whole in memory with no size cap.
    .layer(DefaultBodyLimit::disable())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
