//! Welcome endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// GET / — returns the configured welcome message.
#[tracing::instrument(skip(state))]
pub async fn welcome(State(state): State<Arc<AppState>>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: state.welcome_message().to_string(),
    })
}
