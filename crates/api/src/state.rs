//! Shared, read-only application state.

use std::time::{Duration, Instant};

/// State handed to every handler behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    started_at: Instant,
    welcome_message: String,
}

impl AppState {
    /// Captures the process start time now.
    pub fn new(welcome_message: impl Into<String>) -> Self {
        Self::started_at(Instant::now(), welcome_message)
    }

    /// Builds state with an explicit start instant.
    pub fn started_at(started_at: Instant, welcome_message: impl Into<String>) -> Self {
        Self {
            started_at,
            welcome_message: welcome_message.into(),
        }
    }

    pub fn welcome_message(&self) -> &str {
        &self.welcome_message
    }

    /// Time elapsed since start, measured on the monotonic clock.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
