// API State Management

use std::sync::Arc;
use std::time::Instant;

use crate::api::config::ApiConfig;

/// Shared application state
///
/// The reporter holds no mutable state: certificate data is read fresh from
/// the filesystem on every request.
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Uptime in whole seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
