use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::AppState;

pub struct CleanupService {
    state: Arc<AppState>,
}

impl CleanupService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Runs forever, evicting idle seating sessions every cleanup interval.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.state.config.sessions.cleanup_interval());
        loop {
            ticker.tick().await;
            self.run_cleanup().await;
        }
    }

    /// One pass over the session registry.
    pub async fn run_cleanup(&self) -> usize {
        let ttl = self.state.config.sessions.ttl();
        let evicted = self.state.sessions.evict_idle(ttl, Instant::now()).await;

        if evicted == 0 {
            info!("🧹 No idle seating sessions to cleanup");
        } else {
            info!(
                "🧹 Evicted {} idle seating sessions, {} still active",
                evicted,
                self.state.sessions.len().await
            );
        }
        evicted
    }
}
