use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SeatingConfig;
use crate::error::SeatingError;
use crate::seating::SeatingSession;

pub type SharedSession = Arc<Mutex<SeatingSession>>;

struct SessionSlot {
    session: SharedSession,
    last_seen: Instant,
}

/// Independent seating grids, one per visitor, keyed by session id.
///
/// Grids are never shared: each id owns its own [`SeatingSession`], and the
/// mutex around it only serializes requests of that one visitor.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    slots: Arc<RwLock<HashMap<Uuid, SessionSlot>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh grid from `seating` and registers it.
    pub async fn create(&self, seating: &SeatingConfig) -> Result<(Uuid, SharedSession), SeatingError> {
        let mut policy = seating.policy()?;
        let session = SeatingSession::generate(&seating.layout(), &mut *policy)?;
        Ok(self.insert(session).await)
    }

    pub async fn insert(&self, session: SeatingSession) -> (Uuid, SharedSession) {
        let id = Uuid::new_v4();
        let shared = Arc::new(Mutex::new(session));
        self.slots.write().await.insert(
            id,
            SessionSlot { session: shared.clone(), last_seen: Instant::now() },
        );
        info!(session_id = %id, "Seating session created");
        (id, shared)
    }

    /// Looks a session up and marks it as recently used.
    pub async fn touch(&self, id: Uuid) -> Option<SharedSession> {
        let mut slots = self.slots.write().await;
        let slot = slots.get_mut(&id)?;
        slot.last_seen = Instant::now();
        Some(slot.session.clone())
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let removed = self.slots.write().await.remove(&id).is_some();
        if removed {
            info!(session_id = %id, "Seating session closed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.slots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.slots.read().await.is_empty()
    }

    /// Drops sessions idle for longer than `ttl` as of `now`. Returns the
    /// number removed.
    pub async fn evict_idle(&self, ttl: Duration, now: Instant) -> usize {
        let mut slots = self.slots.write().await;
        let before = slots.len();
        slots.retain(|id, slot| {
            let keep = now.saturating_duration_since(slot.last_seen) <= ttl;
            if !keep {
                debug!(session_id = %id, "Evicting idle seating session");
            }
            keep
        });
        before - slots.len()
    }
}
