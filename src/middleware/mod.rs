use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::services::SharedSession;

pub const SESSION_HEADER: &str = "x-session-id";

/// The caller's seating session, resolved from the `x-session-id` header.
#[derive(Clone)]
pub struct SessionHandle {
    pub id: Uuid,
    pub session: SharedSession,
}

impl FromRequestParts<Arc<crate::AppState>> for SessionHandle {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or((StatusCode::BAD_REQUEST, "חסר מזהה הפעלה (x-session-id)".to_string()))?;

        let id = Uuid::parse_str(raw.trim())
            .map_err(|_| (StatusCode::BAD_REQUEST, "מזהה הפעלה לא תקין".to_string()))?;

        let session = state.sessions.touch(id).await.ok_or_else(|| {
            tracing::debug!(session_id = %id, "Unknown or expired seating session");
            (StatusCode::NOT_FOUND, "ההפעלה לא נמצאה או שפג תוקפה".to_string())
        })?;

        Ok(SessionHandle { id, session })
    }
}
