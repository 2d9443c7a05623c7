use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::SeatingError;
use crate::middleware::SessionHandle;
use crate::models::{Seat, SeatCounts, SeatState};
use crate::seating::SeatFilter;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seating/sessions", post(create_session))
        .route("/seating/sessions", delete(close_session))
        .route("/seating/seats", get(list_seats))
        .route("/seating/seats/{seat_id}", get(get_seat))
        .route("/seating/stats", get(get_stats))
        .route("/seating/sections", get(get_sections))
        .route("/seating/select", patch(select_seat))
        .route("/seating/select", delete(cancel_selection))
        .route("/seating/reserve", post(confirm_reservation))
        .route("/seating/release", patch(release_seat))
        .route("/seating/release-all", post(release_all_reservations))
        .route("/seating/reset", post(reset_all))
}

/* ---------- helpers ---------- */

fn seating_error(err: SeatingError) -> (StatusCode, String) {
    match err {
        SeatingError::NotFound(id) => (StatusCode::NOT_FOUND, format!("המקום {id} לא נמצא")),
        SeatingError::InvalidConfiguration(msg) => {
            tracing::error!("seating configuration rejected: {}", msg);
            (StatusCode::INTERNAL_SERVER_ERROR, "לא ניתן ליצור את מפת המקומות".to_string())
        }
    }
}

/* ---------- SESSIONS ---------- */

#[derive(Debug, Serialize)]
struct CreateSessionResponse {
    session_id: Uuid,
    sections: Vec<String>,
    counts: SeatCounts,
}

// POST /api/seating/sessions
async fn create_session(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let (session_id, session) = state
        .sessions
        .create(&state.config.seating)
        .await
        .map_err(seating_error)?;

    let session = session.lock().await;
    let sections = session.section_summaries().into_iter().map(|s| s.section).collect();
    let counts = session.aggregate_counts();

    Ok((StatusCode::CREATED, Json(CreateSessionResponse { session_id, sections, counts })))
}

// DELETE /api/seating/sessions
async fn close_session(
    State(state): State<Arc<AppState>>,
    handle: SessionHandle,
) -> StatusCode {
    state.sessions.remove(handle.id).await;
    StatusCode::NO_CONTENT
}

/* ---------- SEATS ---------- */

#[derive(Debug, Deserialize)]
struct SeatsQuery {
    section: Option<String>,
    state: Option<String>, // free, occupied, reserved
    row: Option<u32>,
}

#[derive(Debug, Serialize)]
struct SeatView {
    #[serde(flatten)]
    seat: Seat,
    state: SeatState,
    label: String,
    selected: bool,
}

impl SeatView {
    fn new(seat: &Seat, selected: Option<&str>) -> Self {
        Self {
            seat: seat.clone(),
            state: seat.state(),
            label: seat.label(),
            selected: selected == Some(seat.id.as_str()),
        }
    }
}

// GET /api/seating/seats
async fn list_seats(
    handle: SessionHandle,
    Query(params): Query<SeatsQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let state = match params.state.as_deref() {
        Some(raw) => Some(SeatState::parse(raw).ok_or((
            StatusCode::BAD_REQUEST,
            "state חייב להיות free | occupied | reserved".to_string(),
        ))?),
        None => None,
    };
    if params.row == Some(0) {
        return Err((StatusCode::BAD_REQUEST, "row חייב להיות גדול מ-0".to_string()));
    }

    let filter = SeatFilter { section: params.section, state, row: params.row };
    let session = handle.session.lock().await;
    let seats: Vec<SeatView> = session
        .list_seats(&filter)
        .into_iter()
        .map(|seat| SeatView::new(seat, session.selected()))
        .collect();

    Ok(Json(json!({
        "count": seats.len(),
        "selected": session.selected(),
        "seats": seats,
    })))
}

// GET /api/seating/seats/{seat_id}
async fn get_seat(
    handle: SessionHandle,
    Path(seat_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let session = handle.session.lock().await;
    let seat = session.get_seat(&seat_id).map_err(seating_error)?;
    Ok(Json(SeatView::new(seat, session.selected())))
}

// GET /api/seating/stats
async fn get_stats(handle: SessionHandle) -> impl IntoResponse {
    let session = handle.session.lock().await;
    let counts = session.aggregate_counts();
    Json(json!({
        "counts": counts,
        "taken": counts.taken(),
        "selected": session.selected(),
    }))
}

// GET /api/seating/sections
async fn get_sections(handle: SessionHandle) -> impl IntoResponse {
    let session = handle.session.lock().await;
    Json(json!({
        "sections": session.section_summaries(),
        "total": session.aggregate_counts(),
    }))
}

/* ---------- RESERVATIONS ---------- */

#[derive(Debug, Deserialize)]
struct SeatRequest {
    seat_id: String,
}

// PATCH /api/seating/select
async fn select_seat(
    handle: SessionHandle,
    Json(req): Json<SeatRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut session = handle.session.lock().await;
    let accepted = session.get_seat(&req.seat_id).map_err(seating_error)?.is_selectable();
    let selected = session.select_seat(&req.seat_id).map_err(seating_error)?;

    Ok(Json(json!({
        "accepted": accepted,
        "selected": selected,
    })))
}

// DELETE /api/seating/select
async fn cancel_selection(handle: SessionHandle) -> impl IntoResponse {
    let cancelled = handle.session.lock().await.cancel_selection();
    Json(json!({ "cancelled": cancelled }))
}

#[derive(Debug, Default, Deserialize, Validate)]
struct ReserveRequest {
    #[validate(length(min = 1, max = 64))]
    holder_name: Option<String>,
}

// POST /api/seating/reserve
async fn confirm_reservation(
    State(state): State<Arc<AppState>>,
    handle: SessionHandle,
    body: Option<Json<ReserveRequest>>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    // A bare POST reserves under the default holder.
    let req = body.map(|Json(req)| req).unwrap_or_default();
    req.validate()
        .map_err(|_| (StatusCode::BAD_REQUEST, "שם המזמין חייב להכיל 1-64 תווים".to_string()))?;

    let holder = match req.holder_name.as_deref().map(str::trim) {
        Some("") => {
            return Err((StatusCode::BAD_REQUEST, "שם המזמין לא יכול להיות ריק".to_string()));
        }
        Some(name) => name.to_string(),
        None => state.config.seating.default_holder.clone(),
    };

    let mut session = handle.session.lock().await;
    let reserved = session.confirm_reservation(&holder);
    if reserved.is_none() {
        tracing::debug!(session_id = %handle.id, "Reservation requested with no seat selected");
    }

    Ok(Json(json!({
        "reserved": reserved,
        "counts": session.aggregate_counts(),
    })))
}

// PATCH /api/seating/release
async fn release_seat(
    handle: SessionHandle,
    Json(req): Json<SeatRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut session = handle.session.lock().await;
    let seat = session.release_seat(&req.seat_id).map_err(seating_error)?;
    Ok(Json(json!({
        "seat": seat,
        "counts": session.aggregate_counts(),
    })))
}

// POST /api/seating/release-all
async fn release_all_reservations(handle: SessionHandle) -> impl IntoResponse {
    let mut session = handle.session.lock().await;
    let cleared = session.release_all_reservations();
    tracing::info!(session_id = %handle.id, cleared, "Released all reservations");
    Json(json!({
        "cleared": cleared,
        "counts": session.aggregate_counts(),
    }))
}

// POST /api/seating/reset
async fn reset_all(handle: SessionHandle) -> impl IntoResponse {
    let mut session = handle.session.lock().await;
    let seats_reset = session.reset_all();
    tracing::warn!(session_id = %handle.id, seats_reset, "Seat grid reset");
    Json(json!({
        "seats_reset": seats_reset,
        "counts": session.aggregate_counts(),
    }))
}
