use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::models::{Event, EventType};
use crate::services::calendar::DEFAULT_UPCOMING_LIMIT;
use crate::services::EventFilter;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/upcoming", get(upcoming_events))
        .route("/events/month/{year}/{month}", get(month_events))
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpcomingQuery {
    pub today: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    #[serde(flatten)]
    pub event: Event,
    pub badge: &'static str,
    pub time_label: String,
}

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            event: event.clone(),
            badge: event.event_type.badge(),
            time_label: event.time_label(),
        }
    }
}

fn parse_date(name: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, (StatusCode, String)> {
    raw.map(|s| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            (StatusCode::BAD_REQUEST, format!("{name} חייב להיות בפורמט YYYY-MM-DD"))
        })
    })
    .transpose()
}

// GET /api/events
async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventsQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let event_type = match params.event_type.as_deref() {
        Some(raw) => Some(EventType::parse(raw).ok_or((
            StatusCode::BAD_REQUEST,
            "type חייב להיות holiday | special | regular".to_string(),
        ))?),
        None => None,
    };
    let filter = EventFilter {
        event_type,
        from: parse_date("from", params.from.as_deref())?,
        to: parse_date("to", params.to.as_deref())?,
    };

    let events: Vec<EventResponse> = state.calendar.list(&filter).into_iter().map(Into::into).collect();
    Ok(Json(json!({
        "count": events.len(),
        "events": events,
    })))
}

// GET /api/events/upcoming
async fn upcoming_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UpcomingQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let today = parse_date("today", params.today.as_deref())?
        .unwrap_or_else(|| Local::now().date_naive());
    let limit = params.limit.unwrap_or(DEFAULT_UPCOMING_LIMIT).clamp(1, 20);

    let events: Vec<EventResponse> = state
        .calendar
        .upcoming(today, limit)
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(json!({
        "today": today,
        "count": events.len(),
        "events": events,
    })))
}

// GET /api/events/month/{year}/{month}
async fn month_events(
    State(state): State<Arc<AppState>>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if !(1..=12).contains(&month) {
        return Err((StatusCode::BAD_REQUEST, "month חייב להיות בין 1 ל-12".to_string()));
    }

    let events: Vec<EventResponse> = state
        .calendar
        .in_month(year, month)
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(json!({
        "year": year,
        "month": month,
        "count": events.len(),
        "events": events,
    })))
}
