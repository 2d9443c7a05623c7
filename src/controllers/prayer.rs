use axum::{extract::Query, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::services::prayer::prayer_times;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/prayer-times", get(get_prayer_times))
}

#[derive(Debug, Deserialize)]
pub struct PrayerQuery {
    pub date: Option<String>,
}

// GET /api/prayer-times
async fn get_prayer_times(
    Query(params): Query<PrayerQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let date = match params.date.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| (StatusCode::BAD_REQUEST, "date חייב להיות בפורמט YYYY-MM-DD".to_string()))?,
        None => Local::now().date_naive(),
    };

    Ok(Json(json!({
        "date": date,
        "times": prayer_times(date),
    })))
}
