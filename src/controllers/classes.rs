use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::error::ScheduleError;
use crate::models::class::parse_day;
use crate::models::Class;
use crate::services::ClassFilter;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/classes", get(list_classes))
        .route("/classes/{id}/register", post(register))
}

#[derive(Debug, Deserialize)]
pub struct ClassesQuery {
    pub day: Option<String>,
    pub instructor: Option<String>,
    pub open: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ClassResponse {
    #[serde(flatten)]
    pub class: Class,
    pub day_name: &'static str,
    pub spots_left: u32,
    pub is_full: bool,
}

impl From<&Class> for ClassResponse {
    fn from(class: &Class) -> Self {
        Self {
            class: class.clone(),
            day_name: class.day_name(),
            spots_left: class.spots_left(),
            is_full: class.is_full(),
        }
    }
}

// GET /api/classes
async fn list_classes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ClassesQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let day = match params.day.as_deref() {
        Some(raw) => Some(
            parse_day(raw).ok_or((StatusCode::BAD_REQUEST, format!("יום לא מוכר: {raw}")))?,
        ),
        None => None,
    };
    let filter = ClassFilter {
        day,
        instructor: params.instructor.filter(|s| !s.trim().is_empty()),
        open_only: params.open.unwrap_or(false),
    };

    let schedule = state.schedule.read().await;
    let classes: Vec<ClassResponse> = schedule.list(&filter).into_iter().map(Into::into).collect();

    Ok(Json(json!({
        "count": classes.len(),
        "classes": classes,
        "announcements": state.announcements,
    })))
}

// POST /api/classes/{id}/register
async fn register(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let mut schedule = state.schedule.write().await;
    match schedule.register(&id) {
        Ok(class) => Ok(Json(json!({
            "message": format!("נרשמת לשיעור {}", class.title),
            "class": ClassResponse::from(class),
        }))),
        Err(ScheduleError::NotFound(_)) => {
            Err((StatusCode::NOT_FOUND, "השיעור לא נמצא".to_string()))
        }
        Err(ScheduleError::Full(_)) => Err((StatusCode::CONFLICT, "השיעור מלא".to_string())),
    }
}
