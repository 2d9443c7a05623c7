pub mod classes;
pub mod events;
pub mod prayer;
pub mod seating;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::FeatureFlags;
use crate::AppState;

pub fn routes(features: &FeatureFlags) -> Router<Arc<AppState>> {
    let mut router = Router::new()
        .merge(seating::routes())
        .merge(prayer::routes());
    if features.enable_classes {
        router = router.merge(classes::routes());
    }
    if features.enable_events {
        router = router.merge(events::routes());
    }
    router
}

/// Full application router, ready to serve.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Beit Knesset Portal API v0.1" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", routes(&state.config.features))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
