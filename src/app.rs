use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/calendar/toggle", post(handlers::toggle_day))
        .route("/api/checkbox", post(handlers::checkbox))
        .route("/api/reset", post(handlers::reset))
        .route("/api/theme", get(handlers::get_theme).post(handlers::set_theme))
        .with_state(state)
}
