use crate::calendar::CalendarYear;
use crate::errors::AppError;
use crate::models::{
    CalendarQuery, CheckboxRequest, ResetRequest, ThemeQuery, ThemeRequest, ThemeResponse,
    ToggleRequest, TrackerView,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tokio::task::block_in_place;

// Handlers that may write run the synchronous store inside `block_in_place`,
// still holding the tracker lock so each read-modify-write stays whole.

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut tracker = state.tracker.lock().await;
    let view = block_in_place(|| tracker.refresh());
    Html(render_index(&view))
}

pub async fn get_state(State(state): State<AppState>) -> Json<TrackerView> {
    let mut tracker = state.tracker.lock().await;
    Json(block_in_place(|| tracker.refresh()))
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Json<CalendarYear> {
    let tracker = state.tracker.lock().await;
    let year = query.year.unwrap_or_else(|| tracker.calendar_year());
    Json(tracker.calendar(year))
}

pub async fn checkbox(
    State(state): State<AppState>,
    Json(payload): Json<CheckboxRequest>,
) -> Result<Json<TrackerView>, AppError> {
    let id = payload.id.trim();
    if id.is_empty() {
        return Err(AppError::bad_request("id must not be empty"));
    }

    let mut tracker = state.tracker.lock().await;
    let view = block_in_place(|| tracker.apply_checkbox_change(id, payload.checked))?;
    Ok(Json(view))
}

pub async fn toggle_day(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<TrackerView>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let view = block_in_place(|| tracker.apply_calendar_toggle(payload.date.trim()))?;
    Ok(Json(view))
}

pub async fn reset(
    State(state): State<AppState>,
    Json(payload): Json<ResetRequest>,
) -> Result<Json<TrackerView>, AppError> {
    let mut tracker = state.tracker.lock().await;
    let view = block_in_place(|| tracker.apply_reset(payload.category.trim()))?;
    Ok(Json(view))
}

pub async fn get_theme(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> Json<ThemeResponse> {
    let tracker = state.tracker.lock().await;
    Json(ThemeResponse {
        theme: tracker.theme(query.prefers_dark),
        notices: Vec::new(),
    })
}

pub async fn set_theme(
    State(state): State<AppState>,
    Json(payload): Json<ThemeRequest>,
) -> Json<ThemeResponse> {
    let mut tracker = state.tracker.lock().await;
    Json(block_in_place(|| tracker.set_theme(payload.theme)))
}
