//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use chrono::Local;
use tower_http::services::ServeDir;

use crate::form::Field;
use crate::messages;
use crate::nextrip::NexTripError;

use super::dto::{ErrorResponse, FormSubmission, FormView};
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page).post(update_form))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if the request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// The form page, rendered from the current controller state.
async fn index_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let mut controller = state.controller.lock().await;

    // The failure banner is one-shot, like the alert it replaces.
    let banner = controller.last_failure.take().map(str::to_string);
    let form = FormView::from_controller(&controller, banner);

    let html = IndexTemplate { form }
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

    Ok(Html(html).into_response())
}

/// Apply field edits and, on `action=find`, look up the next departure.
///
/// HTML clients are redirected back to the form page; API clients get
/// the resulting form view as JSON.
async fn update_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(submission): Form<FormSubmission>,
) -> Result<Response, AppError> {
    let find = match submission.action.as_deref() {
        Some("find") => true,
        Some("check") | None => false,
        Some(other) => {
            return Err(AppError::BadRequest {
                message: format!("Unknown action: {}", other),
            });
        }
    };

    let mut controller = state.controller.lock().await;
    let mut failure: Option<NexTripError> = None;

    // Apply edits in dependency order, only for fields that changed;
    // unchanged fields are revalidated by the cascade as needed.
    let edits = [
        (Field::Route, submission.route.as_deref()),
        (Field::Direction, submission.direction.as_deref()),
        (Field::Stop, submission.stop.as_deref()),
    ];
    for (field, value) in edits {
        let Some(value) = value else { continue };
        if value == current_raw(&controller, field) {
            continue;
        }
        if let Err(e) = controller.edit_field(field, value).await {
            failure.get_or_insert(e);
        }
    }

    if find && failure.is_none() {
        let now = Local::now().naive_local();
        if let Err(e) = controller.find_next_bus(now).await {
            failure.get_or_insert(e);
        }
    }

    if let Some(e) = failure {
        tracing::warn!(error = %e, "NexTrip request failed");
        controller.last_failure = Some(messages::REQUEST_FAILED);
    }

    if accepts_html(&headers) {
        Ok(Redirect::to("/").into_response())
    } else {
        let banner = controller.last_failure.take().map(str::to_string);
        Ok(Json(FormView::from_controller(&controller, banner)).into_response())
    }
}

fn current_raw<'a>(controller: &'a super::state::Controller, field: Field) -> &'a str {
    match field {
        Field::Route => &controller.form.route.raw,
        Field::Direction => &controller.form.direction.raw,
        Field::Stop => &controller.form.stop.raw,
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
