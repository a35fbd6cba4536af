//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::form::{FieldState, FieldStatus};
use crate::messages;

use super::state::Controller;

/// A form submission: the three field values plus the requested action.
#[derive(Debug, Deserialize)]
pub struct FormSubmission {
    pub route: Option<String>,
    pub direction: Option<String>,
    pub stop: Option<String>,
    /// "check" re-validates; "find" also looks up the next departure.
    pub action: Option<String>,
}

/// One field as rendered: value, message, and validity flags.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub value: String,
    pub message: String,
    pub is_error: bool,
    pub is_valid: bool,
}

impl FieldView {
    fn from_state<C>(state: &FieldState<C>) -> Self {
        Self {
            value: state.raw.clone(),
            message: state.message.to_string(),
            is_error: state.is_error,
            is_valid: state.status() == FieldStatus::Valid,
        }
    }
}

/// The whole form as rendered, also returned as JSON to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub route: FieldView,
    pub direction: FieldView,
    pub stop: FieldView,

    /// Message region next to the find button.
    pub find_message: String,

    /// Primary result line ("{N} minutes", or a service message).
    pub output_main: Option<String>,

    /// Descriptive sentence naming direction, route, and stop.
    pub output_detail: Option<String>,

    /// All route names, for display below the form.
    pub routes: Vec<String>,

    /// Stop names for the active route and direction.
    pub stops: Vec<String>,

    /// Shown in place of the stop list until route and direction resolve.
    pub stops_placeholder: Option<String>,

    /// Whether the find button is enabled.
    pub can_find: bool,

    /// One-shot failure banner.
    pub banner: Option<String>,
}

impl FormView {
    /// Snapshot the controller for rendering.
    pub fn from_controller(controller: &Controller, banner: Option<String>) -> Self {
        let form = &controller.form;
        let upstream_valid = form.route.code.is_some() && form.direction.code.is_some();

        Self {
            route: FieldView::from_state(&form.route),
            direction: FieldView::from_state(&form.direction),
            stop: FieldView::from_state(&form.stop),
            find_message: controller.find_message.to_string(),
            output_main: controller.result.as_ref().map(|r| r.primary.clone()),
            output_detail: controller.result.as_ref().and_then(|r| r.detail.clone()),
            routes: controller
                .routes()
                .iter()
                .map(|r| r.display.clone())
                .collect(),
            stops: controller
                .stops()
                .iter()
                .map(|s| s.display.clone())
                .collect(),
            stops_placeholder: if upstream_valid {
                None
            } else {
                Some(messages::STOPS_PLACEHOLDER.to_string())
            },
            can_find: form.submittable(),
            banner,
        }
    }
}

/// Error payload for non-HTML clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
