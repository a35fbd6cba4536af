//! Field and form state.

use crate::domain::{DirectionCode, RouteCode, StopCode};
use crate::messages;

/// The three input fields, in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Route,
    Direction,
    Stop,
}

/// Validation status of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// No input; nothing to report.
    Empty,
    /// Input present but it did not resolve to a code.
    Invalid,
    /// Input resolved to exactly one code.
    Valid,
}

/// State of one input field.
///
/// Invariant: `code` is `Some` only when `raw` is non-empty and resolved
/// to exactly one reference entry (the resolver enforces this).
#[derive(Debug, Clone)]
pub struct FieldState<C> {
    /// The user's text, verbatim.
    pub raw: String,
    /// The resolved code, if any.
    pub code: Option<C>,
    /// Current help or error text for the field's message region.
    pub message: &'static str,
    /// Whether `message` is an error (drives the invalid visual marker).
    pub is_error: bool,
}

impl<C> FieldState<C> {
    fn new(help: &'static str) -> Self {
        Self {
            raw: String::new(),
            code: None,
            message: help,
            is_error: false,
        }
    }

    /// Current validation status.
    pub fn status(&self) -> FieldStatus {
        if self.raw.is_empty() {
            FieldStatus::Empty
        } else if self.code.is_some() {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }
}

/// Aggregate state of the three fields.
#[derive(Debug, Clone)]
pub struct FormState {
    pub route: FieldState<RouteCode>,
    pub direction: FieldState<DirectionCode>,
    pub stop: FieldState<StopCode>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            route: FieldState::new(messages::ROUTE_HELP),
            direction: FieldState::new(messages::DIRECTION_HELP),
            stop: FieldState::new(messages::STOP_HELP),
        }
    }
}

impl FormState {
    /// Whether the form may be submitted: all three fields resolved.
    pub fn submittable(&self) -> bool {
        self.route.code.is_some() && self.direction.code.is_some() && self.stop.code.is_some()
    }
}
