//! Incremental form validation.
//!
//! Couples the three dependent input fields (route → direction → stop) to
//! cascading reference-data lookups, tracking per-field validity and the
//! exact user-facing messages.

mod controller;
mod field;

pub use controller::FormController;
pub use field::{Field, FieldState, FieldStatus, FormState};
