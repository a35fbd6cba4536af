//! Askama templates for the web frontend.

use askama::Template;

use super::dto::FormView;

/// The single form page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: FormView,
}
