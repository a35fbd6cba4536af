//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::CachedTransit;
use crate::form::FormController;
use crate::nextrip::NexTripClient;

/// The controller type the server runs against.
pub type Controller = FormController<CachedTransit<NexTripClient>>;

/// Shared application state.
///
/// The single form controller lives behind a mutex: edits and the find
/// round-trip serialize, which is also what keeps a superseded refresh
/// from mutating state after a newer edit started.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<Mutex<Controller>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(controller: Controller) -> Self {
        Self {
            controller: Arc::new(Mutex::new(controller)),
        }
    }
}
