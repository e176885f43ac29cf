//! Shared application state.

use std::sync::Arc;

use regdesk_submit::{SchemaStore, Submitter};

/// State handed to every request handler.
///
/// The submitter is optional: the server starts without store credentials
/// so that health checks work, and submissions answer with a configuration
/// error until the environment is fixed.
#[derive(Clone)]
pub struct AppState {
    submitter: Option<Submitter<Arc<dyn SchemaStore>>>,
}

impl AppState {
    pub fn new(store: Arc<dyn SchemaStore>) -> Self {
        Self {
            submitter: Some(Submitter::new(store)),
        }
    }

    #[must_use]
    pub fn unconfigured() -> Self {
        Self { submitter: None }
    }

    pub fn submitter(&self) -> Option<&Submitter<Arc<dyn SchemaStore>>> {
        self.submitter.as_ref()
    }
}
