//! HTTP surface for tournament registrations.
//!
//! One stateless endpoint, `POST /api/submit`, takes the wizard's record
//! and hands it to the schema-reconciling submitter; `GET /health` answers
//! liveness probes. Store credentials come from the environment and may be
//! absent, in which case submissions answer with a configuration error.

pub mod app;
pub mod error;
pub mod logging;
pub mod state;

pub use app::{SubmitResponse, build_router};
pub use error::ApiError;
pub use state::AppState;
