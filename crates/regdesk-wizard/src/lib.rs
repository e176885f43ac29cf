//! Multi-step registration wizard.
//!
//! The wizard is a linear five-step state machine over the registration
//! record: team/leader details, then one step per player section, with
//! player 5 optional. Each forward transition runs a step-specific
//! validator; failures fill a per-field error map and block the transition.
//! The final step's successful validation triggers submission through the
//! [`SubmitRegistration`] collaborator instead of a transition.
//!
//! Validation never returns an error through the call stack. The error map
//! is keyed by the camelCase field names the form posts, so the presentation
//! layer can attach messages inline.

pub mod client;
pub mod step;
pub mod validate;
pub mod wizard;

pub use client::{ClientError, FormEndpointClient, SubmitOutcome, SubmitRegistration};
pub use step::WizardStep;
pub use validate::{ErrorMap, validate_player, validate_team};
pub use wizard::{Advance, Wizard};
