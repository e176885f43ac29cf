//! Schema-reconciling submission pipeline.
//!
//! Turns a validated [`regdesk_model::RegistrationRecord`] into one record
//! in a remote hosted collection whose field names and kinds are not known
//! ahead of time:
//!
//! 1. fetch the collection's current schema ([`client`]),
//! 2. resolve each planned form field to a remote field name
//!    ([`plan`] and `regdesk_map`),
//! 3. encode each value according to the remote field's declared kind
//!    ([`encode`]),
//! 4. create the record and report which fields were dropped
//!    ([`submitter`]).
//!
//! Fields that cannot be placed are dropped, never a reason to fail the
//! submission.

pub mod client;
pub mod config;
pub mod encode;
pub mod error;
pub mod plan;
pub mod submitter;

pub use client::{HostedStoreClient, SchemaStore};
pub use config::StoreConfig;
pub use error::{Result, SubmitError};
pub use submitter::{SubmissionReceipt, Submitter};
