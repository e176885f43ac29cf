//! Resolution of logical form fields to remote schema field names.
//!
//! The remote store's field schema is user-defined, so the names the store
//! happens to use rarely match the form's logical field names exactly. The
//! resolver maps an ordered list of known aliases for a logical field onto
//! the fetched schema in two phases:
//!
//! 1. exact match of each alias against the remote field names, in alias
//!    order;
//! 2. normalized substring containment (lowercase, non-alphanumerics
//!    stripped, containment tested in either direction) of each alias
//!    against every remote field name.
//!
//! The first match wins; there is no scoring or ranking beyond alias order.
//! A field that matches nothing resolves to [`Resolution::Unresolved`] and
//! the caller decides what to do with it. [`FieldResolver::closest_candidate`]
//! exists purely as a diagnostic aid for logging unresolved fields.

mod resolver;

pub use resolver::{FieldResolver, Resolution, normalize_name};
