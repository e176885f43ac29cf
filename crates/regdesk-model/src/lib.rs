pub mod record;
pub mod schema;

pub use record::{PlayerFields, PlayerSlot, RegistrationRecord};
pub use schema::{FieldKind, RemoteField, RemoteSchema};
