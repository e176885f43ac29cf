//! Remote store schema descriptors.
//!
//! The remote schema store exposes a user-defined field schema: a mapping
//! from field name to a declared value kind. The schema is fetched fresh on
//! every submission and treated as ground truth for how outgoing values must
//! be encoded. Nothing here is cached or versioned.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared value kind of a remote field.
///
/// Kinds the store may declare but this system never writes to are carried
/// as [`FieldKind::Unsupported`] so a schema fetch never fails on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Title,
    RichText,
    Url,
    PhoneNumber,
    Email,
    Number,
    Files,
    #[serde(other)]
    Unsupported,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Title => "title",
            FieldKind::RichText => "rich_text",
            FieldKind::Url => "url",
            FieldKind::PhoneNumber => "phone_number",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Files => "files",
            FieldKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One field of the remote schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteField {
    pub name: String,
    pub kind: FieldKind,
}

/// The remote collection's field schema at fetch time.
///
/// Fields are held in lexicographic name order so that resolution against
/// the schema is deterministic regardless of the order the store returned
/// them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSchema {
    fields: Vec<RemoteField>,
}

impl RemoteSchema {
    /// Build a schema from `(name, kind)` pairs.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, FieldKind)>,
    {
        let mut fields: Vec<RemoteField> = fields
            .into_iter()
            .map(|(name, kind)| RemoteField { name, kind })
            .collect();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        fields.dedup_by(|a, b| a.name == b.name);
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate field names in lexicographic order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Declared kind of a field, if the schema has it.
    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.kind)
    }

    /// Name of the unique title-kind field, if the schema declares one.
    pub fn title_field(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.kind == FieldKind::Title)
            .map(|f| f.name.as_str())
    }
}
