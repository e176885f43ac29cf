//! Kind-directed encoding of form values into store property payloads.
//!
//! A value only becomes a property when the remote field's declared kind can
//! carry it. Mismatches (a non-numeric UID against a number field, a broken
//! URL against a url field) encode to `None` and the field is dropped from
//! the submission rather than failing it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use regdesk_model::FieldKind;

/// What class of value a form field holds, independent of the remote kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueClass {
    Text,
    Link,
    Phone,
    Email,
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub text: TextContent,
}

impl RichTextItem {
    fn new(content: &str) -> Self {
        Self {
            text: TextContent {
                content: content.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
    pub external: ExternalFile,
}

/// One outgoing property value, serialized in the store's wire shape
/// (`{"rich_text": [...]}`, `{"url": "..."}`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    #[serde(rename = "title")]
    Title(Vec<RichTextItem>),
    #[serde(rename = "rich_text")]
    RichText(Vec<RichTextItem>),
    #[serde(rename = "url")]
    Url(String),
    #[serde(rename = "phone_number")]
    PhoneNumber(String),
    #[serde(rename = "email")]
    Email(String),
    #[serde(rename = "number")]
    Number(f64),
    #[serde(rename = "files")]
    Files(Vec<FileRef>),
}

impl PropertyValue {
    pub fn title(content: &str) -> Self {
        PropertyValue::Title(vec![RichTextItem::new(content)])
    }

    pub fn rich_text(content: &str) -> Self {
        PropertyValue::RichText(vec![RichTextItem::new(content)])
    }

    /// Title or rich-text payloads whose only run is blank. The store
    /// rejects these, so they are stripped before sending.
    pub fn is_blank_text(&self) -> bool {
        match self {
            PropertyValue::Title(items) | PropertyValue::RichText(items) => items
                .iter()
                .all(|item| item.text.content.trim().is_empty()),
            _ => false,
        }
    }
}

/// Strip everything that is not an ASCII digit.
fn digits_of(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Encode one form value for a remote field of the given kind.
///
/// Returns `None` when the value is blank, malformed for its class, or the
/// remote kind cannot carry the class. `attachment_label` names the file
/// when a link lands on a files-kind field.
pub fn encode(
    kind: FieldKind,
    class: ValueClass,
    value: &str,
    attachment_label: Option<&str>,
) -> Option<PropertyValue> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    match class {
        ValueClass::Link => {
            // A link only goes out if it parses as a URL; the wizard
            // enforces this too, but records can arrive from other clients.
            if url::Url::parse(value).is_err() {
                return None;
            }
            match kind {
                FieldKind::Url => Some(PropertyValue::Url(value.to_string())),
                FieldKind::Files => Some(PropertyValue::Files(vec![FileRef {
                    name: attachment_label.unwrap_or("Attachment").to_string(),
                    external: ExternalFile {
                        url: value.to_string(),
                    },
                }])),
                FieldKind::RichText => Some(PropertyValue::rich_text(value)),
                _ => None,
            }
        }
        ValueClass::Phone => {
            if digits_of(value).len() < 10 {
                return None;
            }
            match kind {
                // The raw value is kept; separators the user typed survive.
                FieldKind::PhoneNumber => Some(PropertyValue::PhoneNumber(value.to_string())),
                FieldKind::RichText => Some(PropertyValue::rich_text(value)),
                _ => None,
            }
        }
        ValueClass::Email => match kind {
            FieldKind::Email => Some(PropertyValue::Email(value.to_string())),
            FieldKind::RichText => Some(PropertyValue::rich_text(value)),
            _ => None,
        },
        ValueClass::Numeric => {
            let number: f64 = value.parse().ok()?;
            match kind {
                FieldKind::Number => Some(PropertyValue::Number(number)),
                FieldKind::RichText => Some(PropertyValue::rich_text(value)),
                _ => None,
            }
        }
        ValueClass::Text => match kind {
            FieldKind::RichText => Some(PropertyValue::rich_text(value)),
            FieldKind::Title => Some(PropertyValue::title(value)),
            _ => None,
        },
    }
}

/// Remove title and rich-text properties whose content is blank.
pub fn drop_blank_text(properties: &mut BTreeMap<String, PropertyValue>) {
    properties.retain(|_, value| !value.is_blank_text());
}
