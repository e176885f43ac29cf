//! Schema reconciliation and record creation.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use regdesk_map::{FieldResolver, Resolution};
use regdesk_model::RegistrationRecord;

use crate::client::SchemaStore;
use crate::encode::{drop_blank_text, encode, PropertyValue};
use crate::error::Result;
use crate::plan::field_plan;

/// Title field name assumed when the schema declares no title-kind field.
const FALLBACK_TITLE_FIELD: &str = "Name";

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// Id of the created record.
    pub record_id: String,
    /// Record fields that carried a value but could not be placed: no
    /// remote field resolved, or the resolved field's kind could not take
    /// the value. Purely informational; the submission itself succeeded.
    pub dropped_fields: Vec<String>,
}

/// Reconciles registration records against the store's current schema and
/// creates one record per submission.
///
/// The schema is fetched fresh for every call, so a collection whose fields
/// were renamed between two submissions is handled without restarts.
#[derive(Debug, Clone)]
pub struct Submitter<S> {
    store: S,
}

impl<S: SchemaStore> Submitter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn submit(&self, record: &RegistrationRecord) -> Result<SubmissionReceipt> {
        let schema = self.store.fetch_schema().await?;
        let resolver = FieldResolver::new(schema.field_names());

        let title_field = schema
            .title_field()
            .unwrap_or(FALLBACK_TITLE_FIELD)
            .to_string();
        let mut properties: BTreeMap<String, PropertyValue> = BTreeMap::new();
        properties.insert(title_field, PropertyValue::title(&record.team_name));

        let mut dropped_fields = Vec::new();
        for spec in field_plan(record) {
            if spec.value.trim().is_empty() {
                debug!(field = %spec.label, "skipping blank field");
                continue;
            }
            let aliases: Vec<&str> = spec.aliases.iter().map(String::as_str).collect();
            match resolver.resolve(&aliases) {
                Resolution::Resolved(name) => {
                    // resolve() only returns names the schema holds.
                    let Some(kind) = schema.kind_of(&name) else {
                        continue;
                    };
                    match encode(kind, spec.class, &spec.value, spec.attachment_label.as_deref())
                    {
                        Some(value) => {
                            properties.insert(name, value);
                        }
                        None => {
                            warn!(
                                field = %spec.label,
                                remote = %name,
                                kind = %kind,
                                "value does not fit the remote field, dropping"
                            );
                            dropped_fields.push(spec.label);
                        }
                    }
                }
                Resolution::Unresolved => {
                    if let Some((closest, score)) = resolver.closest_candidate(&spec.aliases[0]) {
                        warn!(
                            field = %spec.label,
                            closest = %closest,
                            score,
                            "no remote field resolved, dropping"
                        );
                    } else {
                        warn!(field = %spec.label, "no remote field resolved, dropping");
                    }
                    dropped_fields.push(spec.label);
                }
            }
        }

        drop_blank_text(&mut properties);

        let record_id = self.store.create_record(&properties).await?;
        info!(
            record_id = %record_id,
            properties = properties.len(),
            dropped = dropped_fields.len(),
            "registration record created"
        );
        Ok(SubmissionReceipt {
            record_id,
            dropped_fields,
        })
    }
}
