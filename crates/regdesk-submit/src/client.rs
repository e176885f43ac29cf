//! HTTP client for the hosted schema store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::{Deserialize, Serialize};
use tracing::debug;

use regdesk_model::{FieldKind, RemoteSchema};

use crate::config::StoreConfig;
use crate::encode::PropertyValue;
use crate::error::{Result, SubmitError};

const API_VERSION_HEADER: &str = "Notion-Version";
const API_VERSION: &str = "2022-06-28";

/// The submitter's view of the store: fetch the current schema, create one
/// record. Implementations must be safe to share across request handlers.
#[async_trait]
pub trait SchemaStore: Send + Sync {
    async fn fetch_schema(&self) -> Result<RemoteSchema>;

    /// Create a record with the given properties, returning its id.
    async fn create_record(&self, properties: &BTreeMap<String, PropertyValue>)
        -> Result<String>;
}

#[async_trait]
impl<T: SchemaStore + ?Sized> SchemaStore for std::sync::Arc<T> {
    async fn fetch_schema(&self) -> Result<RemoteSchema> {
        (**self).fetch_schema().await
    }

    async fn create_record(
        &self,
        properties: &BTreeMap<String, PropertyValue>,
    ) -> Result<String> {
        (**self).create_record(properties).await
    }
}

#[derive(Debug, Deserialize)]
struct CollectionResponse {
    properties: BTreeMap<String, PropertyDescriptor>,
}

#[derive(Debug, Deserialize)]
struct PropertyDescriptor {
    #[serde(rename = "type")]
    kind: FieldKind,
}

#[derive(Debug, Serialize)]
struct CreateRecordBody<'a> {
    parent: Parent<'a>,
    properties: &'a BTreeMap<String, PropertyValue>,
}

#[derive(Debug, Serialize)]
struct Parent<'a> {
    database_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateRecordResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct RemoteErrorBody {
    message: Option<String>,
}

/// Client for the hosted store's HTTP API.
#[derive(Debug, Clone)]
pub struct HostedStoreClient {
    http: reqwest::Client,
    config: StoreConfig,
}

impl HostedStoreClient {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token)).map_err(
            |e| SubmitError::ClientBuild {
                reason: format!("invalid token: {e}"),
            },
        )?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SubmitError::ClientBuild {
                reason: e.to_string(),
            })?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn collection_id(&self) -> &str {
        &self.config.collection_id
    }

    /// Turn a non-success response into a [`SubmitError::Remote`] carrying
    /// the store's own message where it sent one.
    async fn handle_failure(response: reqwest::Response) -> SubmitError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<RemoteErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);
        SubmitError::Remote { status, message }
    }
}

#[async_trait]
impl SchemaStore for HostedStoreClient {
    async fn fetch_schema(&self) -> Result<RemoteSchema> {
        let url = format!(
            "{}/v1/databases/{}",
            self.config.base_url, self.config.collection_id
        );
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Self::handle_failure(response).await);
        }

        let collection: CollectionResponse =
            response
                .json()
                .await
                .map_err(|e| SubmitError::UnexpectedResponse {
                    reason: e.to_string(),
                })?;
        let schema = RemoteSchema::from_fields(
            collection
                .properties
                .into_iter()
                .map(|(name, descriptor)| (name, descriptor.kind)),
        );
        debug!(fields = schema.len(), "fetched collection schema");
        Ok(schema)
    }

    async fn create_record(
        &self,
        properties: &BTreeMap<String, PropertyValue>,
    ) -> Result<String> {
        let url = format!("{}/v1/pages", self.config.base_url);
        let body = CreateRecordBody {
            parent: Parent {
                database_id: &self.config.collection_id,
            },
            properties,
        };
        let response = self.http.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(Self::handle_failure(response).await);
        }

        let created: CreateRecordResponse =
            response
                .json()
                .await
                .map_err(|e| SubmitError::UnexpectedResponse {
                    reason: e.to_string(),
                })?;
        Ok(created.id)
    }
}
