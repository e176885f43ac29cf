//! Store credentials and collection addressing.

use tracing::warn;

use crate::error::{Result, SubmitError};

/// Environment variable holding the store API token.
pub const TOKEN_VAR: &str = "REGDESK_STORE_TOKEN";
/// Environment variable holding the target collection id.
pub const COLLECTION_VAR: &str = "REGDESK_COLLECTION_ID";
/// Environment variable overriding the store base URL.
pub const BASE_URL_VAR: &str = "REGDESK_STORE_URL";

const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// Connection settings for the hosted schema store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub token: String,
    pub collection_id: String,
    pub base_url: String,
}

impl StoreConfig {
    /// Build a config with the default base URL. The collection id is
    /// normalized to its canonical dashed form.
    pub fn new(token: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            collection_id: normalize_collection_id(&collection_id.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read the config from the environment.
    ///
    /// Both the token and the collection id are required; either one
    /// missing is a configuration error the caller surfaces as such
    /// rather than a reason to refuse startup.
    pub fn from_env() -> Result<Self> {
        let token = require_var(TOKEN_VAR)?;
        let collection_id = require_var(COLLECTION_VAR)?;
        let mut config = Self::new(token, collection_id);
        if let Ok(base_url) = std::env::var(BASE_URL_VAR) {
            if !base_url.trim().is_empty() {
                config = config.with_base_url(base_url.trim_end_matches('/'));
            }
        }
        Ok(config)
    }
}

fn require_var(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            warn!(variable = name, "required configuration variable is not set");
            Err(SubmitError::MissingConfig { variable: name })
        }
    }
}

/// Canonicalize a collection id.
///
/// Ids are accepted with or without dashes. A 32-character hex id is
/// re-dashed into the 8-4-4-4-12 layout; anything else is passed through
/// unchanged and left for the store to reject.
pub fn normalize_collection_id(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|ch| *ch != '-').collect();
    if stripped.len() == 32 && stripped.chars().all(|ch| ch.is_ascii_hexdigit()) {
        format!(
            "{}-{}-{}-{}-{}",
            &stripped[0..8],
            &stripped[8..12],
            &stripped[12..16],
            &stripped[16..20],
            &stripped[20..32]
        )
    } else {
        raw.to_string()
    }
}
