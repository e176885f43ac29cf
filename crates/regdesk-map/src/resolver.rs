//! Alias-then-containment field name resolution.

use rapidfuzz::distance::jaro_winkler::similarity as jaro_winkler;
use serde::{Deserialize, Serialize};

/// Outcome of resolving one logical field against a remote schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The remote field name the logical field maps to.
    Resolved(String),
    /// No remote field plausibly matches; the field should be omitted.
    Unresolved,
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(name) => Some(name),
            Resolution::Unresolved => None,
        }
    }
}

/// Lowercase a field name and strip everything that is not ASCII
/// alphanumeric, so `"Player 2 UID"` and `"player2_uid"` compare equal.
pub fn normalize_name(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Resolver over one fetched schema's field names.
///
/// Construction normalizes every remote name once; `resolve` is then a pure
/// lookup. The resolver holds no connection to the store and is recomputed
/// per submission, since the schema is refetched every time.
#[derive(Debug, Clone)]
pub struct FieldResolver {
    names: Vec<String>,
    normalized: Vec<String>,
}

impl FieldResolver {
    pub fn new<I, S>(remote_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = remote_names.into_iter().map(Into::into).collect();
        let normalized = names.iter().map(|n| normalize_name(n)).collect();
        Self { names, normalized }
    }

    /// Resolve an ordered alias list to a remote field name.
    ///
    /// Aliases are tried for exact matches first, then for normalized
    /// containment in either direction. Remote names are scanned in the
    /// order the resolver was built with, so resolution is deterministic
    /// for a given schema.
    pub fn resolve(&self, aliases: &[&str]) -> Resolution {
        for alias in aliases {
            if let Some(name) = self.names.iter().find(|name| name.as_str() == *alias) {
                return Resolution::Resolved(name.clone());
            }
        }
        for alias in aliases {
            let needle = normalize_name(alias);
            if needle.is_empty() {
                continue;
            }
            for (idx, candidate) in self.normalized.iter().enumerate() {
                if candidate.is_empty() {
                    continue;
                }
                if candidate.contains(&needle) || needle.contains(candidate.as_str()) {
                    return Resolution::Resolved(self.names[idx].clone());
                }
            }
        }
        Resolution::Unresolved
    }

    /// Nearest remote field name to an alias by Jaro-Winkler similarity.
    ///
    /// Diagnostic only: resolution itself never uses this score. It lets
    /// the caller log "no match for X, closest was Y" for unresolved
    /// fields.
    pub fn closest_candidate(&self, alias: &str) -> Option<(&str, f64)> {
        let needle = normalize_name(alias);
        self.names
            .iter()
            .zip(&self.normalized)
            .map(|(name, norm)| (name.as_str(), jaro_winkler(needle.chars(), norm.chars())))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
