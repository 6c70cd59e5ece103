//! The site-wide key-value options store consumed by generators and
//! presentation fallback chains.

use serde::Deserialize;
use std::collections::HashMap;

/// Read access to site-wide options.
///
/// `get` returns the stored value when the key is present and the supplied
/// default otherwise. Callers treat an empty string as "not configured".
pub trait SiteOptions {
    fn get(&self, key: &str, default: &str) -> String;
}

/// Plain map-backed store, used by the CLI snapshot format and by tests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct InMemoryOptions {
    values: HashMap<String, String>,
}

impl InMemoryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style insert for test setups.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl SiteOptions for InMemoryOptions {
    fn get(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}
