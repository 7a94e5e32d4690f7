//! Catalog configuration.

use serde::{Deserialize, Serialize};

/// How new category and widget ids are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Next id is one past the highest id ever handed out in the scope.
    /// Ids are never reused, even after deletions.
    #[default]
    Monotonic,
    /// Next id is the current entry count plus one, moved forward past any
    /// id still in use.
    CountBased,
}

/// Settings for a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub id_policy: IdPolicy,
    pub search_case_sensitive: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            id_policy: IdPolicy::Monotonic,
            search_case_sensitive: false,
        }
    }
}

impl CatalogConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }
}
