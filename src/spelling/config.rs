//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GlossaError, Result};
use crate::language::DEFAULT_LANGUAGE;

/// Default maximum edit distance for indexing and lookups.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Default number of suggestions returned by a lookup.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Configuration for the SymSpell engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymSpellConfig {
    /// Maximum edit distance used when a call does not specify one.
    pub max_distance: usize,
    /// Maximum number of suggestions returned when a call does not specify one.
    pub max_suggestions: usize,
    /// Language that is active after initialization.
    pub language: String,
}

impl Default for SymSpellConfig {
    fn default() -> Self {
        SymSpellConfig {
            max_distance: DEFAULT_MAX_DISTANCE,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl SymSpellConfig {
    pub fn with_max_distance(mut self, max_distance: usize) -> Self {
        self.max_distance = max_distance;
        self
    }

    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    /// Check that the configuration can drive an engine.
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(GlossaError::invalid_config(
                "max_suggestions must be greater than 0",
            ));
        }
        if self.language.trim().is_empty() {
            return Err(GlossaError::invalid_config("language must not be empty"));
        }
        Ok(())
    }

    /// Resolve a per-call distance override. `None` and `0` fall back to the
    /// configured value.
    pub fn resolve_max_distance(&self, max_distance: Option<usize>) -> usize {
        max_distance.filter(|&d| d > 0).unwrap_or(self.max_distance)
    }

    /// Resolve a per-call suggestion limit. `None` and `0` fall back to the
    /// configured value.
    pub fn resolve_max_suggestions(&self, max_suggestions: Option<usize>) -> usize {
        max_suggestions
            .filter(|&n| n > 0)
            .unwrap_or(self.max_suggestions)
    }
}
