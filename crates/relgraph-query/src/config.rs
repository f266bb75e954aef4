//! Configuration for the query engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Token budgets and timeouts for the query engine's model calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Token budget for entity extraction
    pub entity_max_tokens: usize,

    /// Token budget for the summary
    pub summary_max_tokens: usize,

    /// Maximum time for a single model call (seconds)
    pub model_timeout_secs: u64,
}

impl QueryConfig {
    /// Get the model timeout as a Duration
    pub fn model_timeout(&self) -> Duration {
        Duration::from_secs(self.model_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.entity_max_tokens == 0 {
            return Err("entity_max_tokens must be greater than 0".to_string());
        }
        if self.summary_max_tokens == 0 {
            return Err("summary_max_tokens must be greater than 0".to_string());
        }
        if self.model_timeout_secs == 0 {
            return Err("model_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            entity_max_tokens: 10,
            summary_max_tokens: 150,
            model_timeout_secs: 60,
        }
    }
}
