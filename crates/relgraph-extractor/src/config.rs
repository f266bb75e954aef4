//! Configuration for the Extractor

use crate::parser::Markers;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Maximum input text length (characters)
    pub max_text_length: usize,

    /// Sentences shorter than this (characters) are skipped
    pub min_sentence_length: usize,

    /// Maximum time for a single model call (seconds)
    pub extraction_timeout_secs: u64,

    /// Log progress every N sentences
    pub progress_interval: usize,

    /// In-band markers emitted by the extraction model
    pub markers: Markers,
}

impl ExtractorConfig {
    /// Get the extraction timeout as a Duration
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.min_sentence_length > self.max_text_length {
            return Err("min_sentence_length cannot exceed max_text_length".to_string());
        }
        if self.extraction_timeout_secs == 0 {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        if self.progress_interval == 0 {
            return Err("progress_interval must be greater than 0".to_string());
        }
        if self.markers.start.is_empty()
            || self.markers.subject_separator.is_empty()
            || self.markers.relation_separator.is_empty()
        {
            return Err("start and separator markers must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_text_length: 5_000_000,
            min_sentence_length: 20,
            extraction_timeout_secs: 120,
            progress_interval: 10,
            markers: Markers::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_sentence_length, 20);
        assert_eq!(config.progress_interval, 10);
    }

    #[test]
    fn test_invalid_max_text_length() {
        let mut config = ExtractorConfig::default();
        config.max_text_length = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_progress_interval() {
        let mut config = ExtractorConfig::default();
        config.progress_interval = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_start_marker_rejected() {
        let mut config = ExtractorConfig::default();
        config.markers.start = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_toml_without_markers_uses_defaults() {
        let toml_str = r#"
            max_text_length = 1000
            min_sentence_length = 5
            extraction_timeout_secs = 30
            progress_interval = 2
        "#;
        let config = ExtractorConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.max_text_length, 1000);
        assert_eq!(config.markers, Markers::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ExtractorConfig::from_toml("min_sentence_length = 40").unwrap();
        assert_eq!(config.min_sentence_length, 40);
        assert_eq!(config.max_text_length, 5_000_000);
    }
}
