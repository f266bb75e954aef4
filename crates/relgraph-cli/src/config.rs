//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use relgraph_extractor::ExtractorConfig;
use relgraph_llm::LlmConfig;
use relgraph_query::QueryConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot used when a command is not given one
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Sentence splitting and timeouts for `extract`
    #[serde(default)]
    pub extraction: ExtractorConfig,

    /// Relation-extraction model
    #[serde(default = "default_extraction_model")]
    pub extraction_model: LlmConfig,

    /// Token budgets for `query`
    #[serde(default)]
    pub query: QueryConfig,

    /// Entity-extraction and summarization model
    #[serde(default)]
    pub query_model: LlmConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".relgraph").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is used
    /// when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::default_path()?;
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let contents = fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from TOML.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section for unusable values.
    pub fn validate(&self) -> Result<()> {
        self.extraction.validate().map_err(CliError::Config)?;
        self.extraction_model.validate().map_err(CliError::Config)?;
        self.query.validate().map_err(CliError::Config)?;
        self.query_model.validate().map_err(CliError::Config)?;
        Ok(())
    }

    /// Snapshot to use, preferring an explicit argument.
    pub fn snapshot_or_default(&self, snapshot: Option<PathBuf>) -> PathBuf {
        snapshot.unwrap_or_else(|| self.snapshot_path.clone())
    }
}

/// Apply command-line overrides to a model configuration.
pub fn override_model(
    base: &LlmConfig,
    model: Option<String>,
    endpoint: Option<String>,
) -> LlmConfig {
    let mut config = base.clone();
    if let Some(model) = model {
        config.model = model;
    }
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }
    config
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            settings: Settings::default(),
            extraction: ExtractorConfig::default(),
            extraction_model: default_extraction_model(),
            query: QueryConfig::default(),
            query_model: LlmConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("relations.json")
}

fn default_extraction_model() -> LlmConfig {
    LlmConfig::for_model("rebel-large")
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
