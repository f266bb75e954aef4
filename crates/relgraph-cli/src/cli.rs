//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Relgraph - Extract relation triplets from text and ask questions about them.
#[derive(Debug, Parser)]
#[command(name = "relgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "RELGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (summary or counts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Strip `|`-separated labels from a benchmark file
    Clean(CleanArgs),

    /// Extract triplets from a text file into a snapshot
    Extract(ExtractArgs),

    /// Ask a question against a snapshot
    Query(QueryArgs),

    /// Show counts for a snapshot
    Stats(StatsArgs),
}

/// Arguments for the clean command.
#[derive(Debug, Parser)]
pub struct CleanArgs {
    /// Labeled input file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination for the cleaned text
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Plain-text document
    #[arg(short, long)]
    pub input: PathBuf,

    /// Snapshot to write (defaults to the configured snapshot path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extraction model name
    #[arg(short, long, env = "RELGRAPH_EXTRACTION_MODEL")]
    pub model: Option<String>,

    /// Ollama endpoint
    #[arg(long, env = "RELGRAPH_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Skip sentences shorter than this many characters
    #[arg(long)]
    pub min_sentence_length: Option<usize>,
}

/// Arguments for the query command.
#[derive(Debug, Parser)]
pub struct QueryArgs {
    /// Natural-language question
    pub question: String,

    /// Snapshot to query (defaults to the configured snapshot path)
    #[arg(short, long, env = "RELGRAPH_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,

    /// Model used for entity extraction and summaries
    #[arg(short, long, env = "RELGRAPH_QUERY_MODEL")]
    pub model: Option<String>,

    /// Ollama endpoint
    #[arg(long, env = "RELGRAPH_ENDPOINT")]
    pub endpoint: Option<String>,
}

/// Arguments for the stats command.
#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Snapshot to inspect (defaults to the configured snapshot path)
    #[arg(short, long, env = "RELGRAPH_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
