//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use relgraph_extractor::ExtractionResult;
use relgraph_query::QueryResponse;
use relgraph_store::StoreStats;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a query answer.
    pub fn format_response(&self, response: &QueryResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
            OutputFormat::Table => Ok(self.format_response_table(response)),
            OutputFormat::Quiet => Ok(response.summary.clone()),
        }
    }

    fn format_response_table(&self, response: &QueryResponse) -> String {
        let mut output = self.info(&format!("Entity: {}", response.entity));
        output.push('\n');

        if response.edges.is_empty() {
            output.push_str(&self.colorize("No relationships found.", "yellow"));
        } else {
            let mut builder = Builder::default();
            builder.push_record(["Subject", "Relation", "Object"]);
            for (subject, object, relation) in &response.edges {
                builder.push_record([subject, relation, object]);
            }

            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            output.push_str(&table.to_string());
        }

        output.push_str("\n\n");
        output.push_str(&response.summary);
        output
    }

    /// Format snapshot statistics.
    pub fn format_stats(&self, path: &Path, stats: &StoreStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "snapshot": path.display().to_string(),
                    "stats": stats,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => Ok(self.metrics_table(&[
                ("Snapshot", path.display().to_string()),
                ("Triplets", stats.triplet_count.to_string()),
                ("Unique triplets", stats.unique_triplet_count.to_string()),
                ("Entities", stats.entity_count.to_string()),
                ("Relation labels", stats.relation_count.to_string()),
            ])),
            OutputFormat::Quiet => Ok(stats.triplet_count.to_string()),
        }
    }

    /// Format the outcome of an extraction run.
    pub fn format_extraction(&self, output: &Path, result: &ExtractionResult) -> Result<String> {
        let meta = &result.metadata;
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "snapshot": output.display().to_string(),
                    "model": meta.model_name,
                    "triplets": result.triplets.len(),
                    "duplicates_removed": result.duplicates_removed(),
                    "total_sentences": meta.total_sentences,
                    "skipped_sentences": meta.skipped_sentences,
                    "processed_sentences": meta.processed_sentences,
                    "failed_sentences": result.failures.len(),
                    "processing_time_ms": meta.processing_time_ms,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Table => {
                let mut text = self.success(&format!(
                    "Saved {} triplets to {}",
                    result.triplets.len(),
                    output.display()
                ));
                text.push('\n');
                text.push_str(&self.metrics_table(&[
                    ("Model", meta.model_name.clone()),
                    ("Sentences", meta.total_sentences.to_string()),
                    ("Skipped (too short)", meta.skipped_sentences.to_string()),
                    ("Processed", meta.processed_sentences.to_string()),
                    ("Failed", result.failures.len().to_string()),
                    ("Duplicates removed", result.duplicates_removed().to_string()),
                    ("Time (ms)", meta.processing_time_ms.to_string()),
                ]));
                Ok(text)
            }
            OutputFormat::Quiet => Ok(result.triplets.len().to_string()),
        }
    }

    fn metrics_table(&self, rows: &[(&str, String)]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Metric", "Value"]);
        for (name, value) in rows {
            builder.push_record([name.to_string(), value.clone()]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
