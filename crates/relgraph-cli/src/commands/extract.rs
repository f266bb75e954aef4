//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::config::{override_model, Config};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use relgraph_domain::LlmProvider;
use relgraph_extractor::{ExtractionResult, Extractor, ExtractorConfig};
use relgraph_store::RelationStore;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::info;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let output = config.snapshot_or_default(args.output);
    let text = fs::read_to_string(&args.input)?;

    let mut extractor_config = config.extraction.clone();
    if let Some(min) = args.min_sentence_length {
        extractor_config.min_sentence_length = min;
    }

    let model = override_model(&config.extraction_model, args.model, args.endpoint);
    let provider = model.build_provider();

    let result = extract_to_snapshot(&text, provider, extractor_config, &model.model, &output).await?;

    for failure in &result.failures {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Sentence {} failed: {}",
                failure.sentence_index, failure.reason
            ))
        );
    }
    println!("{}", formatter.format_extraction(&output, &result)?);

    Ok(())
}

/// Run extraction over `text` and write the triplets as a snapshot.
///
/// Blank input is rejected so an existing snapshot is never replaced by an
/// empty one by mistake.
pub async fn extract_to_snapshot<L>(
    text: &str,
    provider: L,
    extractor_config: ExtractorConfig,
    model_name: &str,
    output: &Path,
) -> Result<ExtractionResult>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Display,
{
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput("input contains no text".to_string()));
    }

    let extractor = Extractor::new(provider, extractor_config)?.with_model_name(model_name);
    let result = extractor.extract(text).await?;

    let store: RelationStore = result.triplets.iter().cloned().collect();
    store.save(output)?;
    info!("Wrote {} triplets to {}", store.len(), output.display());

    Ok(result)
}
