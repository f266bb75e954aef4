//! Query command implementation.

use crate::cli::QueryArgs;
use crate::config::{override_model, Config};
use crate::error::Result;
use crate::output::Formatter;
use relgraph_domain::LlmProvider;
use relgraph_query::{QueryConfig, QueryEngine, QueryResponse};
use relgraph_store::RelationStore;
use std::fmt::Display;
use std::sync::Arc;

/// Execute the query command.
pub async fn execute_query(args: QueryArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let path = config.snapshot_or_default(args.snapshot);
    let store = RelationStore::load_or_empty(&path)?;

    let model = override_model(&config.query_model, args.model, args.endpoint);
    let provider = model.build_provider();

    let response = answer(store, provider, config.query.clone(), &args.question).await?;
    println!("{}", formatter.format_response(&response)?);

    Ok(())
}

/// Answer one question against a store with the given model.
pub async fn answer<L>(
    store: RelationStore,
    provider: L,
    query_config: QueryConfig,
    question: &str,
) -> Result<QueryResponse>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: Display,
{
    let engine = QueryEngine::new(Arc::new(store), provider, query_config)?;
    Ok(engine.answer(question).await?)
}
