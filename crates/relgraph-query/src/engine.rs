//! Question answering over a loaded relation store

use crate::config::QueryConfig;
use crate::context::build_context;
use crate::error::QueryError;
use crate::grouping::group;
use crate::prompt::{entity_prompt, no_data_message, SummaryPromptBuilder};
use crate::retrieval::retrieve;
use relgraph_domain::{LlmProvider, Triplet};
use relgraph_store::RelationStore;
use serde::Serialize;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, instrument};

/// Answer to a single question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResponse {
    /// Lower-cased entity keyword the model picked out of the question
    pub entity: String,

    /// Retrieved edges as `[subject, object, relation]`, store order
    pub edges: Vec<(String, String, String)>,

    /// Model summary, or the no-data message when nothing was retrieved
    pub summary: String,
}

/// Answers questions by entity retrieval plus model summarization
///
/// The store is shared read-only; clone the `Arc` to serve many engines
/// from one snapshot.
pub struct QueryEngine<L>
where
    L: LlmProvider,
{
    store: Arc<RelationStore>,
    llm_provider: Arc<L>,
    config: QueryConfig,
}

impl<L> QueryEngine<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new engine
    pub fn new(
        store: Arc<RelationStore>,
        llm_provider: L,
        config: QueryConfig,
    ) -> Result<Self, QueryError> {
        config.validate().map_err(QueryError::Config)?;

        Ok(Self {
            store,
            llm_provider: Arc::new(llm_provider),
            config,
        })
    }

    /// The store this engine reads from
    pub fn store(&self) -> &RelationStore {
        &self.store
    }

    /// The engine's configuration
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Answer a natural-language question
    #[instrument(skip(self), fields(triplets = self.store.len()))]
    pub async fn answer(&self, question: &str) -> Result<QueryResponse, QueryError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(QueryError::EmptyQuestion);
        }

        let raw_entity = self
            .call_llm(entity_prompt(question), self.config.entity_max_tokens)
            .await?;
        let entity = raw_entity.trim().to_lowercase();
        debug!("Extracted entity keyword '{}'", entity);

        let edges = retrieve(&self.store, &entity);
        info!("Retrieved {} edges for '{}'", edges.len(), entity);

        let summary = if edges.is_empty() {
            no_data_message(&entity)
        } else {
            let context = build_context(&group(&edges, &entity));
            let prompt = SummaryPromptBuilder::new(&entity, &context).build();
            self.call_llm(prompt, self.config.summary_max_tokens)
                .await?
                .trim()
                .to_string()
        };

        Ok(QueryResponse {
            entity,
            edges: edges.into_iter().map(Triplet::into_tuple).collect(),
            summary,
        })
    }

    async fn call_llm(&self, prompt: String, max_new_tokens: usize) -> Result<String, QueryError> {
        let llm = Arc::clone(&self.llm_provider);

        let task = tokio::task::spawn_blocking(move || {
            llm.generate_with_limit(&prompt, max_new_tokens)
                .map_err(|e| e.to_string())
        });

        match timeout(self.config.model_timeout(), task).await {
            Ok(Ok(result)) => result.map_err(QueryError::Llm),
            Ok(Err(join_error)) => Err(QueryError::Llm(format!("Task join error: {}", join_error))),
            Err(_) => Err(QueryError::Timeout(self.config.model_timeout_secs)),
        }
    }
}
