//! Workspace retrieval engine: corpus connection with default fallback,
//! retrieval queries, and answer templating.

pub mod corpus;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::Config;
use crate::llm::{GeminiClient, GenerationConfig};
use self::corpus::{CorpusClient, CorpusInfo, RetrievedChunk};

/// Catch-all corpus used when the workspace has none of its own.
pub const DEFAULT_RESOURCE_ID: &str = "workspace__all";

pub struct RagEngine {
    client: Option<CorpusClient>,
    corpus: Option<CorpusInfo>,
    llm: Option<GeminiClient>,
    model: String,
    top_k: u32,
    distance_threshold: f64,
}

impl RagEngine {
    /// Connects to the configured corpus, falling back to the default one.
    /// A workspace may have no corpus at all; that case is carried as an
    /// engine that answers with a fixed notice instead of failing.
    pub async fn connect(cfg: &Config) -> Self {
        let llm = match GeminiClient::from_config(cfg) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("RAG answering unavailable: {e}");
                None
            }
        };

        let client = match CorpusClient::from_config(cfg) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("RAG corpus client unavailable: {e}");
                None
            }
        };

        let mut corpus = None;
        if let Some(client) = &client {
            let resource_id = cfg
                .get("RAG_RESOURCE_ID")
                .unwrap_or_else(|| DEFAULT_RESOURCE_ID.into());
            corpus = match client.find_by_display_name(&resource_id).await {
                Ok(Some(found)) => {
                    info!("connected to corpus {resource_id}");
                    Some(found)
                }
                Ok(None) => None,
                Err(e) => {
                    warn!("failed to connect to corpus {resource_id}: {e}");
                    None
                }
            };
            if corpus.is_none() && resource_id != DEFAULT_RESOURCE_ID {
                corpus = client
                    .find_by_display_name(DEFAULT_RESOURCE_ID)
                    .await
                    .ok()
                    .flatten();
                if corpus.is_some() {
                    info!("connected to default corpus {DEFAULT_RESOURCE_ID}");
                }
            }
        }

        Self {
            client,
            corpus,
            llm,
            model: cfg.get("TEXT_MODEL").unwrap_or_else(|| "gemini-2.5-flash".into()),
            top_k: cfg.get_u64("RAG_TOP_K").unwrap_or(10) as u32,
            distance_threshold: cfg.get_f64("RAG_DISTANCE_THRESHOLD").unwrap_or(0.5),
        }
    }

    pub fn has_corpus(&self) -> bool {
        self.corpus.is_some()
    }

    /// Retrieves context for a query and serializes it for prompting.
    pub async fn query(&self, query_text: &str) -> Result<String> {
        let client = self.client.as_ref().context("No corpus connected")?;
        let corpus = self.corpus.as_ref().context("No corpus connected")?;
        let chunks = client
            .retrieve(&corpus.name, query_text, self.top_k, self.distance_threshold)
            .await?;
        Ok(serialize_chunks(&chunks))
    }

    /// Answers a domain question: retrieve, template, generate.
    pub async fn answer(&self, query: &str) -> Result<String> {
        if !self.has_corpus() {
            return Ok("Workspace has no associated corpus.".to_string());
        }

        let retrieved = self.query(query).await?;
        let llm = self
            .llm
            .as_ref()
            .context("RAG answering requires remote service credentials")?;
        let prompt = conditional_rag_prompt(query, &retrieved);
        llm.generate_text(&self.model, &prompt, GenerationConfig::text_defaults()).await
    }
}

pub fn serialize_chunks(chunks: &[RetrievedChunk]) -> String {
    chunks
        .iter()
        .map(|chunk| {
            format!("Document: {}\nContent: {}\n---\n", chunk.source_display_name, chunk.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Answer prompt: prefer retrieved excerpts, cite document names, fall
/// back to model knowledge when retrieval comes back empty.
pub fn conditional_rag_prompt(query: &str, retrieved_context: &str) -> String {
    format!(
        "Your task is to answer a question.\n\
I will provide you with a question and, if available, results from a knowledge retrieval system.\n\n\
The 'Retrieval Results' section below contains a series of text excerpts retrieved from various documents. Each excerpt is formatted as follows:\n\n\
---\n\
Document: [Name of the Document]\n\
Content: [Relevant text excerpt from the document]\n\
---\n\n\
Always provide the name of the document from which you source your information in your answer.\n\n\
**Question:** {query}\n\n\
**Instructions:**\n\n\
1. **Analyze the Retrieval Results:** First, examine the 'Retrieval Results' section below.\n\
2. **Use Retrieval Results If Available:** **Always** prioritize using information from 'Retrieval Results' to formulate your response. Again, always provide the name of the document if its information is used.\n\
3. **Use Your Own Knowledge if no Retrieval Results:** **Crucially, if the 'Retrieval Results' section is empty or states 'No results found', you MUST use your own internal knowledge to answer the question.** Do not simply say you cannot answer.\n\
4. **Utilize both supplied and internal knowledge:** You are permitted to utilize internal knowledge in your response, ONLY if retrieved information is insufficient.\n\
5. **Acknowledge Knowledge Gaps:** If neither the retrieval results nor your own knowledge provides a sufficient answer, only then state that you cannot provide a response.\n\n\
**Retrieval Results:**\n\
{retrieved_context}"
    )
}
