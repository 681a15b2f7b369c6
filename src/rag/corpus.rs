//! REST client for the hosted retrieval corpora.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusInfo {
    pub name: String,
    pub display_name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListCorporaResponse {
    #[serde(default)]
    rag_corpora: Vec<CorpusInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievedChunk {
    #[serde(default)]
    pub source_display_name: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
struct RetrieveContextsResponse {
    #[serde(default)]
    contexts: ContextList,
}

#[derive(Debug, Default, Deserialize)]
struct ContextList {
    #[serde(default)]
    contexts: Vec<RetrievedChunk>,
}

pub struct CorpusClient {
    http: Client,
    base: String,
    parent: String,
    token: String,
}

impl CorpusClient {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let project = cfg
            .get("PROJECT_ID")
            .filter(|p| !p.trim().is_empty() && p != "your-project-id")
            .ok_or_else(|| anyhow::anyhow!("Missing PROJECT_ID for corpus access"))?;
        let location = cfg.get("LOCATION").unwrap_or_else(|| "us-central1".into());
        let token = cfg
            .get("GOOGLE_ACCESS_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("Missing GOOGLE_ACCESS_TOKEN for corpus access"))?;

        let timeout = cfg.get_u64("REQUEST_TIMEOUT").unwrap_or(60);
        let http = Client::builder().timeout(Duration::from_secs(timeout)).build()?;

        Ok(Self {
            http,
            base: format!("https://{location}-aiplatform.googleapis.com/v1beta1"),
            parent: format!("projects/{project}/locations/{location}"),
            token,
        })
    }

    pub async fn list_corpora(&self) -> Result<Vec<CorpusInfo>> {
        let url = format!("{}/{}/ragCorpora", self.base, self.parent);
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .context("failed to list corpora")?;

        match resp.status() {
            StatusCode::OK => Ok(resp.json::<ListCorporaResponse>().await?.rag_corpora),
            status => {
                let text = resp.text().await.unwrap_or_default();
                bail!("corpus listing failed: {} - {}", status, text)
            }
        }
    }

    pub async fn find_by_display_name(&self, display_name: &str) -> Result<Option<CorpusInfo>> {
        let corpora = self.list_corpora().await?;
        Ok(corpora.into_iter().find(|c| c.display_name == display_name))
    }

    pub async fn retrieve(
        &self,
        corpus_name: &str,
        query: &str,
        top_k: u32,
        distance_threshold: f64,
    ) -> Result<Vec<RetrievedChunk>> {
        let url = format!("{}/{}:retrieveContexts", self.base, self.parent);
        let body = json!({
            "vertexRagStore": {
                "ragResources": [{ "ragCorpus": corpus_name }],
                "vectorDistanceThreshold": distance_threshold,
            },
            "query": {
                "text": query,
                "similarityTopK": top_k,
            },
        });

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .context("retrieval query failed")?;

        match resp.status() {
            StatusCode::OK => Ok(resp.json::<RetrieveContextsResponse>().await?.contexts.contexts),
            status => {
                let text = resp.text().await.unwrap_or_default();
                bail!("retrieval query failed: {} - {}", status, text)
            }
        }
    }
}
