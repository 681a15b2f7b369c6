//! Reqwest-based client for Google's generateContent endpoint.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Some("user".into()), parts: vec![Part::text(text)] }
    }

    pub fn model(parts: Vec<Part>) -> Self {
        Self { role: Some("model".into()), parts }
    }
}

/// One response part. The service returns exactly one populated field per
/// part; modelled as optionals so callers probe for the variant they need.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable_code: Option<ExecutableCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_execution_result: Option<CodeExecutionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_response: Option<FunctionResponse>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Default::default() }
    }

    pub fn function_response(name: impl Into<String>, response: Value) -> Self {
        Self {
            function_response: Some(FunctionResponse { name: name.into(), response }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutableCode {
    #[serde(default)]
    pub language: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeExecutionResult {
    pub outcome: String,
    #[serde(default)]
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionResponse {
    pub name: String,
    pub response: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Defaults for plain text generation: deterministic decoding.
    pub fn text_defaults() -> Self {
        Self { temperature: 0.0, top_p: 0.95, max_output_tokens: 8192 }
    }
}

#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_execution: Option<CodeExecution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_declarations: Option<Vec<FunctionDeclaration>>,
}

impl Tool {
    pub fn code_execution() -> Self {
        Self { code_execution: Some(CodeExecution {}), ..Default::default() }
    }

    pub fn functions(declarations: Vec<FunctionDeclaration>) -> Self {
        Self { function_declarations: Some(declarations), ..Default::default() }
    }
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct CodeExecution {}

#[derive(Debug, Clone, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetails {
    message: String,
}

/// Which endpoint family the client talks to. Vertex is selected when a
/// real project id and an access token are configured; otherwise the
/// public Generative Language endpoint with an API key.
#[derive(Debug, Clone)]
enum Endpoint {
    Vertex { project_id: String, location: String, token: String },
    ApiKey { key: String },
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: Endpoint,
}

const PLACEHOLDER_PROJECT: &str = "your-project-id";

impl GeminiClient {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let timeout = cfg.get_u64("REQUEST_TIMEOUT").unwrap_or(60);
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        let project_id = cfg.get("PROJECT_ID").unwrap_or_else(|| PLACEHOLDER_PROJECT.into());
        let location = cfg.get("LOCATION").unwrap_or_else(|| "us-central1".into());
        let token = cfg.get("GOOGLE_ACCESS_TOKEN").filter(|s| !s.trim().is_empty());
        let api_key = cfg.get("GOOGLE_API_KEY").filter(|s| !s.trim().is_empty());

        let endpoint = match (token, api_key) {
            (Some(token), _) if project_id != PLACEHOLDER_PROJECT => {
                Endpoint::Vertex { project_id, location, token }
            }
            (_, Some(key)) => Endpoint::ApiKey { key },
            _ => bail!(
                "Missing credentials. Set PROJECT_ID and GOOGLE_ACCESS_TOKEN, or GOOGLE_API_KEY, in env or ~/.config/evoq/.evoqrc"
            ),
        };

        Ok(Self { http, endpoint })
    }

    fn model_url(&self, model: &str) -> String {
        match &self.endpoint {
            Endpoint::Vertex { project_id, location, .. } => format!(
                "https://{location}-aiplatform.googleapis.com/v1/projects/{project_id}/locations/{location}/publishers/google/models/{model}:generateContent"
            ),
            Endpoint::ApiKey { .. } => format!(
                "https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent"
            ),
        }
    }

    pub async fn generate(&self, model: &str, request: &GenerateRequest) -> Result<GenerateResponse> {
        let url = self.model_url(model);
        let mut req = self.http.post(&url).json(request);
        match &self.endpoint {
            Endpoint::Vertex { token, .. } => req = req.bearer_auth(token),
            Endpoint::ApiKey { key } => req = req.query(&[("key", key.as_str())]),
        }

        let resp = req.send().await.context("failed to send generate request")?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            bail!("generate request failed: {} - {}", status, message);
        }

        Ok(resp.json::<GenerateResponse>().await.context("invalid generate response body")?)
    }

    /// One-shot text generation: single user prompt in, concatenated text
    /// parts of the first candidate out.
    pub async fn generate_text(
        &self,
        model: &str,
        prompt: &str,
        config: GenerationConfig,
    ) -> Result<String> {
        let request = GenerateRequest {
            contents: vec![Content::user(prompt)],
            generation_config: config,
            system_instruction: None,
            tools: Vec::new(),
        };
        let response = self.generate(model, &request).await?;

        let mut text = String::new();
        if let Some(content) = response.candidates.into_iter().next().and_then(|c| c.content) {
            for part in content.parts {
                if let Some(t) = part.text {
                    text.push_str(&t);
                }
            }
        }
        Ok(text)
    }
}
