//! Remote bridge to the hosted code-execution sandbox.

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;
use crate::llm::{Content, GeminiClient, GenerateRequest, GenerationConfig, GenerateResponse, Tool};

use super::{ExecutionBackend, RemoteServiceError};

pub struct GeminiCodeRunner {
    client: GeminiClient,
    model: String,
}

impl GeminiCodeRunner {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let client = GeminiClient::from_config(cfg)?;
        let model = cfg.get("CODE_MODEL").unwrap_or_else(|| "gemini-2.0-flash-001".into());
        Ok(Self { client, model })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn instruction(code: &str) -> String {
        format!(
            "Please execute the following Python code and return the results:\n\n```python\n{code}\n```\n\nMake sure to execute the code and show the output."
        )
    }
}

#[async_trait]
impl ExecutionBackend for GeminiCodeRunner {
    async fn run(&self, code: &str) -> Result<GenerateResponse, RemoteServiceError> {
        let request = GenerateRequest {
            contents: vec![Content::user(Self::instruction(code))],
            // Temperature pinned to zero: identical submissions decode to
            // semantically stable results.
            generation_config: GenerationConfig {
                temperature: 0.0,
                top_p: 1.0,
                max_output_tokens: 8192,
            },
            system_instruction: None,
            tools: vec![Tool::code_execution()],
        };

        self.client
            .generate(&self.model, &request)
            .await
            .map_err(|e| RemoteServiceError(format!("Code execution failed: {e}")))
    }
}
