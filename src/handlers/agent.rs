//! Default handler: conversational agent with the workspace tool loop.

use anyhow::Result;
use log::{info, warn};
use serde_json::json;

use crate::config::Config;
use crate::llm::{Content, GeminiClient, GenerateRequest, GenerationConfig, Part, Tool};
use crate::printer::MarkdownPrinter;
use crate::tools::Registry;

const SYSTEM_PROMPT: &str = "You are a geoscience assistant for a survey workspace. \
Answer questions about the workspace objects (drillhole collections, point sets) using the \
available tools: list objects, inspect object or version metadata, download assay data, \
generate charts, and look up domain context. Prefer tool results over guesses and keep \
answers concise.";

/// Bound on model/tool round trips for a single question.
const MAX_STEPS: usize = 6;

pub struct AgentHandler;

impl AgentHandler {
    pub async fn run(
        prompt: &str,
        model: &str,
        temperature: f32,
        top_p: f32,
        markdown: bool,
    ) -> Result<()> {
        let cfg = Config::load();
        let client = GeminiClient::from_config(&cfg)?;
        let registry = Registry::from_config(&cfg).await;
        let declarations = registry.declarations();

        let mut contents = vec![Content::user(prompt)];

        for step in 0..MAX_STEPS {
            let request = GenerateRequest {
                contents: contents.clone(),
                generation_config: GenerationConfig { temperature, top_p, max_output_tokens: 8192 },
                system_instruction: Some(Content { role: None, parts: vec![Part::text(SYSTEM_PROMPT)] }),
                tools: vec![Tool::functions(declarations.clone())],
            };
            let response = client.generate(model, &request).await?;
            let Some(content) = response.candidates.into_iter().next().and_then(|c| c.content)
            else {
                warn!("model returned no content");
                break;
            };

            let calls: Vec<_> = content.parts.iter().filter_map(|p| p.function_call.clone()).collect();
            let text: String = content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<Vec<_>>()
                .join("");
            contents.push(Content::model(content.parts));

            if calls.is_empty() {
                if markdown && !text.is_empty() {
                    MarkdownPrinter::default().print(&text);
                } else {
                    println!("{}", text);
                }
                return Ok(());
            }

            let mut response_parts = Vec::new();
            for call in calls {
                info!("model requested tool {} (step {})", call.name, step + 1);
                let value = match registry.execute(&call.name, &call.args).await {
                    Ok(value) => value,
                    Err(e) => {
                        warn!("tool {} failed: {e}", call.name);
                        json!({ "error": e.to_string() })
                    }
                };
                response_parts.push(Part::function_response(call.name, json!({ "result": value })));
            }
            contents.push(Content { role: Some("user".into()), parts: response_parts });
        }

        warn!("stopped after {MAX_STEPS} steps without a final answer");
        Ok(())
    }
}
