//! Domain Q&A handler backed by the workspace retrieval corpus.

use anyhow::Result;

use crate::config::Config;
use crate::printer::{MarkdownPrinter, TextPrinter};
use crate::rag::RagEngine;

pub struct AskHandler;

impl AskHandler {
    pub async fn run(query: &str, markdown: bool) -> Result<()> {
        let cfg = Config::load();
        let engine = RagEngine::connect(&cfg).await;
        let answer = engine.answer(query).await?;

        if markdown {
            MarkdownPrinter::default().print(&answer);
        } else {
            TextPrinter::from_config(&cfg).print(&answer);
        }
        Ok(())
    }
}
