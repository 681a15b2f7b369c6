//! Chart handler: runs the chart pipeline and reports the outcome.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;

use crate::chart::ChartService;
use crate::config::Config;

pub async fn run(prompt: &str) -> Result<()> {
    let cfg = Config::load();
    let service = ChartService::from_config(&cfg);
    let outcome = service.generate(prompt).await;

    if !outcome.success {
        bail!("{}", outcome.error.unwrap_or(outcome.message));
    }

    println!("{}", outcome.message.green());
    if let Some(png) = &outcome.png_path {
        println!("PNG: {png}");
    }
    if let Some(html) = &outcome.html_path {
        println!("HTML: {html}");
    }
    if let Some(summary) = &outcome.summary_path {
        println!("Summary: {summary}");
    }
    println!("Data points: {}", outcome.data_points);
    Ok(())
}
