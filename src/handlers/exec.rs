//! Direct code execution through the sandbox bridge.

use anyhow::{bail, Result};

use crate::config::Config;
use crate::execution::CodeExecutor;

pub async fn run(code: &str) -> Result<()> {
    let cfg = Config::load();
    let executor = CodeExecutor::from_config(&cfg);
    let result = executor.execute(code).await;

    println!("Success: {}", result.success);
    println!("Execution time: {:.2}s", result.execution_time_seconds);

    for fragment in &result.generated_code {
        println!("--- generated code ({}) ---", fragment.language);
        println!("{}", fragment.code);
    }
    for outcome in &result.execution_outcomes {
        println!("[{}] {}", outcome.outcome, outcome.output);
    }

    if !result.success {
        if !result.output.is_empty() {
            println!("{}", result.output);
        }
        bail!("{}", result.error);
    }

    if !result.output.is_empty() {
        println!("{}", result.output);
    }
    Ok(())
}
