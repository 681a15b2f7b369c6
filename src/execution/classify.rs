//! Derives one success/failure verdict from the heterogeneous sandbox
//! response (free text, generated code, explicit execution outcomes).

use crate::llm::GenerateResponse;

use super::{CodeFragment, ExecutionResult, OutcomeRecord};

/// Tag suffix marking a sandbox step that completed normally.
const OUTCOME_OK: &str = "OUTCOME_OK";

/// Failure wording used whenever classification, not transport, decides.
pub const EXECUTION_FAILED: &str = "Code execution failed or produced errors";

// Narrative text that merely mentions one of these classifies as failure.
// Known imprecision, kept as-is: intent cannot be recovered from text alone.
const ERROR_INDICATORS: &[&str] = &["error:", "exception:", "traceback", "failed"];

pub fn classify(response: &GenerateResponse, code: &str, elapsed: f64) -> ExecutionResult {
    let mut narrative = String::new();
    let mut generated_code = Vec::new();
    let mut outcomes = Vec::new();

    for candidate in &response.candidates {
        let Some(content) = &candidate.content else { continue };
        for part in &content.parts {
            if let Some(text) = &part.text {
                if !text.is_empty() {
                    narrative.push_str(text);
                    narrative.push('\n');
                }
            } else if let Some(fragment) = &part.executable_code {
                generated_code.push(CodeFragment {
                    language: fragment.language.clone(),
                    code: fragment.code.clone(),
                });
            } else if let Some(outcome) = &part.code_execution_result {
                outcomes.push(OutcomeRecord {
                    outcome: outcome.outcome.clone(),
                    output: outcome.output.clone(),
                });
            }
        }
    }

    // Outcome outputs trail the narrative, in encounter order.
    let mut combined = narrative;
    for outcome in &outcomes {
        if !outcome.output.is_empty() {
            combined.push_str(&outcome.output);
            combined.push('\n');
        }
    }

    let success = if !outcomes.is_empty() {
        outcomes.iter().any(|o| o.outcome.ends_with(OUTCOME_OK))
    } else if !combined.is_empty() {
        let lowered = combined.to_lowercase();
        !ERROR_INDICATORS.iter().any(|needle| lowered.contains(needle))
    } else {
        false
    };

    ExecutionResult {
        success,
        error: if success { String::new() } else { EXECUTION_FAILED.to_string() },
        output: combined.trim().to_string(),
        execution_time_seconds: elapsed,
        submitted_code: code.to_string(),
        generated_code,
        execution_outcomes: outcomes,
    }
}
