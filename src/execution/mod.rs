//! Secure remote code execution: safety gate, remote bridge, and result
//! classification behind a single `execute` entry point.
//!
//! Every failure mode is folded into the returned [`ExecutionResult`];
//! callers branch on `success` and never see an error cross this boundary.

pub mod classify;
pub mod remote;
pub mod safety;

use std::time::Instant;

use async_trait::async_trait;
use log::{error, info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::llm::GenerateResponse;
use self::remote::GeminiCodeRunner;

/// Transport failure talking to the remote execution service. Auth,
/// availability and timeout all collapse into this one shape; the caller's
/// only recourse is retry or report, so nothing finer is distinguished.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct RemoteServiceError(pub String);

/// Code the remote service generated or echoed as part of its answer.
#[derive(Debug, Clone, Serialize)]
pub struct CodeFragment {
    pub language: String,
    pub code: String,
}

/// Outcome record for one discrete execution step inside the sandbox.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeRecord {
    pub outcome: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    pub success: bool,
    pub output: String,
    pub error: String,
    pub execution_time_seconds: f64,
    pub submitted_code: String,
    pub generated_code: Vec<CodeFragment>,
    pub execution_outcomes: Vec<OutcomeRecord>,
}

impl ExecutionResult {
    fn failed(code: &str, error: impl Into<String>, elapsed: f64) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: error.into(),
            execution_time_seconds: elapsed,
            submitted_code: code.to_string(),
            generated_code: Vec::new(),
            execution_outcomes: Vec::new(),
        }
    }
}

/// Seam between the executor and the remote service, so tests can inject
/// canned transports instead of the live endpoint.
#[async_trait]
pub trait ExecutionBackend: Send + Sync {
    async fn run(&self, code: &str) -> Result<GenerateResponse, RemoteServiceError>;
}

const NOT_INITIALIZED: &str =
    "Code executor not initialized. Set PROJECT_ID and credentials before executing code.";

pub struct CodeExecutor {
    backend: Option<Box<dyn ExecutionBackend>>,
}

impl CodeExecutor {
    /// Builds the executor from config. Missing credentials leave it
    /// uninitialized rather than failing: every call then returns a
    /// failed result without touching the network.
    pub fn from_config(cfg: &Config) -> Self {
        match GeminiCodeRunner::from_config(cfg) {
            Ok(runner) => {
                info!("code executor ready (model: {})", runner.model());
                Self { backend: Some(Box::new(runner)) }
            }
            Err(e) => {
                warn!("code executor unavailable: {e}");
                Self { backend: None }
            }
        }
    }

    pub fn with_backend(backend: Box<dyn ExecutionBackend>) -> Self {
        Self { backend: Some(backend) }
    }

    pub fn uninitialized() -> Self {
        Self { backend: None }
    }

    pub fn is_ready(&self) -> bool {
        self.backend.is_some()
    }

    /// Validates, submits and classifies one code string. Elapsed time is
    /// measured around the remote call only, not the safety screen.
    pub async fn execute(&self, code: &str) -> ExecutionResult {
        let Some(backend) = &self.backend else {
            return ExecutionResult::failed(code, NOT_INITIALIZED, 0.0);
        };

        let verdict = safety::validate(code);
        if !verdict.is_safe {
            warn!("code execution blocked: {}", verdict.reason);
            return ExecutionResult::failed(
                code,
                format!("Code execution blocked for safety: {}", verdict.reason),
                0.0,
            );
        }

        info!("submitting code to the remote sandbox");
        let started = Instant::now();
        match backend.run(code).await {
            Ok(response) => {
                classify::classify(&response, code, started.elapsed().as_secs_f64())
            }
            Err(e) => {
                error!("remote code execution failed: {e}");
                ExecutionResult::failed(code, e.to_string(), started.elapsed().as_secs_f64())
            }
        }
    }
}
