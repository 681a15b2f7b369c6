use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use evoq::execution::{CodeExecutor, ExecutionBackend, RemoteServiceError};
use evoq::llm::{Candidate, CodeExecutionResult, Content, ExecutableCode, GenerateResponse, Part};

struct StubBackend {
    response: GenerateResponse,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ExecutionBackend for StubBackend {
    async fn run(&self, _code: &str) -> std::result::Result<GenerateResponse, RemoteServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

struct FailingBackend {
    message: String,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ExecutionBackend for FailingBackend {
    async fn run(&self, _code: &str) -> std::result::Result<GenerateResponse, RemoteServiceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RemoteServiceError(self.message.clone()))
    }
}

fn outcome_part(tag: &str, output: &str) -> Part {
    Part {
        code_execution_result: Some(CodeExecutionResult { outcome: tag.into(), output: output.into() }),
        ..Default::default()
    }
}

fn code_part(language: &str, code: &str) -> Part {
    Part {
        executable_code: Some(ExecutableCode { language: language.into(), code: code.into() }),
        ..Default::default()
    }
}

fn response_with_parts(parts: Vec<Part>) -> GenerateResponse {
    GenerateResponse {
        candidates: vec![Candidate {
            content: Some(Content { role: Some("model".into()), parts }),
            finish_reason: None,
        }],
    }
}

fn stub_executor(response: GenerateResponse) -> (CodeExecutor, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let executor = CodeExecutor::with_backend(Box::new(StubBackend {
        response,
        calls: calls.clone(),
    }));
    (executor, calls)
}

#[tokio::test]
async fn eval_is_rejected_before_any_network_call() -> Result<()> {
    let (executor, calls) = stub_executor(response_with_parts(vec![Part::text("4\n")]));

    let result = executor.execute("eval('1+1')").await;

    assert!(!result.success);
    assert!(result.error.contains("Code execution blocked for safety"));
    assert!(result.error.contains("eval("));
    assert_eq!(result.output, "");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn deny_list_matches_case_insensitively() -> Result<()> {
    let (executor, calls) = stub_executor(response_with_parts(vec![Part::text("ok\n")]));

    for code in ["__IMPORT__('os')", "Compile('x', '<s>', 'single')", "EXEC('pass')"] {
        let result = executor.execute(code).await;
        assert!(!result.success, "expected rejection for {code}");
        assert!(result.error.contains("Potentially unsafe operation detected"));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn safe_code_submits_exactly_once() -> Result<()> {
    let (executor, calls) = stub_executor(response_with_parts(vec![Part::text("4\n")]));

    let result = executor.execute("print(2+2)").await;

    assert!(result.success);
    assert_eq!(result.output, "4");
    assert_eq!(result.error, "");
    assert_eq!(result.submitted_code, "print(2+2)");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn outcome_ok_tag_means_success() -> Result<()> {
    let (executor, _) = stub_executor(response_with_parts(vec![
        Part::text("Running the snippet.\n"),
        code_part("PYTHON", "print(42)"),
        outcome_part("OUTCOME_OK", "42\n"),
    ]));

    let result = executor.execute("print(42)").await;

    assert!(result.success);
    assert_eq!(result.error, "");
    assert!(result.output.contains("Running the snippet."));
    assert!(result.output.contains("42"));
    assert_eq!(result.generated_code.len(), 1);
    assert_eq!(result.generated_code[0].code, "print(42)");
    assert_eq!(result.execution_outcomes.len(), 1);
    Ok(())
}

#[tokio::test]
async fn failed_outcome_tag_means_failure() -> Result<()> {
    let (executor, _) = stub_executor(response_with_parts(vec![outcome_part(
        "languages.OUTCOME_FAILED",
        "Traceback (most recent call last): ...",
    )]));

    let result = executor.execute("print(1/0)").await;

    assert!(!result.success);
    assert_eq!(result.error, "Code execution failed or produced errors");
    assert!(result.output.contains("Traceback"));
    Ok(())
}

#[tokio::test]
async fn any_ok_outcome_wins_over_failed_ones() -> Result<()> {
    let (executor, _) = stub_executor(response_with_parts(vec![
        outcome_part("languages.OUTCOME_FAILED", ""),
        outcome_part("languages.OUTCOME_OK", "done\n"),
    ]));

    let result = executor.execute("print('done')").await;

    assert!(result.success);
    assert_eq!(result.execution_outcomes.len(), 2);
    Ok(())
}

#[tokio::test]
async fn error_indicator_in_text_classifies_as_failure() -> Result<()> {
    let (executor, _) = stub_executor(response_with_parts(vec![Part::text(
        "Error: name 'pdx' is not defined\n",
    )]));

    let result = executor.execute("print(pdx)").await;

    assert!(!result.success);
    assert_eq!(result.error, "Code execution failed or produced errors");
    // Partial output survives on the failure path
    assert!(result.output.contains("not defined"));
    Ok(())
}

#[tokio::test]
async fn clean_text_without_outcomes_is_a_success() -> Result<()> {
    let (executor, _) = stub_executor(response_with_parts(vec![Part::text(
        "Mean gold value: 2.31 g/t\n",
    )]));

    let result = executor.execute("print(df['gold'].mean())").await;

    assert!(result.success);
    assert_eq!(result.output, "Mean gold value: 2.31 g/t");
    Ok(())
}

#[tokio::test]
async fn empty_response_is_a_failure() -> Result<()> {
    let (executor, _) = stub_executor(GenerateResponse { candidates: vec![] });

    let result = executor.execute("print('quiet')").await;

    assert!(!result.success);
    assert_eq!(result.output, "");
    assert_eq!(result.error, "Code execution failed or produced errors");
    assert!(result.execution_time_seconds >= 0.0);
    Ok(())
}

#[tokio::test]
async fn transport_failure_carries_its_message() -> Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let executor = CodeExecutor::with_backend(Box::new(FailingBackend {
        message: "connection reset by peer".into(),
        calls: calls.clone(),
    }));

    let result = executor.execute("print('unreachable')").await;

    assert!(!result.success);
    assert_eq!(result.error, "connection reset by peer");
    assert_eq!(result.output, "");
    assert!(result.execution_time_seconds >= 0.0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn identical_submissions_classify_identically() -> Result<()> {
    let (executor, _) = stub_executor(response_with_parts(vec![
        Part::text("Histogram rendered.\n"),
        outcome_part("languages.OUTCOME_OK", "Chart saved as PNG: generated_charts/chart.png\n"),
    ]));

    let first = executor.execute("print('chart')").await;
    let second = executor.execute("print('chart')").await;

    assert_eq!(first.success, second.success);
    assert_eq!(first.output, second.output);
    Ok(())
}

#[tokio::test]
async fn narrative_precedes_outcome_output() -> Result<()> {
    let (executor, _) = stub_executor(response_with_parts(vec![
        Part::text("Running."),
        outcome_part("languages.OUTCOME_OK", "result line\n"),
    ]));

    let result = executor.execute("print('x')").await;

    assert_eq!(result.output, "Running.\nresult line");
    Ok(())
}

#[tokio::test]
async fn uninitialized_executor_fails_without_network() -> Result<()> {
    let executor = CodeExecutor::uninitialized();
    assert!(!executor.is_ready());

    let result = executor.execute("print('never sent')").await;

    assert!(!result.success);
    assert!(result.error.contains("not initialized"));
    assert_eq!(result.output, "");
    assert_eq!(result.execution_time_seconds, 0.0);
    Ok(())
}

#[tokio::test]
async fn timing_is_populated_on_the_success_path() -> Result<()> {
    let (executor, _) = stub_executor(response_with_parts(vec![Part::text("ok\n")]));

    let result = executor.execute("print('ok')").await;

    assert!(result.success);
    assert!(result.execution_time_seconds >= 0.0);
    Ok(())
}
