//! Pre-submission safety screen for code strings.
//!
//! This is a heuristic filter, not a sandbox. Real isolation is the remote
//! execution service's job; the only purpose here is to reject obviously
//! adversarial submissions before paying for a network round trip.

#[derive(Debug, Clone)]
pub struct SafetyVerdict {
    pub is_safe: bool,
    pub reason: String,
}

/// Substrings whose presence blocks submission outright. Matched
/// case-insensitively against the lower-cased code.
const DENY_PATTERNS: &[&str] = &["__import__", "compile(", "exec(", "eval("];

pub fn validate(code: &str) -> SafetyVerdict {
    let lowered = code.to_lowercase();
    for pattern in DENY_PATTERNS {
        if lowered.contains(pattern) {
            return SafetyVerdict {
                is_safe: false,
                reason: format!("Potentially unsafe operation detected: {pattern}"),
            };
        }
    }
    SafetyVerdict { is_safe: true, reason: "Code appears safe for execution".into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_code_passes() {
        assert!(validate("print(2 + 2)").is_safe);
    }

    #[test]
    fn eval_is_rejected_case_insensitively() {
        let verdict = validate("x = EVAL('1+1')");
        assert!(!verdict.is_safe);
        assert!(verdict.reason.contains("eval("));
    }

    #[test]
    fn first_match_wins() {
        let verdict = validate("exec(compile('1', '<s>', 'eval'))");
        assert!(!verdict.is_safe);
        assert!(verdict.reason.contains("compile("));
    }
}
