//! Terminal stop reasons for the solving pipeline.
//!
//! Every failure is terminal: a stage that cannot proceed returns a [`Stop`]
//! and the pipeline surfaces it verbatim. Nothing downgrades a stop into a
//! guessed answer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named reason for a terminal STOP outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum StopReason {
    /// Input is neither structured nor patternable.
    #[serde(rename = "UNTRUSTED_INPUT")]
    #[error("UNTRUSTED_INPUT")]
    UntrustedInput,

    /// A required field's pattern did not match the problem text.
    #[serde(rename = "EXTRACT_FAIL")]
    #[error("EXTRACT_FAIL")]
    ExtractFail,

    /// Solver precondition violated (invalid domain value).
    #[serde(rename = "SOLVE_FAIL")]
    #[error("SOLVE_FAIL")]
    SolveFail,

    /// Independent recomputation disagreed, or a sanity bound failed.
    #[serde(rename = "VERIFY_FAIL")]
    #[error("VERIFY_FAIL")]
    VerifyFail,
}

impl StopReason {
    /// Stable numeric code for machine consumers.
    pub fn code(&self) -> i32 {
        match self {
            StopReason::UntrustedInput => 40,
            StopReason::ExtractFail => 41,
            StopReason::SolveFail => 42,
            StopReason::VerifyFail => 43,
        }
    }
}

/// Terminal stop carrying the named reason plus a human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}: {detail}")]
pub struct Stop {
    pub reason: StopReason,
    pub detail: String,
}

impl Stop {
    pub fn new(reason: StopReason, detail: impl Into<String>) -> Self {
        Self {
            reason,
            detail: detail.into(),
        }
    }

    pub fn untrusted(detail: impl Into<String>) -> Self {
        Self::new(StopReason::UntrustedInput, detail)
    }

    pub fn extract(detail: impl Into<String>) -> Self {
        Self::new(StopReason::ExtractFail, detail)
    }

    pub fn solve(detail: impl Into<String>) -> Self {
        Self::new(StopReason::SolveFail, detail)
    }

    pub fn verify(detail: impl Into<String>) -> Self {
        Self::new(StopReason::VerifyFail, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_reason_wire_form_is_screaming_snake() {
        let json = serde_json::to_string(&StopReason::UntrustedInput).unwrap();
        assert_eq!(json, "\"UNTRUSTED_INPUT\"");
        let back: StopReason = serde_json::from_str("\"EXTRACT_FAIL\"").unwrap();
        assert_eq!(back, StopReason::ExtractFail);
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            StopReason::UntrustedInput.code(),
            StopReason::ExtractFail.code(),
            StopReason::SolveFail.code(),
            StopReason::VerifyFail.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
