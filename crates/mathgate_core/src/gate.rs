//! Input gate: decide the processing route before any extraction runs.
//!
//! O(1)-ish heuristics only, no inference. The ordering is policy: a
//! structured record skips text parsing entirely, recognizable free text
//! goes through classification and extraction, and everything else is
//! refused outright. The system never best-effort-guesses on input it does
//! not recognize.

use crate::classify::classify;
use crate::params::ProblemInput;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Processing route for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Route {
    /// Caller supplied a typed parameter record; skip classify/extract.
    Structured,
    /// Free text with at least one recognized keyword; parse with rules.
    Patternable,
    /// Neither: refuse immediately.
    Untrusted,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Structured => write!(f, "STRUCTURED"),
            Route::Patternable => write!(f, "PATTERNABLE"),
            Route::Untrusted => write!(f, "UNTRUSTED"),
        }
    }
}

/// Routing decision with the reason it was taken.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDecision {
    pub route: Route,
    pub reason: String,
}

/// Decide the route for `input`.
pub fn route(input: &ProblemInput) -> RouteDecision {
    let decision = match input {
        ProblemInput::Structured(params) => RouteDecision {
            route: Route::Structured,
            reason: format!("typed {} record supplied by caller", params.category()),
        },
        ProblemInput::Raw { raw } => {
            if raw.trim().is_empty() {
                RouteDecision {
                    route: Route::Untrusted,
                    reason: "empty input".to_string(),
                }
            } else if classify(raw).confidence > 0 {
                RouteDecision {
                    route: Route::Patternable,
                    reason: "text matches at least one category keyword".to_string(),
                }
            } else {
                RouteDecision {
                    route: Route::Untrusted,
                    reason: "text matches no category keyword".to_string(),
                }
            }
        }
    };
    debug!(route = %decision.route, reason = %decision.reason, "gate decision");
    decision
}
