//! The five-stage solving pipeline.
//!
//! Route → [skip | classify → extract] → solve → verify → explain, strictly
//! in that order, synchronously, with no retries and no I/O. Any stage may
//! short-circuit to a terminal STOP; no stage catches or downgrades another
//! stage's stop. The caller always receives either a verified answer with an
//! explanation, or an explicit STOP with a named reason — never a guess.

use crate::answer::Answer;
use crate::category::Category;
use crate::classify::classify;
use crate::config::Tolerances;
use crate::error::{Stop, StopReason};
use crate::explain::explain;
use crate::extract::extract;
use crate::gate::{route, Route};
use crate::params::{ProblemInput, ProblemParams};
use crate::solve::solve;
use crate::verify::verify;
use serde::Serialize;
use tracing::{debug, info};

/// Terminal pipeline outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Pass,
    Stop,
}

/// The unit returned to the caller: one immutable record per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveReport {
    pub outcome: Outcome,
    pub route: Route,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<Answer>,
    pub verified: bool,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<StopReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_detail: Option<String>,
}

impl SolveReport {
    /// Build the report for a request stopped with `stop`. Also the form for
    /// requests refused by a front end before the pipeline runs, e.g. a
    /// structured record that fails its field contract at deserialization.
    pub fn stopped(route: Route, category: Option<Category>, stop: Stop) -> Self {
        Self {
            outcome: Outcome::Stop,
            route,
            category,
            answer: None,
            verified: false,
            explanation: String::new(),
            stop_reason: Some(stop.reason),
            stop_detail: Some(stop.detail),
        }
    }
}

/// Deterministic problem-solving pipeline.
///
/// Holds only the numeric tolerances; no state is carried between requests,
/// so one instance may serve any number of independent calls.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    tolerances: Tolerances,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerances(tolerances: Tolerances) -> Self {
        Self { tolerances }
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Run one request through the full pipeline.
    pub fn solve(&self, input: ProblemInput) -> SolveReport {
        let decision = route(&input);
        info!(route = %decision.route, "pipeline request");

        let params: ProblemParams = match (decision.route, input) {
            (Route::Untrusted, _) => {
                return SolveReport::stopped(Route::Untrusted, None, Stop::untrusted(decision.reason));
            }
            (Route::Structured, ProblemInput::Structured(params)) => params,
            (Route::Patternable, ProblemInput::Raw { raw }) => {
                let classification = classify(&raw);
                // Patternable implies a nonzero score, so a category exists.
                let Some(category) = classification.category else {
                    return SolveReport::stopped(
                        Route::Patternable,
                        None,
                        Stop::untrusted("classifier returned no category"),
                    );
                };
                debug!(
                    category = %category,
                    confidence = classification.confidence,
                    is_tie = classification.is_tie,
                    "classified"
                );
                match extract(category, &raw) {
                    Ok(params) => params,
                    Err(stop) => {
                        return SolveReport::stopped(Route::Patternable, Some(category), stop);
                    }
                }
            }
            // The gate derives its decision from the input shape, so these
            // combinations cannot occur.
            (mismatched, _) => {
                return SolveReport::stopped(
                    mismatched,
                    None,
                    Stop::untrusted("route does not match input shape"),
                );
            }
        };

        let category = params.category();
        let answer: Answer = match solve(&params, &self.tolerances) {
            Ok(answer) => answer,
            Err(stop) => return SolveReport::stopped(decision.route, Some(category), stop),
        };
        debug!(category = %category, answer = %answer, "solved");

        if !verify(&params, &answer, &self.tolerances) {
            return SolveReport::stopped(
                decision.route,
                Some(category),
                Stop::verify("independent recomputation disagreed or a bound failed"),
            );
        }

        let explanation = explain(&params, &answer);
        SolveReport {
            outcome: Outcome::Pass,
            route: decision.route,
            category: Some(category),
            answer: Some(answer),
            verified: true,
            explanation,
            stop_reason: None,
            stop_detail: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::NumberTheoryOp;

    #[test]
    fn untrusted_input_stops_before_any_stage() {
        let report = Pipeline::new().solve(ProblemInput::raw("Solve it"));
        assert_eq!(report.outcome, Outcome::Stop);
        assert_eq!(report.stop_reason, Some(StopReason::UntrustedInput));
        assert_eq!(report.category, None);
        assert!(report.answer.is_none());
        assert!(!report.verified);
    }

    #[test]
    fn structured_input_bypasses_extraction() {
        let report = Pipeline::new().solve(ProblemInput::Structured(
            ProblemParams::NumberTheory {
                n: 360,
                op: NumberTheoryOp::DivisorSum,
            },
        ));
        assert_eq!(report.outcome, Outcome::Pass);
        assert_eq!(report.route, Route::Structured);
        assert_eq!(report.answer, Some(Answer::Integer { value: 1170 }));
        assert!(report.verified);
    }

    #[test]
    fn patternable_text_with_missing_fields_is_extract_fail() {
        // Classifies as combinatorics but lacks the committee size.
        let report = Pipeline::new().solve(ProblemInput::raw("choose from 6 men and 4 women"));
        assert_eq!(report.outcome, Outcome::Stop);
        assert_eq!(report.stop_reason, Some(StopReason::ExtractFail));
        assert_eq!(report.category, Some(Category::Combinatorics));
    }

    #[test]
    fn structured_domain_violation_is_solve_fail() {
        let report = Pipeline::new().solve(ProblemInput::Structured(
            ProblemParams::Probability {
                num_dice: 0,
                target_sum: 5,
            },
        ));
        assert_eq!(report.outcome, Outcome::Stop);
        assert_eq!(report.stop_reason, Some(StopReason::SolveFail));
    }

    #[test]
    fn pass_reports_never_carry_a_stop_reason() {
        let report =
            Pipeline::new().solve(ProblemInput::raw("sum of all positive divisors of 360"));
        assert_eq!(report.outcome, Outcome::Pass);
        assert_eq!(report.stop_reason, None);
        assert_eq!(report.stop_detail, None);
        assert!(!report.explanation.is_empty());
    }

    #[test]
    fn report_serializes_flat() {
        let report = Pipeline::new().solve(ProblemInput::raw("Solve it"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"], "STOP");
        assert_eq!(json["stop_reason"], "UNTRUSTED_INPUT");
        assert!(json.get("answer").is_none());
    }
}
