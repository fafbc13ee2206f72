//! Request resolution: turn caller-supplied text or JSON into a pipeline
//! input.
//!
//! A structured record that fails its field contract is refused with the
//! same named-STOP report the pipeline itself produces, never a bare parse
//! error: EXTRACT_FAIL when the record names a recognized category,
//! UNTRUSTED_INPUT otherwise.

use mathgate_core::{Category, ProblemInput, Route, SolveReport, Stop};

/// Outcome of resolving one request.
pub enum Resolved {
    /// A well-formed input, ready for the pipeline.
    Input(ProblemInput),
    /// A malformed structured record, refused up front.
    Refused(SolveReport),
}

pub fn from_text(text: impl Into<String>) -> Resolved {
    Resolved::Input(ProblemInput::raw(text))
}

pub fn from_structured_json(json: &str) -> Resolved {
    match serde_json::from_str::<ProblemInput>(json) {
        Ok(input) => Resolved::Input(input),
        Err(err) => refuse_structured(json, &err),
    }
}

/// A file may hold either a JSON request or plain problem text.
pub fn from_file_contents(contents: &str) -> Resolved {
    let trimmed = contents.trim();
    if trimmed.starts_with('{') {
        from_structured_json(trimmed)
    } else {
        from_text(trimmed.to_string())
    }
}

fn refuse_structured(json: &str, err: &serde_json::Error) -> Resolved {
    let category = serde_json::from_str::<serde_json::Value>(json)
        .ok()
        .and_then(|value| {
            value
                .get("category")
                .and_then(|c| c.as_str())
                .and_then(Category::parse)
        });
    let report = match category {
        // The record reached a known category but broke its field contract.
        Some(category) => SolveReport::stopped(
            Route::Structured,
            Some(category),
            Stop::extract(format!("structured record invalid: {}", err)),
        ),
        None => SolveReport::stopped(
            Route::Untrusted,
            None,
            Stop::untrusted(format!("structured record unrecognized: {}", err)),
        ),
    };
    Resolved::Refused(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathgate_core::{Outcome, StopReason};

    #[test]
    fn valid_structured_record_resolves_to_an_input() {
        let resolved =
            from_structured_json(r#"{"category":"number_theory","n":360,"op":"divisor_sum"}"#);
        assert!(matches!(resolved, Resolved::Input(ProblemInput::Structured(_))));
    }

    #[test]
    fn missing_field_with_known_category_is_an_extract_fail_stop() {
        let Resolved::Refused(report) =
            from_structured_json(r#"{"category":"number_theory","n":360}"#)
        else {
            panic!("expected a refusal");
        };
        assert_eq!(report.outcome, Outcome::Stop);
        assert_eq!(report.stop_reason, Some(StopReason::ExtractFail));
        assert_eq!(report.category, Some(Category::NumberTheory));
        assert_eq!(report.route, Route::Structured);
    }

    #[test]
    fn unknown_category_tag_is_an_untrusted_input_stop() {
        let Resolved::Refused(report) =
            from_structured_json(r#"{"category":"alchemy","n":360}"#)
        else {
            panic!("expected a refusal");
        };
        assert_eq!(report.stop_reason, Some(StopReason::UntrustedInput));
        assert_eq!(report.category, None);
        assert_eq!(report.route, Route::Untrusted);
    }

    #[test]
    fn json_without_a_category_tag_is_untrusted() {
        let Resolved::Refused(report) = from_structured_json(r#"{"n":360}"#) else {
            panic!("expected a refusal");
        };
        assert_eq!(report.stop_reason, Some(StopReason::UntrustedInput));
    }

    #[test]
    fn file_contents_fall_back_to_raw_text() {
        let resolved = from_file_contents("sum of all positive divisors of 360\n");
        assert!(matches!(resolved, Resolved::Input(ProblemInput::Raw { .. })));
    }
}
