//! End-to-end pipeline scenarios.
//!
//! Each case runs the whole pipeline from raw text (or a structured record)
//! and checks the verified answer, plus the behavioral properties the
//! pipeline guarantees: determinism, parameter sensitivity, verifier
//! soundness, unknown-category refusal, and tie detection.

use mathgate_core::{
    classify, Answer, Category, ExtremumKind, Outcome, Pipeline, ProblemInput, ProblemParams,
    Route, StopReason,
};

fn solve_raw(text: &str) -> mathgate_core::SolveReport {
    Pipeline::new().solve(ProblemInput::raw(text))
}

#[test]
fn committee_selection() {
    let report = solve_raw("6 men and 4 women, committee of 5, at least 3 men and 1 woman");
    assert_eq!(report.outcome, Outcome::Pass);
    assert_eq!(report.category, Some(Category::Combinatorics));
    assert_eq!(report.answer, Some(Answer::Integer { value: 180 }));
    assert!(report.verified);
    assert!(report.explanation.contains("180"));
}

#[test]
fn algebra_identity() {
    let report = solve_raw("x² + y² = 25 and xy = 12, find (x+y)²");
    assert_eq!(report.outcome, Outcome::Pass);
    assert_eq!(report.category, Some(Category::Algebra));
    assert_eq!(report.answer, Some(Answer::Integer { value: 49 }));
}

#[test]
fn divisor_sum() {
    let report = solve_raw("sum of all positive divisors of 360");
    assert_eq!(report.outcome, Outcome::Pass);
    assert_eq!(report.category, Some(Category::NumberTheory));
    assert_eq!(report.answer, Some(Answer::Integer { value: 1170 }));
}

#[test]
fn tangent_distance() {
    let report = solve_raw("circle radius 10, tangent length 24, find distance OP");
    assert_eq!(report.outcome, Outcome::Pass);
    assert_eq!(report.category, Some(Category::Geometry));
    let Some(Answer::Real { value }) = report.answer else {
        panic!("expected real answer, got {:?}", report.answer);
    };
    assert!((value - 26.0).abs() < 1e-9);
}

#[test]
fn three_dice_probability() {
    let report = solve_raw("three dice rolled, probability sum = 10");
    assert_eq!(report.outcome, Outcome::Pass);
    assert_eq!(report.category, Some(Category::Probability));
    assert_eq!(
        report.answer,
        Some(Answer::Rational {
            favorable: 27,
            total: 216
        })
    );
    let value = report.answer.unwrap().as_f64().unwrap();
    assert!((value - 0.125).abs() < 1e-3);
}

#[test]
fn cubic_local_extrema() {
    let report = solve_raw("f(x) = x³ − 6x² + 9x + 1, find local extrema");
    assert_eq!(report.outcome, Outcome::Pass);
    assert_eq!(report.category, Some(Category::Calculus));
    let Some(Answer::Extrema { points }) = report.answer else {
        panic!("expected extrema");
    };
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].kind, ExtremumKind::LocalMax);
    assert!((points[0].x - 1.0).abs() < 1e-9 && (points[0].y - 5.0).abs() < 1e-9);
    assert_eq!(points[1].kind, ExtremumKind::LocalMin);
    assert!((points[1].x - 3.0).abs() < 1e-9 && (points[1].y - 1.0).abs() < 1e-9);
}

#[test]
fn oversized_counting_problem_stops_instead_of_wrapping() {
    // The total is C(200,100), far outside i128; the pipeline must refuse
    // rather than return a wrapped value.
    let report = solve_raw("100 men and 100 women, committee of 100");
    assert_eq!(report.outcome, Outcome::Stop);
    assert_eq!(report.stop_reason, Some(StopReason::SolveFail));
    assert!(report.answer.is_none());
}

#[test]
fn unrecognized_input_is_refused() {
    let report = solve_raw("Solve it");
    assert_eq!(report.outcome, Outcome::Stop);
    assert_eq!(report.route, Route::Untrusted);
    assert_eq!(report.stop_reason, Some(StopReason::UntrustedInput));
    assert!(report.answer.is_none());
}

#[test]
fn repeated_calls_are_bit_identical() {
    let pipeline = Pipeline::new();
    let texts = [
        "6 men and 4 women, committee of 5, at least 3 men and 1 woman",
        "sum of all positive divisors of 360",
        "three dice rolled, probability sum = 10",
        "Solve it",
    ];
    for text in texts {
        let first = pipeline.solve(ProblemInput::raw(text));
        for _ in 0..3 {
            let again = pipeline.solve(ProblemInput::raw(text));
            assert_eq!(again, first, "non-deterministic result for {:?}", text);
        }
    }
}

#[test]
fn answers_track_parameters_not_hardcoded_values() {
    // Same shapes, different numbers, different answers.
    let a = solve_raw("6 men and 4 women, committee of 5, at least 3 men and 1 woman");
    let b = solve_raw("10 men and 8 women, committee of 7, at least 4 men and 3 women");
    assert_eq!(a.outcome, Outcome::Pass);
    assert_eq!(b.outcome, Outcome::Pass);
    assert_ne!(a.answer, b.answer);

    let a = solve_raw("sum of all positive divisors of 360");
    let b = solve_raw("sum of all positive divisors of 361");
    assert_ne!(a.answer, b.answer);

    let a = solve_raw("x^2 + y^2 = 25 and xy = 12, find (x+y)^2");
    let b = solve_raw("x^2 + y^2 = 25 and xy = 10, find (x+y)^2");
    assert_eq!(b.answer, Some(Answer::Integer { value: 45 }));
    assert_ne!(a.answer, b.answer);

    let a = solve_raw("circle radius 10, tangent length 24, find distance OP");
    let b = solve_raw("circle radius 3, tangent length 4, find distance OP");
    let (Some(Answer::Real { value: va }), Some(Answer::Real { value: vb })) =
        (a.answer, b.answer)
    else {
        panic!("expected real answers");
    };
    assert!((vb - 5.0).abs() < 1e-9);
    assert!((va - vb).abs() > 1.0);
}

#[test]
fn corrupted_answers_never_pass_verification() {
    use mathgate_core::verify::verify;
    use mathgate_core::{AlgebraTarget, GeometryTarget, NumberTheoryOp, Tolerances};

    let tol = Tolerances::default();
    let cases: Vec<(ProblemParams, Answer)> = vec![
        (
            ProblemParams::Combinatorics {
                group_a: 6,
                group_b: 4,
                cases: vec![(3, 2), (4, 1)],
            },
            Answer::Integer { value: 179 },
        ),
        (
            ProblemParams::Algebra {
                sum_of_squares: 25,
                product: 12,
                target: AlgebraTarget::SumSquared,
            },
            Answer::Integer { value: 50 },
        ),
        (
            ProblemParams::NumberTheory {
                n: 360,
                op: NumberTheoryOp::DivisorSum,
            },
            Answer::Integer { value: 1171 },
        ),
        (
            ProblemParams::Geometry {
                radius: 10.0,
                tangent: 24.0,
                target: GeometryTarget::TangentPointDistance,
            },
            Answer::Real { value: 25.0 },
        ),
        (
            ProblemParams::Probability {
                num_dice: 3,
                target_sum: 10,
            },
            Answer::Rational {
                favorable: 26,
                total: 216,
            },
        ),
        (
            ProblemParams::Calculus {
                coefficients: vec![1.0, -6.0, 9.0, 1.0],
            },
            Answer::Extrema { points: Vec::new() },
        ),
    ];
    for (params, corrupted) in cases {
        assert!(
            !verify(&params, &corrupted, &tol),
            "corrupted answer passed for {:?}",
            params.category()
        );
    }
}

#[test]
fn zero_score_text_is_always_unknown() {
    for text in ["Solve it", "hello world", "", "42"] {
        let c = classify(text);
        assert_eq!(c.category, None, "text {:?}", text);
        assert_eq!(c.confidence, 0);
        assert!(!c.is_tie);
    }
}

#[test]
fn engineered_tie_reports_both_categories() {
    let c = classify("the prime circle");
    assert!(c.is_tie);
    assert_eq!(
        c.matched_categories,
        vec![Category::NumberTheory, Category::Geometry]
    );
    // First-declared category wins the tie.
    assert_eq!(c.category, Some(Category::NumberTheory));
}

#[test]
fn structured_and_patternable_paths_agree() {
    let pipeline = Pipeline::new();
    let from_text =
        pipeline.solve(ProblemInput::raw("sum of all positive divisors of 360"));
    let from_structured = pipeline.solve(ProblemInput::Structured(
        ProblemParams::NumberTheory {
            n: 360,
            op: mathgate_core::NumberTheoryOp::DivisorSum,
        },
    ));
    assert_eq!(from_text.answer, from_structured.answer);
    assert_eq!(from_text.outcome, Outcome::Pass);
    assert_eq!(from_structured.route, Route::Structured);
    assert_eq!(from_text.route, Route::Patternable);
}
