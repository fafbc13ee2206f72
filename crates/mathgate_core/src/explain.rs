//! Fixed-template explanations for verified answers.
//!
//! Pure formatting. A parameter/answer pairing that no template covers
//! degrades to a generic fallback string — an explanation problem must never
//! suppress a verified answer.

use crate::answer::Answer;
use crate::params::{AlgebraTarget, GeometryTarget, NumberTheoryOp, ProblemParams};

/// Fallback when no template matches the result shape.
const FALLBACK: &str = "The answer was computed and independently verified.";

/// Render a natural-language justification for a verified answer.
pub fn explain(params: &ProblemParams, answer: &Answer) -> String {
    render(params, answer).unwrap_or_else(|| FALLBACK.to_string())
}

fn render(params: &ProblemParams, answer: &Answer) -> Option<String> {
    match (params, answer) {
        (
            ProblemParams::Combinatorics {
                group_a,
                group_b,
                cases,
            },
            Answer::Integer { value },
        ) => {
            let terms: Vec<String> = cases
                .iter()
                .map(|(from_a, from_b)| {
                    format!("C({},{}) × C({},{})", group_a, from_a, group_b, from_b)
                })
                .collect();
            Some(format!(
                "Sum over the valid selection splits, choosing independently from each group: {} = {}.",
                terms.join(" + "),
                value
            ))
        }
        (
            ProblemParams::Algebra {
                sum_of_squares,
                product,
                target: AlgebraTarget::SumSquared,
            },
            Answer::Integer { value },
        ) => Some(format!(
            "(x + y)² = (x² + y²) + 2xy = {} + 2·{} = {}.",
            sum_of_squares, product, value
        )),
        (
            ProblemParams::NumberTheory {
                n,
                op: NumberTheoryOp::DivisorSum,
            },
            Answer::Integer { value },
        ) => Some(format!(
            "Factor {} into primes and apply σ(n) = Π (pᵉ⁺¹ − 1)/(p − 1): σ({}) = {}.",
            n, n, value
        )),
        (
            ProblemParams::Geometry {
                radius,
                tangent,
                target: GeometryTarget::TangentPointDistance,
            },
            Answer::Real { value },
        ) => Some(format!(
            "The radius meets the tangent at a right angle, so OP = √({}² + {}²) = {}.",
            radius, tangent, value
        )),
        (
            ProblemParams::Probability {
                num_dice,
                target_sum,
            },
            Answer::Rational { favorable, total },
        ) => Some(format!(
            "Of the {} equally likely outcomes of {} dice, {} sum to {}: probability {}.",
            total, num_dice, favorable, target_sum, answer
        )),
        (ProblemParams::Calculus { coefficients }, Answer::Extrema { points }) => {
            let poly = format_cubic(coefficients)?;
            if points.is_empty() {
                return Some(format!(
                    "f(x) = {} has no real critical points; it is strictly monotonic.",
                    poly
                ));
            }
            Some(format!(
                "Setting f'(x) = 0 for f(x) = {} and classifying by the sign of f''(x): {}.",
                poly, answer
            ))
        }
        _ => None,
    }
}

fn format_cubic(coefficients: &[f64]) -> Option<String> {
    if coefficients.len() != 4 {
        return None;
    }
    let mut out = String::new();
    for (i, &c) in coefficients.iter().enumerate() {
        let degree = 3 - i;
        if c == 0.0 {
            continue;
        }
        let sign = if out.is_empty() {
            if c < 0.0 { "-" } else { "" }
        } else if c < 0.0 {
            " - "
        } else {
            " + "
        };
        let magnitude = c.abs();
        let coef = if magnitude == 1.0 && degree > 0 {
            String::new()
        } else {
            format!("{}", magnitude)
        };
        let var = match degree {
            0 => String::new(),
            1 => "x".to_string(),
            d => format!("x^{}", d),
        };
        out.push_str(&format!("{}{}{}", sign, coef, var));
    }
    if out.is_empty() {
        out.push('0');
    }
    Some(out)
}
