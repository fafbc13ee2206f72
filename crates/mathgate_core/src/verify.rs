//! Independent answer verification.
//!
//! Each check recomputes the result through a code path structurally
//! different from the solver's (Pascal's rule instead of the multiplicative
//! binomial, divisor enumeration instead of the sigma product, inclusion-
//! exclusion instead of convolution, finite differences instead of symbolic
//! second derivatives) and enforces the domain sanity bounds. An answer that
//! fails here never reaches the caller.

use crate::answer::{Answer, ExtremumKind};
use crate::config::Tolerances;
use crate::params::{AlgebraTarget, GeometryTarget, NumberTheoryOp, ProblemParams};
use crate::solve::poly_eval;

/// Verify `answer` against `params`. Returns `false` on any disagreement,
/// bound violation, or answer shape that does not belong to the category.
pub fn verify(params: &ProblemParams, answer: &Answer, tolerances: &Tolerances) -> bool {
    match (params, answer) {
        (
            ProblemParams::Combinatorics {
                group_a,
                group_b,
                cases,
            },
            Answer::Integer { value },
        ) => verify_combinatorics(*group_a, *group_b, cases, *value),
        (
            ProblemParams::Algebra {
                sum_of_squares,
                product,
                target: AlgebraTarget::SumSquared,
            },
            Answer::Integer { value },
        ) => {
            // Direct substitution: (S + P) + P rather than S + 2P.
            *value == (*sum_of_squares as i128 + *product as i128) + *product as i128
        }
        (
            ProblemParams::NumberTheory {
                n,
                op: NumberTheoryOp::DivisorSum,
            },
            Answer::Integer { value },
        ) => *value >= 1 && *value == divisor_sum_by_enumeration(*n),
        (
            ProblemParams::Geometry {
                radius,
                tangent,
                target: GeometryTarget::TangentPointDistance,
            },
            Answer::Real { value },
        ) => {
            let expected = radius.hypot(*tangent);
            *value > 0.0 && (value - expected).abs() <= tolerances.real_epsilon
        }
        (
            ProblemParams::Probability {
                num_dice,
                target_sum,
            },
            Answer::Rational { favorable, total },
        ) => verify_probability(*num_dice, *target_sum, *favorable, *total, tolerances),
        (ProblemParams::Calculus { coefficients }, Answer::Extrema { points }) => {
            verify_extrema(coefficients, points, tolerances)
        }
        // Answer shape does not match the category.
        _ => false,
    }
}

/// Binomial coefficient from Pascal's rule, walking only the first `k + 1`
/// entries of each row so large `n` with small `k` stays cheap. `None` when
/// the value leaves `i128` range.
fn binomial_pascal(n: u64, k: u64) -> Option<i128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k) as usize;
    let mut row: Vec<i128> = vec![0; k + 1];
    row[0] = 1;
    for _ in 0..n {
        for j in (1..=k).rev() {
            row[j] = row[j].checked_add(row[j - 1])?;
        }
    }
    Some(row[k])
}

fn verify_combinatorics(group_a: u64, group_b: u64, cases: &[(u64, u64)], value: i128) -> bool {
    if value < 0 {
        return false;
    }
    let mut recomputed: i128 = 0;
    for &(from_a, from_b) in cases {
        let product = binomial_pascal(group_a, from_a)
            .zip(binomial_pascal(group_b, from_b))
            .and_then(|(a, b)| a.checked_mul(b));
        recomputed = match product.and_then(|p| recomputed.checked_add(p)) {
            Some(sum) => sum,
            // The solver refuses overflowing counts, so no answer this
            // large can be legitimate.
            None => return false,
        };
    }
    value == recomputed
}

/// `σ(n)` by enumerating divisor pairs up to `√n`.
fn divisor_sum_by_enumeration(n: u64) -> i128 {
    if n == 0 {
        return 0;
    }
    let mut sum: i128 = 0;
    let mut d: u64 = 1;
    while d * d <= n {
        if n % d == 0 {
            sum += d as i128;
            let paired = n / d;
            if paired != d {
                sum += paired as i128;
            }
        }
        d += 1;
    }
    sum
}

/// Ways to roll `target` with `num_dice` dice, by inclusion-exclusion over
/// the compositions of `target` into parts of size 1..=6.
fn dice_sum_count_inclusion_exclusion(num_dice: u32, target: i64) -> u64 {
    let n = num_dice as i64;
    if target < n || target > 6 * n {
        return 0;
    }
    let mut count: i128 = 0;
    let mut k: i64 = 0;
    while 6 * k <= target - n {
        let term = binomial_signless(n as u64, k as u64)
            * binomial_signless((target - 6 * k - 1) as u64, (n - 1) as u64);
        if k % 2 == 0 {
            count += term;
        } else {
            count -= term;
        }
        k += 1;
    }
    count.max(0) as u64
}

fn binomial_signless(n: u64, k: u64) -> i128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: i128 = 1;
    for i in 0..k {
        result = result * (n - i) as i128 / (i + 1) as i128;
    }
    result
}

fn verify_probability(
    num_dice: u32,
    target_sum: i64,
    favorable: u64,
    total: u64,
    tolerances: &Tolerances,
) -> bool {
    if total != 6u64.pow(num_dice) {
        return false;
    }
    let value = favorable as f64 / total as f64;
    if !(0.0..=1.0).contains(&value) {
        return false;
    }
    let recomputed = dice_sum_count_inclusion_exclusion(num_dice, target_sum);
    let expected = recomputed as f64 / total as f64;
    (value - expected).abs() <= tolerances.probability_tolerance && favorable == recomputed
}

fn verify_extrema(
    coefficients: &[f64],
    points: &[crate::answer::Extremum],
    tolerances: &Tolerances,
) -> bool {
    if coefficients.len() != 4 || coefficients[0] == 0.0 {
        return false;
    }
    let (a, b, c) = (coefficients[0], coefficients[1], coefficients[2]);

    // The number of critical points is fixed by the derivative's
    // discriminant, independent of what the solver reported.
    let discriminant = (2.0 * b) * (2.0 * b) - 4.0 * (3.0 * a) * c;
    let expected_points = if discriminant > 0.0 {
        2
    } else if discriminant == 0.0 {
        1
    } else {
        0
    };
    if points.len() != expected_points {
        return false;
    }

    let h = 1e-4;
    for point in points {
        let band = tolerances.real_epsilon * (1.0 + point.x.abs()).powi(2);

        // Direct substitution into f'(x) = 3a x^2 + 2b x + c.
        let slope = 3.0 * a * point.x * point.x + 2.0 * b * point.x + c;
        if slope.abs() > band {
            return false;
        }

        // Reported value must be f(x).
        if (poly_eval(coefficients, point.x) - point.y).abs()
            > tolerances.real_epsilon * (1.0 + point.y.abs())
        {
            return false;
        }

        // Curvature from a central second difference of f itself; for a
        // cubic the third-order terms cancel, so this is exact up to
        // rounding.
        let curvature = (poly_eval(coefficients, point.x + h) - 2.0 * poly_eval(coefficients, point.x)
            + poly_eval(coefficients, point.x - h))
            / (h * h);
        let zero_band = tolerances.real_epsilon * (1.0 + point.x.abs());
        let consistent = match point.kind {
            ExtremumKind::LocalMax => curvature < zero_band,
            ExtremumKind::LocalMin => curvature > -zero_band,
            ExtremumKind::Inconclusive => curvature.abs() <= zero_band,
        };
        if !consistent {
            return false;
        }
    }
    true
}
