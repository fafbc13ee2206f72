//! Deterministic per-category solving.
//!
//! Every function here is a pure computation over the typed parameter
//! record; the raw problem text is not reachable from any signature in this
//! module. Domain precondition violations are explicit SOLVE_FAIL stops,
//! never silently coerced values.

use crate::answer::{Answer, Extremum, ExtremumKind};
use crate::config::Tolerances;
use crate::error::Stop;
use crate::params::{AlgebraTarget, GeometryTarget, NumberTheoryOp, ProblemParams};

/// Enumeration budget: 6^20 still fits comfortably in u64 counting, and no
/// supported problem statement goes near it.
const MAX_DICE: u32 = 20;

/// Solve the problem described by `params`.
pub fn solve(params: &ProblemParams, tolerances: &Tolerances) -> Result<Answer, Stop> {
    match params {
        ProblemParams::Combinatorics {
            group_a,
            group_b,
            cases,
        } => solve_combinatorics(*group_a, *group_b, cases),
        ProblemParams::Algebra {
            sum_of_squares,
            product,
            target,
        } => solve_algebra(*sum_of_squares, *product, *target),
        ProblemParams::NumberTheory { n, op } => solve_number_theory(*n, *op),
        ProblemParams::Geometry {
            radius,
            tangent,
            target,
        } => solve_geometry(*radius, *tangent, *target),
        ProblemParams::Probability {
            num_dice,
            target_sum,
        } => solve_probability(*num_dice, *target_sum),
        ProblemParams::Calculus { coefficients } => solve_calculus(coefficients, tolerances),
    }
}

/// Binomial coefficient via the multiplicative formula.
/// `C(n, k) = 0` when `k > n`; `None` when the value leaves `i128` range.
pub fn binomial(n: u64, k: u64) -> Option<i128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: i128 = 1;
    for i in 0..k {
        result = result.checked_mul((n - i) as i128)? / (i + 1) as i128;
    }
    Some(result)
}

fn solve_combinatorics(group_a: u64, group_b: u64, cases: &[(u64, u64)]) -> Result<Answer, Stop> {
    if cases.is_empty() {
        return Err(Stop::solve("combinatorics: empty case list"));
    }
    let mut total: i128 = 0;
    for &(from_a, from_b) in cases {
        total = binomial(group_a, from_a)
            .zip(binomial(group_b, from_b))
            .and_then(|(a, b)| a.checked_mul(b))
            .and_then(|product| total.checked_add(product))
            .ok_or_else(|| {
                Stop::solve("combinatorics: count exceeds the supported integer range")
            })?;
    }
    Ok(Answer::Integer { value: total })
}

fn solve_algebra(
    sum_of_squares: i64,
    product: i64,
    target: AlgebraTarget,
) -> Result<Answer, Stop> {
    if sum_of_squares < 0 {
        return Err(Stop::solve("algebra: x^2 + y^2 cannot be negative"));
    }
    match target {
        // (x + y)^2 = (x^2 + y^2) + 2xy
        AlgebraTarget::SumSquared => Ok(Answer::Integer {
            value: sum_of_squares as i128 + 2 * product as i128,
        }),
    }
}

/// Prime factorization by trial division: `(prime, exponent)` pairs.
pub fn factorize(n: u64) -> Vec<(u64, u32)> {
    let mut n = n;
    let mut factors = Vec::new();
    let mut p: u64 = 2;
    while p * p <= n {
        if n % p == 0 {
            let mut exponent = 0;
            while n % p == 0 {
                n /= p;
                exponent += 1;
            }
            factors.push((p, exponent));
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push((n, 1));
    }
    factors
}

fn solve_number_theory(n: u64, op: NumberTheoryOp) -> Result<Answer, Stop> {
    if n == 0 {
        return Err(Stop::solve("number_theory: n must be positive"));
    }
    match op {
        NumberTheoryOp::DivisorSum => {
            // σ(n) = Π (p^(e+1) − 1) / (p − 1); σ(1) = 1.
            let mut sigma: i128 = 1;
            for (p, e) in factorize(n) {
                let p = p as i128;
                sigma *= (p.pow(e + 1) - 1) / (p - 1);
            }
            Ok(Answer::Integer { value: sigma })
        }
    }
}

fn solve_geometry(radius: f64, tangent: f64, target: GeometryTarget) -> Result<Answer, Stop> {
    if !(radius > 0.0) || !(tangent > 0.0) {
        return Err(Stop::solve(
            "geometry: radius and tangent length must be positive",
        ));
    }
    match target {
        // The radius meets the tangent at a right angle, so the distance to
        // the external point is the hypotenuse.
        GeometryTarget::TangentPointDistance => Ok(Answer::Real {
            value: (radius * radius + tangent * tangent).sqrt(),
        }),
    }
}

/// Count outcomes of `num_dice` six-sided dice by sum, via repeated
/// convolution of the single-die distribution.
pub fn dice_sum_counts(num_dice: u32) -> Vec<u64> {
    let mut counts: Vec<u64> = vec![1];
    for _ in 0..num_dice {
        let mut next = vec![0u64; counts.len() + 5];
        for (sum, &ways) in counts.iter().enumerate() {
            for face in 0..6 {
                next[sum + face] += ways;
            }
        }
        counts = next;
    }
    counts
}

fn solve_probability(num_dice: u32, target_sum: i64) -> Result<Answer, Stop> {
    if num_dice == 0 {
        return Err(Stop::solve("probability: need at least one die"));
    }
    if num_dice > MAX_DICE {
        return Err(Stop::solve("probability: dice count exceeds enumeration budget"));
    }

    // counts[i] = ways to roll sum (num_dice + i).
    let counts = dice_sum_counts(num_dice);
    let min_sum = num_dice as i64;
    let favorable = if target_sum < min_sum || target_sum > 6 * min_sum {
        0
    } else {
        counts[(target_sum - min_sum) as usize]
    };
    let total = 6u64.pow(num_dice);
    Ok(Answer::Rational { favorable, total })
}

/// Evaluate a polynomial (highest degree first) at `x` by Horner's rule.
pub fn poly_eval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Differentiate a polynomial given highest-first coefficients.
pub fn poly_derivative(coefficients: &[f64]) -> Vec<f64> {
    let degree = coefficients.len().saturating_sub(1);
    coefficients
        .iter()
        .take(degree)
        .enumerate()
        .map(|(i, &c)| c * (degree - i) as f64)
        .collect()
}

fn solve_calculus(coefficients: &[f64], tolerances: &Tolerances) -> Result<Answer, Stop> {
    if coefficients.len() != 4 || coefficients[0] == 0.0 {
        return Err(Stop::solve("calculus: only cubic polynomials are supported"));
    }

    // f'(x) = 3a x^2 + 2b x + c; real roots only.
    let derivative = poly_derivative(coefficients);
    let (da, db, dc) = (derivative[0], derivative[1], derivative[2]);
    let discriminant = db * db - 4.0 * da * dc;
    if discriminant < 0.0 {
        // No real critical points: a strictly monotonic cubic.
        return Ok(Answer::Extrema { points: Vec::new() });
    }

    let sqrt_disc = discriminant.sqrt();
    let mut roots = vec![(-db - sqrt_disc) / (2.0 * da), (-db + sqrt_disc) / (2.0 * da)];
    roots.sort_by(f64::total_cmp);
    if discriminant == 0.0 {
        roots.truncate(1);
    }

    // f''(x) = 6a x + 2b classifies each critical point.
    let second = poly_derivative(&derivative);
    let points = roots
        .into_iter()
        .map(|x| {
            let curvature = poly_eval(&second, x);
            let kind = if curvature.abs() <= tolerances.derivative_zero_epsilon {
                ExtremumKind::Inconclusive
            } else if curvature < 0.0 {
                ExtremumKind::LocalMax
            } else {
                ExtremumKind::LocalMin
            };
            Extremum {
                kind,
                x,
                y: poly_eval(coefficients, x),
            }
        })
        .collect();
    Ok(Answer::Extrema { points })
}
