//! Typed problem parameters: the extractor/solver contract.
//!
//! One variant per category, holding exactly the fields that category's
//! solver consumes. The solver's signature accepts only this type — never
//! the raw text — so the "no hardcoding, no text peeking" contract is
//! enforced by the compiler rather than by review.

use crate::category::Category;
use serde::{Deserialize, Serialize};

/// Supported algebra target expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgebraTarget {
    /// `(x + y)^2`
    SumSquared,
}

/// Supported number-theory operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberTheoryOp {
    /// `σ(n)`, the sum of all positive divisors.
    DivisorSum,
}

/// Supported geometry target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryTarget {
    /// Distance from the circle's center to the external tangent point.
    TangentPointDistance,
}

/// Category-tagged parameter record. Produced once per request, either by
/// the extractor or directly by a structured caller; immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ProblemParams {
    /// Selection-split counting over two groups.
    /// `cases` holds the valid `(choose_from_a, choose_from_b)` splits.
    Combinatorics {
        group_a: u64,
        group_b: u64,
        cases: Vec<(u64, u64)>,
    },
    /// Known `x^2 + y^2` and `xy`, target expression to evaluate.
    Algebra {
        sum_of_squares: i64,
        product: i64,
        target: AlgebraTarget,
    },
    NumberTheory {
        n: u64,
        op: NumberTheoryOp,
    },
    Geometry {
        radius: f64,
        tangent: f64,
        target: GeometryTarget,
    },
    Probability {
        num_dice: u32,
        target_sum: i64,
    },
    /// Polynomial coefficients, highest degree first.
    Calculus {
        coefficients: Vec<f64>,
    },
}

impl ProblemParams {
    pub fn category(&self) -> Category {
        match self {
            ProblemParams::Combinatorics { .. } => Category::Combinatorics,
            ProblemParams::Algebra { .. } => Category::Algebra,
            ProblemParams::NumberTheory { .. } => Category::NumberTheory,
            ProblemParams::Geometry { .. } => Category::Geometry,
            ProblemParams::Probability { .. } => Category::Probability,
            ProblemParams::Calculus { .. } => Category::Calculus,
        }
    }
}

/// One pipeline request: either an already-structured parameter record or
/// free text to classify and extract.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProblemInput {
    Structured(ProblemParams),
    Raw { raw: String },
}

impl ProblemInput {
    pub fn raw(text: impl Into<String>) -> Self {
        ProblemInput::Raw { raw: text.into() }
    }
}
