//! Answer values produced by the solver.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a critical point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtremumKind {
    LocalMax,
    LocalMin,
    /// Second derivative is zero at the point: reported, not classified.
    Inconclusive,
}

impl fmt::Display for ExtremumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtremumKind::LocalMax => write!(f, "local maximum"),
            ExtremumKind::LocalMin => write!(f, "local minimum"),
            ExtremumKind::Inconclusive => write!(f, "inconclusive"),
        }
    }
}

/// One critical point `(kind, x, f(x))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    pub kind: ExtremumKind,
    pub x: f64,
    pub y: f64,
}

/// Solver output. Exact where the domain is exact (integers, rationals),
/// floating only where the formula itself is real-valued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Answer {
    Integer { value: i128 },
    Real { value: f64 },
    /// Exact probability as favorable/total outcome counts.
    Rational { favorable: u64, total: u64 },
    Extrema { points: Vec<Extremum> },
}

impl Answer {
    /// Floating view of a rational answer.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Answer::Integer { value } => Some(*value as f64),
            Answer::Real { value } => Some(*value),
            Answer::Rational { favorable, total } => {
                if *total == 0 {
                    None
                } else {
                    Some(*favorable as f64 / *total as f64)
                }
            }
            Answer::Extrema { .. } => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Integer { value } => write!(f, "{}", value),
            Answer::Real { value } => write!(f, "{}", value),
            Answer::Rational { favorable, total } => {
                if *total == 0 {
                    write!(f, "{}/{}", favorable, total)
                } else {
                    write!(
                        f,
                        "{}/{} ≈ {:.6}",
                        favorable,
                        total,
                        *favorable as f64 / *total as f64
                    )
                }
            }
            Answer::Extrema { points } => {
                let rendered: Vec<String> = points
                    .iter()
                    .map(|p| format!("{} at ({}, {})", p.kind, p.x, p.y))
                    .collect();
                write!(f, "{}", rendered.join("; "))
            }
        }
    }
}
