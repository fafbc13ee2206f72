//! The closed set of problem categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Problem category. The set is fixed at compile time; there is no
/// open-ended "other" variant — input outside these six is refused upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Combinatorics,
    Algebra,
    NumberTheory,
    Geometry,
    Probability,
    Calculus,
}

impl Category {
    /// Declaration order. This is the documented tie-break order for
    /// classification: when two categories score equally, the one earlier
    /// in this slice wins.
    pub const DECLARED: [Category; 6] = [
        Category::Combinatorics,
        Category::Algebra,
        Category::NumberTheory,
        Category::Geometry,
        Category::Probability,
        Category::Calculus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Combinatorics => "combinatorics",
            Category::Algebra => "algebra",
            Category::NumberTheory => "number_theory",
            Category::Geometry => "geometry",
            Category::Probability => "probability",
            Category::Calculus => "calculus",
        }
    }

    /// Parse from string (for structured input and test corpora).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "combinatorics" => Some(Category::Combinatorics),
            "algebra" => Some(Category::Algebra),
            "number_theory" | "number-theory" => Some(Category::NumberTheory),
            "geometry" => Some(Category::Geometry),
            "probability" => Some(Category::Probability),
            "calculus" => Some(Category::Calculus),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
