//! Keyword-table problem classification.
//!
//! Scoring is occurrence counting over fixed per-category keyword tables:
//! repeated domain vocabulary weighs a category up, and there is no semantic
//! disambiguation beyond the counts. Text that happens to contain more
//! keywords of a wrong category than the right one will be misclassified;
//! that is an accepted property of the approach, not something this module
//! tries to correct.

use crate::category::Category;
use serde::Serialize;
use std::collections::BTreeMap;

/// Keyword table for one category.
struct KeywordTable {
    category: Category,
    keywords: &'static [&'static str],
}

/// Keyword tables in declared (tie-break) order. Matching is
/// case-insensitive substring matching; each occurrence counts.
const TABLES: [KeywordTable; 6] = [
    KeywordTable {
        category: Category::Combinatorics,
        keywords: &["how many ways", "combination", "committee", "choose", "select"],
    },
    KeywordTable {
        category: Category::Algebra,
        keywords: &["x^2", "y^2", "x²", "y²", "(x+y)", "(x + y)", "find the value"],
    },
    KeywordTable {
        category: Category::NumberTheory,
        keywords: &["divisor", "prime", "factorization", "sum of all"],
    },
    KeywordTable {
        category: Category::Geometry,
        keywords: &["circle", "tangent", "radius", "distance", "triangle"],
    },
    KeywordTable {
        category: Category::Probability,
        keywords: &["probability", "dice", "rolled", "sum is exactly"],
    },
    KeywordTable {
        category: Category::Calculus,
        keywords: &["f(x)", "derivative", "extrem", "maximum", "minimum", "find all local"],
    },
];

/// The keyword table of every category, in declared order. For diagnostics
/// and documentation surfaces; classification itself goes through
/// [`classify`].
pub fn keyword_tables() -> impl Iterator<Item = (Category, &'static [&'static str])> {
    TABLES.iter().map(|t| (t.category, t.keywords))
}

/// Result of classifying one problem text.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// Best category, `None` when no keyword of any category matched.
    pub category: Option<Category>,
    /// Score of the best category (0 when unknown).
    pub confidence: u32,
    /// Score per category, for diagnostics.
    pub all_scores: BTreeMap<&'static str, u32>,
    /// True when two or more categories share the maximal nonzero score.
    pub is_tie: bool,
    /// Every category achieving the maximal nonzero score, in declared
    /// order. A hint for multi-label situations; never consumed downstream.
    pub matched_categories: Vec<Category>,
}

/// Classify problem text by keyword occurrence counts.
///
/// `confidence` is the maximal score; ties break to the first-declared
/// category (see [`Category::DECLARED`]). A zero maximal score means
/// unknown: no guess is ever made.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    let mut scores: Vec<(Category, u32)> = Vec::with_capacity(TABLES.len());
    for table in &TABLES {
        let score = table
            .keywords
            .iter()
            .map(|kw| lower.matches(kw).count() as u32)
            .sum();
        scores.push((table.category, score));
    }

    let max_score = scores.iter().map(|(_, s)| *s).max().unwrap_or(0);

    let all_scores: BTreeMap<&'static str, u32> = scores
        .iter()
        .map(|(cat, s)| (cat.as_str(), *s))
        .collect();

    if max_score == 0 {
        return Classification {
            category: None,
            confidence: 0,
            all_scores,
            is_tie: false,
            matched_categories: Vec::new(),
        };
    }

    // Declared order makes the first max the documented tie-break winner.
    let matched_categories: Vec<Category> = scores
        .iter()
        .filter(|(_, s)| *s == max_score)
        .map(|(cat, _)| *cat)
        .collect();

    Classification {
        category: Some(matched_categories[0]),
        confidence: max_score,
        all_scores,
        is_tie: matched_categories.len() > 1,
        matched_categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_matches_means_unknown() {
        let result = classify("Solve it");
        assert_eq!(result.category, None);
        assert_eq!(result.confidence, 0);
        assert!(!result.is_tie);
        assert!(result.matched_categories.is_empty());
    }

    #[test]
    fn committee_text_is_combinatorics() {
        let result = classify("A committee of 5 is formed from 6 men and 4 women");
        assert_eq!(result.category, Some(Category::Combinatorics));
        assert!(result.confidence >= 1);
    }

    #[test]
    fn repeated_keywords_each_count() {
        let once = classify("roll the dice");
        let twice = classify("roll the dice, then roll the dice again");
        assert!(twice.confidence > once.confidence);
    }

    #[test]
    fn tie_breaks_to_first_declared_category() {
        // One number-theory keyword, one geometry keyword.
        let result = classify("the prime circle");
        assert!(result.is_tie);
        assert_eq!(result.category, Some(Category::NumberTheory));
        assert_eq!(
            result.matched_categories,
            vec![Category::NumberTheory, Category::Geometry]
        );
    }

    #[test]
    fn unicode_superscripts_score_algebra() {
        let result = classify("x² + y² = 25 and xy = 12, find (x+y)²");
        assert_eq!(result.category, Some(Category::Algebra));
    }

    #[test]
    fn keyword_pollution_misclassifies_by_design() {
        // Heavy geometry vocabulary around an algebra identity.
        let result =
            classify("a circle, a tangent and a radius appear in the equation x^2 + y^2 = 16");
        assert_eq!(result.category, Some(Category::Geometry));
    }

    #[test]
    fn all_scores_covers_every_category() {
        let result = classify("anything");
        assert_eq!(result.all_scores.len(), Category::DECLARED.len());
    }
}
