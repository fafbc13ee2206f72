//! Rule-based parameter extraction.
//!
//! Each category carries a fixed regex rule set and an explicit
//! required-field list. A miss on any required field fails the extraction as
//! a whole: no partial records, no default substitution. Structured callers
//! bypass this module entirely; their field contract is enforced by the
//! [`crate::params::ProblemParams`] deserializer.

use crate::category::Category;
use crate::error::Stop;
use crate::params::{
    AlgebraTarget, GeometryTarget, NumberTheoryOp, ProblemParams,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use tracing::debug;

/// Normalize math notation so one rule set covers both ASCII and the
/// unicode forms problems commonly arrive in.
fn normalize(text: &str) -> String {
    text.replace('²', "^2")
        .replace('³', "^3")
        .replace('−', "-")
        .replace('×', "*")
}

/// Extract typed parameters for `category` from free text.
pub fn extract(category: Category, text: &str) -> Result<ProblemParams, Stop> {
    let normalized = normalize(text);
    let result = match category {
        Category::Combinatorics => extract_combinatorics(&normalized),
        Category::Algebra => extract_algebra(&normalized),
        Category::NumberTheory => extract_number_theory(&normalized),
        Category::Geometry => extract_geometry(&normalized),
        Category::Probability => extract_probability(&normalized),
        Category::Calculus => extract_calculus(&normalized),
    };
    if let Err(stop) = &result {
        debug!(category = %category, detail = %stop.detail, "extraction failed");
    }
    result
}

// --- combinatorics ---------------------------------------------------------

static RE_GROUP_A: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s+men\b").unwrap());
static RE_GROUP_B: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s+wom[ae]n\b").unwrap());
static RE_SIZE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:committee|group|team)s?\s+of\s+(\d+)").unwrap());
static RE_AT_LEAST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)at\s+least\s+(\d+)\s+(men|man|women|woman)(?:\s+and\s+(\d+)\s+(men|man|women|woman))?",
    )
    .unwrap()
});

fn extract_combinatorics(text: &str) -> Result<ProblemParams, Stop> {
    let group_a = capture_u64(&RE_GROUP_A, text)
        .ok_or_else(|| Stop::extract("combinatorics: first group size not found"))?;
    let group_b = capture_u64(&RE_GROUP_B, text)
        .ok_or_else(|| Stop::extract("combinatorics: second group size not found"))?;
    let size = capture_u64(&RE_SIZE, text)
        .ok_or_else(|| Stop::extract("combinatorics: selection size not found"))?;

    // "at least K men and J women" style constraints; absent means 0.
    let mut min_a = 0u64;
    let mut min_b = 0u64;
    for caps in RE_AT_LEAST.captures_iter(text) {
        apply_min(&mut min_a, &mut min_b, &caps[2], caps[1].parse().ok());
        if let (Some(count), Some(word)) = (caps.get(3), caps.get(4)) {
            apply_min(&mut min_a, &mut min_b, word.as_str(), count.as_str().parse().ok());
        }
    }

    // Enumerate the valid (from_a, from_b) splits of the stated size.
    let mut cases = Vec::new();
    for from_a in min_a..=size.min(group_a) {
        let from_b = size - from_a;
        if from_b >= min_b && from_b <= group_b {
            cases.push((from_a, from_b));
        }
    }
    if cases.is_empty() {
        return Err(Stop::extract(
            "combinatorics: no selection split satisfies the constraints",
        ));
    }

    Ok(ProblemParams::Combinatorics {
        group_a,
        group_b,
        cases,
    })
}

fn apply_min(min_a: &mut u64, min_b: &mut u64, group_word: &str, value: Option<u64>) {
    let Some(value) = value else { return };
    if group_word.to_lowercase().starts_with("m") {
        *min_a = value;
    } else {
        *min_b = value;
    }
}

// --- algebra ---------------------------------------------------------------

static RE_SUM_OF_SQUARES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)x\^2\s*\+\s*y\^2\s*=\s*(-?\d+)").unwrap());
static RE_PRODUCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bxy\s*=\s*(-?\d+)").unwrap());

fn extract_algebra(text: &str) -> Result<ProblemParams, Stop> {
    let sum_of_squares = capture_i64(&RE_SUM_OF_SQUARES, text)
        .ok_or_else(|| Stop::extract("algebra: x^2 + y^2 value not found"))?;
    let product = capture_i64(&RE_PRODUCT, text)
        .ok_or_else(|| Stop::extract("algebra: xy value not found"))?;

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if !compact.contains("(x+y)^2") {
        return Err(Stop::extract("algebra: target expression (x+y)^2 not found"));
    }

    Ok(ProblemParams::Algebra {
        sum_of_squares,
        product,
        target: AlgebraTarget::SumSquared,
    })
}

// --- number theory ---------------------------------------------------------

static RE_DIVISORS_OF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)divisors?\s+of\s+(\d+)").unwrap());

fn extract_number_theory(text: &str) -> Result<ProblemParams, Stop> {
    let n = capture_u64(&RE_DIVISORS_OF, text)
        .ok_or_else(|| Stop::extract("number_theory: 'divisors of N' not found"))?;
    if n == 0 {
        return Err(Stop::extract("number_theory: N must be positive"));
    }
    Ok(ProblemParams::NumberTheory {
        n,
        op: NumberTheoryOp::DivisorSum,
    })
}

// --- geometry --------------------------------------------------------------

static RE_RADIUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)radius\s+(?:of\s+)?(\d+(?:\.\d+)?)").unwrap());
static RE_TANGENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)tangent[^0-9]*(\d+(?:\.\d+)?)").unwrap());

fn extract_geometry(text: &str) -> Result<ProblemParams, Stop> {
    let radius = capture_f64(&RE_RADIUS, text)
        .ok_or_else(|| Stop::extract("geometry: radius not found"))?;
    let tangent = capture_f64(&RE_TANGENT, text)
        .ok_or_else(|| Stop::extract("geometry: tangent length not found"))?;
    if !text.to_lowercase().contains("distance") {
        return Err(Stop::extract("geometry: distance target not found"));
    }
    Ok(ProblemParams::Geometry {
        radius,
        tangent,
        target: GeometryTarget::TangentPointDistance,
    })
}

// --- probability -----------------------------------------------------------

static RE_DICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d+|two|three|four|five|six)\s+(?:fair\s+)?dice\b").unwrap()
});
static RE_TARGET_SUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)sum\s*(?:is\s*)?(?:exactly\s*)?(?:of\s*)?(?:=\s*)?(-?\d+)").unwrap()
});

fn extract_probability(text: &str) -> Result<ProblemParams, Stop> {
    let dice_word = RE_DICE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
        .ok_or_else(|| Stop::extract("probability: dice count not found"))?;
    let num_dice: u32 = match dice_word.as_str() {
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        digits => digits
            .parse()
            .map_err(|_| Stop::extract("probability: dice count not a number"))?,
    };
    let target_sum = capture_i64(&RE_TARGET_SUM, text)
        .ok_or_else(|| Stop::extract("probability: target sum not found"))?;
    Ok(ProblemParams::Probability {
        num_dice,
        target_sum,
    })
}

// --- calculus --------------------------------------------------------------

static RE_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)f\(x\)\s*=\s*(.+?)(?:[,;]|\s+find\b|$)").unwrap());
static RE_TERM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:([+-]?)(\d+(?:\.\d+)?)?x(?:\^(\d+))?)|(?:([+-]?)(\d+(?:\.\d+)?))").unwrap()
});

fn extract_calculus(text: &str) -> Result<ProblemParams, Stop> {
    let rhs = RE_FUNCTION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Stop::extract("calculus: f(x) = ... not found"))?;

    let coefficients = parse_polynomial(rhs)
        .ok_or_else(|| Stop::extract("calculus: polynomial body did not parse"))?;
    if coefficients.len() != 4 || coefficients[0] == 0.0 {
        return Err(Stop::extract(
            "calculus: only cubic local-extrema problems are supported",
        ));
    }
    Ok(ProblemParams::Calculus { coefficients })
}

/// Parse a polynomial body like `x^3 - 6x^2 + 9x + 1` into coefficients,
/// highest degree first. Returns `None` when any part of the body is not a
/// recognizable term (the whole string must be consumed by term matches).
fn parse_polynomial(rhs: &str) -> Option<Vec<f64>> {
    let compact: String = rhs
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(|c| c.to_lowercase())
        .collect();
    if compact.is_empty() {
        return None;
    }

    let mut by_degree: BTreeMap<u32, f64> = BTreeMap::new();
    let mut consumed = 0usize;
    for caps in RE_TERM.captures_iter(&compact) {
        let whole = caps.get(0)?;
        if whole.start() != consumed || whole.as_str().is_empty() {
            return None;
        }
        consumed = whole.end();

        let (sign, magnitude, degree) = if caps.get(2).is_some() || compact[whole.range()].contains('x') {
            let sign = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let magnitude: f64 = match caps.get(2) {
                Some(m) => m.as_str().parse().ok()?,
                None => 1.0,
            };
            let degree: u32 = match caps.get(3) {
                Some(m) => m.as_str().parse().ok()?,
                None => 1,
            };
            (sign, magnitude, degree)
        } else {
            let sign = caps.get(4).map(|m| m.as_str()).unwrap_or("");
            let magnitude: f64 = caps.get(5)?.as_str().parse().ok()?;
            (sign, magnitude, 0)
        };

        let value = if sign == "-" { -magnitude } else { magnitude };
        *by_degree.entry(degree).or_insert(0.0) += value;
    }
    if consumed != compact.len() {
        return None;
    }

    let max_degree = *by_degree.keys().max()?;
    let coefficients = (0..=max_degree)
        .rev()
        .map(|d| by_degree.get(&d).copied().unwrap_or(0.0))
        .collect();
    Some(coefficients)
}

// --- capture helpers -------------------------------------------------------

fn capture_u64(re: &Regex, text: &str) -> Option<u64> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

fn capture_i64(re: &Regex, text: &str) -> Option<i64> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

fn capture_f64(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}
