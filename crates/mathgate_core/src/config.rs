//! Numeric tolerances used by the solver and verifier.
//!
//! The comparison constants are configuration, not literals scattered through
//! the code: callers may load overrides from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Tolerances for floating-point comparison and classification of
/// near-zero second derivatives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Absolute tolerance for real-valued answer comparison.
    pub real_epsilon: f64,
    /// Tolerance when comparing a probability as a floating value.
    pub probability_tolerance: f64,
    /// Below this magnitude a second derivative counts as zero
    /// (critical point reported but not classified).
    pub derivative_zero_epsilon: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            real_epsilon: 1e-6,
            probability_tolerance: 1e-3,
            derivative_zero_epsilon: 1e-9,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tolerances file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse tolerances file: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Tolerances {
    /// Load tolerances from a TOML file. Absent keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_constants() {
        let t = Tolerances::default();
        assert_eq!(t.real_epsilon, 1e-6);
        assert_eq!(t.probability_tolerance, 1e-3);
    }

    #[test]
    fn partial_file_keeps_defaults_for_absent_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "probability_tolerance = 0.01").unwrap();
        let t = Tolerances::load(file.path()).unwrap();
        assert_eq!(t.probability_tolerance, 0.01);
        assert_eq!(t.real_epsilon, 1e-6);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "real_epsilon = \"not a number\"").unwrap();
        assert!(matches!(
            Tolerances::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
