//! Confidence level mapping.
//!
//! Single source of truth for the coarse confidence label. Every place a
//! confidence score is bucketed for display must go through
//! [`map_confidence_level`]; duplicating the thresholds inline is how the
//! labels drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONFIDENCE_HIGH: f64 = 0.85;
pub const CONFIDENCE_MEDIUM: f64 = 0.70;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
        };
        write!(f, "{s}")
    }
}

/// Map a confidence score in [0,1] to its display bucket.
pub fn map_confidence_level(confidence: f64) -> ConfidenceLevel {
    if confidence >= CONFIDENCE_HIGH {
        ConfidenceLevel::High
    } else if confidence >= CONFIDENCE_MEDIUM {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_buckets() {
        assert_eq!(map_confidence_level(0.90), ConfidenceLevel::High);
        assert_eq!(map_confidence_level(0.85), ConfidenceLevel::High);
        assert_eq!(map_confidence_level(0.7667), ConfidenceLevel::Medium);
        assert_eq!(map_confidence_level(0.70), ConfidenceLevel::Medium);
        assert_eq!(map_confidence_level(0.65), ConfidenceLevel::Low);
        assert_eq!(map_confidence_level(0.0), ConfidenceLevel::Low);
    }
}
