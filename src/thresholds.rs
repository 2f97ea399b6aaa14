//! Threshold configuration for the pairing predicate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{MatchError, PairResult};

/// Pairing tolerances, all caller-supplied and non-negative.
///
/// Separations are raw coordinate differences in degrees (see
/// [`crate::graph`] for the geometric caveats), the distance difference is
/// in parsecs, and the quality bounds gate which records are eligible for
/// pairing at all. Each min/max pair must satisfy min ≤ max; this is
/// checked by [`validate`](Self::validate) before any pair is evaluated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThresholdConfig {
    /// Minimum allowed RA separation, degrees.
    pub min_ra_sep_deg: f64,
    /// Maximum allowed RA separation, degrees.
    pub max_ra_sep_deg: f64,
    /// Minimum allowed Dec separation, degrees.
    pub min_dec_sep_deg: f64,
    /// Maximum allowed Dec separation, degrees.
    pub max_dec_sep_deg: f64,
    /// Maximum allowed RUWE difference between the two records.
    pub max_quality_diff: f64,
    /// Maximum allowed distance difference, parsecs.
    pub max_distance_diff_pc: f64,
    /// A record is eligible for pairing only with RUWE ≥ this.
    pub min_quality: f64,
    /// A record is eligible for pairing only with RUWE ≤ this.
    pub max_quality: f64,
}

impl Default for ThresholdConfig {
    /// Defaults match the historical search parameters: 0.1° separations,
    /// 0.5 RUWE difference, 2 pc distance difference, RUWE ≥ 1.2 with no
    /// upper bound.
    fn default() -> Self {
        Self {
            min_ra_sep_deg: 0.0,
            max_ra_sep_deg: 0.1,
            min_dec_sep_deg: 0.0,
            max_dec_sep_deg: 0.1,
            max_quality_diff: 0.5,
            max_distance_diff_pc: 2.0,
            min_quality: 1.2,
            max_quality: f64::INFINITY,
        }
    }
}

impl ThresholdConfig {
    /// Checks that every threshold is non-negative and every min/max pair
    /// is ordered.
    ///
    /// # Errors
    /// Returns [`MatchError::Configuration`] naming the offending axis.
    /// Called once, before any pair evaluation; a failed validation
    /// produces no partial state.
    pub fn validate(&self) -> PairResult<()> {
        self.check_non_negative("min_ra_sep_deg", self.min_ra_sep_deg)?;
        self.check_non_negative("max_ra_sep_deg", self.max_ra_sep_deg)?;
        self.check_non_negative("min_dec_sep_deg", self.min_dec_sep_deg)?;
        self.check_non_negative("max_dec_sep_deg", self.max_dec_sep_deg)?;
        self.check_non_negative("max_quality_diff", self.max_quality_diff)?;
        self.check_non_negative("max_distance_diff_pc", self.max_distance_diff_pc)?;
        self.check_non_negative("min_quality", self.min_quality)?;
        self.check_non_negative("max_quality", self.max_quality)?;

        self.check_ordered("ra_sep", self.min_ra_sep_deg, self.max_ra_sep_deg)?;
        self.check_ordered("dec_sep", self.min_dec_sep_deg, self.max_dec_sep_deg)?;
        self.check_ordered("quality", self.min_quality, self.max_quality)?;
        Ok(())
    }

    fn check_non_negative(&self, name: &str, value: f64) -> PairResult<()> {
        // A NaN fails the comparison and is rejected here too
        if !(value >= 0.0) {
            return Err(MatchError::configuration(format!(
                "{} must be non-negative, got {}",
                name, value
            )));
        }
        Ok(())
    }

    fn check_ordered(&self, axis: &str, min: f64, max: f64) -> PairResult<()> {
        if min > max {
            return Err(MatchError::configuration(format!(
                "{} range inverted: min {} > max {}",
                axis, min, max
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ThresholdConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_ra_range_rejected() {
        let cfg = ThresholdConfig {
            min_ra_sep_deg: 0.5,
            max_ra_sep_deg: 0.1,
            ..Default::default()
        };
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("ra_sep"), "unexpected error: {}", msg);
    }

    #[test]
    fn test_inverted_dec_range_rejected() {
        let cfg = ThresholdConfig {
            min_dec_sep_deg: 1.0,
            max_dec_sep_deg: 0.1,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_inverted_quality_range_rejected() {
        let cfg = ThresholdConfig {
            min_quality: 2.0,
            max_quality: 1.0,
            ..Default::default()
        };
        let msg = cfg.validate().unwrap_err().to_string();
        assert!(msg.contains("quality"), "unexpected error: {}", msg);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let cfg = ThresholdConfig {
            max_distance_diff_pc: -2.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let cfg = ThresholdConfig {
            max_ra_sep_deg: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_equal_min_max_allowed() {
        let cfg = ThresholdConfig {
            min_ra_sep_deg: 0.1,
            max_ra_sep_deg: 0.1,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
