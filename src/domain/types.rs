//! Validated domain newtypes for the stratification statistics
//!
//! This module provides newtypes for the core quantitative concepts to avoid
//! primitive obsession and ensure validation at construction time.

use nutype::nutype;
#[allow(unused_imports)] // These are used by nutype derive macros
use serde::{Deserialize, Serialize};

/// Enrollment share of a field of study (0.0 to 100.0)
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 100.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct Percentage(f64);

impl Eq for Percentage {} // Safe since validation ensures finite values

impl Percentage {
    /// Zero enrollment share
    pub fn zero() -> Self {
        Self::try_new(0.0).unwrap()
    }
}

/// Balance Index value (0.0 to 1.0)
///
/// `min(STEM%, Humanities%) / max(STEM%, Humanities%)`, a symmetric measure
/// of enrollment equilibrium. 0 is complete imbalance, 1 is perfect balance.
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct BalanceIndexValue(f64);

impl Eq for BalanceIndexValue {} // Safe since validation ensures finite values

impl BalanceIndexValue {
    /// Perfect balance (1.0)
    pub fn perfect() -> Self {
        Self::try_new(1.0).unwrap()
    }

    /// Complete imbalance (0.0)
    pub fn zero() -> Self {
        Self::try_new(0.0).unwrap()
    }
}

/// Pearson product-moment correlation coefficient (-1.0 to 1.0)
#[nutype(
    validate(finite, greater_or_equal = -1.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct CorrelationCoefficient(f64);

impl Eq for CorrelationCoefficient {} // Safe since validation ensures finite values

/// Two-sided p-value (0.0 to 1.0)
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct PValue(f64);

impl Eq for PValue {} // Safe since validation ensures finite values

impl PValue {
    /// Conventional significance check against a fixed alpha
    pub fn is_significant_at(&self, alpha: f64) -> bool {
        self.into_inner() < alpha
    }
}

/// ANOVA effect size η² (0.0 to 1.0)
///
/// Fraction of total variance attributable to between-group differences.
#[nutype(
    validate(finite, greater_or_equal = 0.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)
)]
pub struct EtaSquared(f64);

impl Eq for EtaSquared {} // Safe since validation ensures finite values

/// Country name
#[nutype(
    validate(not_empty, len_char_max = 100),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct CountryName(String);

/// Regional grouping label (e.g. "Asia", "Europe")
///
/// Regions are an open tag type rather than a fixed enum: ANOVA groups are
/// formed from the labels observed in the dataset, which keeps the analysis
/// usable with different regional taxonomies.
#[nutype(
    validate(not_empty, len_char_max = 100),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct RegionName(String);

/// Name of a correlate variable (e.g. "democratic_participation_index")
#[nutype(
    validate(not_empty, len_char_max = 100),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct VariableName(String);

/// Year of a longitudinal observation
///
/// The manuscript covers 2015-2024; the bounds only rule out obviously
/// corrupt input, not restrict the analysis to that window.
#[nutype(
    validate(greater_or_equal = 1900, less_or_equal = 2100),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        Display
    )
)]
pub struct ObservationYear(i32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_validation() {
        assert!(Percentage::try_new(0.0).is_ok());
        assert!(Percentage::try_new(50.0).is_ok());
        assert!(Percentage::try_new(100.0).is_ok());
        assert!(Percentage::try_new(-0.1).is_err());
        assert!(Percentage::try_new(100.1).is_err());
        assert!(Percentage::try_new(f64::NAN).is_err());
        assert!(Percentage::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_balance_index_value_bounds() {
        assert!(BalanceIndexValue::try_new(0.0).is_ok());
        assert!(BalanceIndexValue::try_new(1.0).is_ok());
        assert!(BalanceIndexValue::try_new(1.01).is_err());
        assert!(BalanceIndexValue::try_new(-0.01).is_err());
    }

    #[test]
    fn test_correlation_coefficient_accepts_negative_values() {
        assert!(CorrelationCoefficient::try_new(-1.0).is_ok());
        assert!(CorrelationCoefficient::try_new(-0.678).is_ok());
        assert!(CorrelationCoefficient::try_new(-1.001).is_err());
    }

    #[test]
    fn test_p_value_significance() {
        let p = PValue::try_new(0.003).unwrap();
        assert!(p.is_significant_at(0.05));
        assert!(!PValue::try_new(0.2).unwrap().is_significant_at(0.05));
    }

    #[test]
    fn test_region_name_is_open_tag() {
        assert!(RegionName::try_new("Asia".to_string()).is_ok());
        assert!(RegionName::try_new("Oceania".to_string()).is_ok());
        assert!(RegionName::try_new(String::new()).is_err());
    }

    #[test]
    fn test_observation_year_bounds() {
        assert!(ObservationYear::try_new(2015).is_ok());
        assert!(ObservationYear::try_new(2024).is_ok());
        assert!(ObservationYear::try_new(1800).is_err());
    }
}
