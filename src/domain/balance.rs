//! Balance Index computation and interpretation
//!
//! The Balance Index quantifies educational equilibrium between STEM and
//! humanities enrollment: `min(STEM%, Humanities%) / max(STEM%, Humanities%)`,
//! ranging from 0 (complete imbalance) to 1 (perfect balance).

use crate::domain::types::{BalanceIndexValue, Percentage};
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative category of a Balance Index score
///
/// A fixed monotone step function of the index. Boundaries are closed on the
/// lower edge: an index of exactly 0.8 is Excellent, exactly 0.2 is Severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BalanceCategory {
    /// Index in [0.8, 1.0]
    Excellent,
    /// Index in [0.6, 0.8)
    Good,
    /// Index in [0.4, 0.6)
    Moderate,
    /// Index in [0.2, 0.4)
    Severe,
    /// Index in [0.0, 0.2)
    Critical,
}

impl BalanceCategory {
    /// Categorize a Balance Index value
    pub fn from_index(index: BalanceIndexValue) -> Self {
        match index.into_inner() {
            x if x >= 0.8 => Self::Excellent,
            x if x >= 0.6 => Self::Good,
            x if x >= 0.4 => Self::Moderate,
            x if x >= 0.2 => Self::Severe,
            _ => Self::Critical,
        }
    }

    /// Manuscript label for the category
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Balance",
            Self::Good => "Good Balance",
            Self::Moderate => "Moderate Imbalance",
            Self::Severe => "Severe Imbalance",
            Self::Critical => "Critical Imbalance",
        }
    }

    /// Fixed interpretation text for the category
    pub fn interpretation(&self) -> &'static str {
        match self {
            Self::Excellent => "Near-optimal educational equilibrium",
            Self::Good => "Reasonable educational balance with room for improvement",
            Self::Moderate => "Significant educational stratification present",
            Self::Severe => "Extreme educational stratification",
            Self::Critical => "Educational apartheid conditions",
        }
    }

    /// Fixed policy recommendation for the category
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Excellent => "Maintain current balance while monitoring trends",
            Self::Good => "Minor adjustments to achieve optimal balance",
            Self::Moderate => "Systematic policy intervention needed",
            Self::Severe => "Urgent comprehensive reform required",
            Self::Critical => "Emergency intervention and complete restructuring needed",
        }
    }
}

impl fmt::Display for BalanceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Derived balance metrics for one (STEM%, Humanities%) pair
///
/// Recomputed on demand from a record; never stored or mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceIndexResult {
    /// Symmetric balance index in [0, 1]
    pub index: BalanceIndexValue,
    /// STEM : humanities quotient
    ///
    /// `+inf` when humanities is 0 and STEM is positive, `NaN` when both are
    /// 0 (sentinels, not errors). Callers must special-case non-finite
    /// values before aggregating.
    pub ratio: f64,
    /// Qualitative category of the index
    pub category: BalanceCategory,
}

/// Pure computation of the Balance Index and its interpretation
pub struct BalanceIndexModel;

impl BalanceIndexModel {
    /// Compute balance metrics from validated percentages
    ///
    /// Infallible: range validation already happened when the `Percentage`
    /// values were constructed, and the (0, 0) pair is the defined 0.0 case.
    pub fn compute(stem: Percentage, humanities: Percentage) -> BalanceIndexResult {
        let s = stem.into_inner();
        let h = humanities.into_inner();

        let index = if s == 0.0 && h == 0.0 {
            BalanceIndexValue::zero()
        } else {
            // max > 0 here, and min/max of values in [0, 100] stays in [0, 1]
            let value = s.min(h) / s.max(h);
            BalanceIndexValue::try_new(value).unwrap_or_else(|_| BalanceIndexValue::zero())
        };

        let ratio = if h == 0.0 {
            if s > 0.0 {
                f64::INFINITY
            } else {
                f64::NAN
            }
        } else {
            s / h
        };

        BalanceIndexResult {
            index,
            ratio,
            category: BalanceCategory::from_index(index),
        }
    }

    /// Compute balance metrics from raw percentages
    ///
    /// Fails with a range error naming the out-of-range field.
    pub fn compute_raw(stem: f64, humanities: f64) -> Result<BalanceIndexResult, AnalysisError> {
        let stem = Percentage::try_new(stem).map_err(|_| AnalysisError::Range {
            field: "stem",
            value: stem,
        })?;
        let humanities = Percentage::try_new(humanities).map_err(|_| AnalysisError::Range {
            field: "humanities",
            value: humanities,
        })?;
        Ok(Self::compute(stem, humanities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pct(value: f64) -> Percentage {
        Percentage::try_new(value).unwrap()
    }

    #[test]
    fn test_index_is_symmetric() {
        let a = BalanceIndexModel::compute(pct(43.9), pct(7.1));
        let b = BalanceIndexModel::compute(pct(7.1), pct(43.9));
        assert_eq!(a.index, b.index);
    }

    #[test]
    fn test_equal_positive_shares_are_perfectly_balanced() {
        let result = BalanceIndexModel::compute(pct(50.0), pct(50.0));
        assert_eq!(result.index, BalanceIndexValue::perfect());
        assert_eq!(result.category, BalanceCategory::Excellent);
    }

    #[test]
    fn test_both_zero_is_defined_as_zero_index() {
        let result = BalanceIndexModel::compute(pct(0.0), pct(0.0));
        assert_eq!(result.index, BalanceIndexValue::zero());
        assert!(result.ratio.is_nan());
    }

    #[test]
    fn test_one_sided_enrollment_has_zero_index_and_infinite_ratio() {
        let result = BalanceIndexModel::compute(pct(100.0), pct(0.0));
        assert_eq!(result.index, BalanceIndexValue::zero());
        assert!(result.ratio.is_infinite() && result.ratio > 0.0);
        assert_eq!(result.category, BalanceCategory::Critical);
    }

    #[test]
    fn test_ratio_is_plain_quotient_when_humanities_positive() {
        let result = BalanceIndexModel::compute(pct(33.9), pct(15.5));
        assert!((result.ratio - 33.9 / 15.5).abs() < 1e-12);
    }

    #[rstest]
    #[case(0.8, BalanceCategory::Excellent)]
    #[case(0.6, BalanceCategory::Good)]
    #[case(0.4, BalanceCategory::Moderate)]
    #[case(0.2, BalanceCategory::Severe)]
    #[case(0.199, BalanceCategory::Critical)]
    #[case(1.0, BalanceCategory::Excellent)]
    #[case(0.0, BalanceCategory::Critical)]
    fn test_category_boundaries_are_half_open(
        #[case] index: f64,
        #[case] expected: BalanceCategory,
    ) {
        let value = BalanceIndexValue::try_new(index).unwrap();
        assert_eq!(BalanceCategory::from_index(value), expected);
    }

    #[test]
    fn test_compute_raw_rejects_out_of_range_input() {
        let err = BalanceIndexModel::compute_raw(101.0, 10.0).unwrap_err();
        assert!(matches!(err, AnalysisError::Range { field: "stem", .. }));

        let err = BalanceIndexModel::compute_raw(10.0, -1.0).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Range {
                field: "humanities",
                ..
            }
        ));
    }

    #[test]
    fn test_interpretation_table_is_static() {
        assert_eq!(
            BalanceCategory::Critical.interpretation(),
            "Educational apartheid conditions"
        );
        assert_eq!(
            BalanceCategory::Excellent.recommendation(),
            "Maintain current balance while monitoring trends"
        );
        assert_eq!(BalanceCategory::Moderate.to_string(), "Moderate Imbalance");
    }
}
