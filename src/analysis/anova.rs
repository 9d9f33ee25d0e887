//! One-way ANOVA of the Balance Index grouped by region
//!
//! Reproduces the manuscript's regional-difference test (F = 127.3,
//! p < 0.001, η² = 0.924). One canonical sum-of-squares computation around
//! the grand mean feeds the F statistic, the p-value, and the effect size,
//! so the two quantities cannot diverge.

use crate::domain::{CountryDataset, EtaSquared, RegionName};
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};
use std::collections::BTreeMap;
use tracing::debug;

/// Minimum distinct regions for a between-group comparison
const MIN_GROUPS: usize = 2;

/// Result of the regional one-way ANOVA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnovaResult {
    /// F statistic with (k-1, n-k) degrees of freedom
    ///
    /// `NaN` in the degenerate zero-total-variance case; `+inf` when all
    /// within-group variance is zero but groups differ.
    pub f_statistic: f64,
    /// Upper-tail p-value of the F statistic; `NaN` when degenerate
    pub p_value: f64,
    /// Effect size, exactly ss_between / ss_total (0.0 when degenerate)
    pub eta_squared: EtaSquared,
    pub df_between: usize,
    pub df_within: usize,
    /// True when all balance index values are identical (ss_total == 0)
    pub degenerate: bool,
    /// Mean balance index per region, in sorted region order
    pub group_means: BTreeMap<RegionName, f64>,
}

/// One-way analysis of variance of the Balance Index by region
pub struct RegionalVarianceAnalyzer;

impl RegionalVarianceAnalyzer {
    /// Run the ANOVA over the observed region groups
    ///
    /// Groups are formed dynamically from the region labels present in the
    /// dataset. A group with a single observation contributes nothing to
    /// within-group variance but still counts toward the total and
    /// between-group sums of squares.
    pub fn analyze(dataset: &CountryDataset) -> Result<AnovaResult, AnalysisError> {
        let groups = dataset.by_region();
        if groups.len() < MIN_GROUPS {
            return Err(AnalysisError::InsufficientGroups {
                actual: groups.len(),
            });
        }

        let all: Vec<f64> = dataset.balance_indices();
        let n = all.len();
        let k = groups.len();
        let df_within = n - k;
        let df_between = k - 1;
        if df_within == 0 {
            return Err(AnalysisError::InsufficientData {
                context: "one-way ANOVA within-group variance",
                required: k + 1,
                actual: n,
            });
        }

        let grand_mean = all.iter().sum::<f64>() / n as f64;

        // Canonical sums of squares, both around the grand mean
        let ss_total: f64 = all.iter().map(|x| (x - grand_mean).powi(2)).sum();
        let mut ss_between = 0.0;
        let mut group_means = BTreeMap::new();
        for (region, records) in &groups {
            let values: Vec<f64> = records.iter().map(|r| r.balance_index()).collect();
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            ss_between += values.len() as f64 * (mean - grand_mean).powi(2);
            group_means.insert((*region).clone(), mean);
        }
        let ss_within = (ss_total - ss_between).max(0.0);

        if ss_total == 0.0 {
            // All balance index values identical: η² undefined, defined as 0
            debug!("ANOVA degenerate: zero total variance");
            return Ok(AnovaResult {
                f_statistic: f64::NAN,
                p_value: f64::NAN,
                eta_squared: EtaSquared::try_new(0.0).unwrap(),
                df_between,
                df_within,
                degenerate: true,
                group_means,
            });
        }

        let eta = (ss_between / ss_total).clamp(0.0, 1.0);
        let ms_between = ss_between / df_between as f64;
        let ms_within = ss_within / df_within as f64;

        let (f_statistic, p_value) = if ms_within == 0.0 {
            // Perfect separation between groups
            (f64::INFINITY, 0.0)
        } else {
            let f = ms_between / ms_within;
            let dist = FisherSnedecor::new(df_between as f64, df_within as f64)
                .expect("both degrees of freedom are positive");
            (f, (1.0 - dist.cdf(f)).clamp(0.0, 1.0))
        };

        debug!(
            f = f_statistic,
            p = p_value,
            eta_squared = eta,
            groups = k,
            observations = n,
            "ANOVA computed"
        );

        Ok(AnovaResult {
            f_statistic,
            p_value,
            eta_squared: EtaSquared::try_new(eta).unwrap_or_else(|_| EtaSquared::try_new(0.0).unwrap()),
            df_between,
            df_within,
            degenerate: false,
            group_means,
        })
    }
}
