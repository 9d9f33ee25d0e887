//! Pearson correlation between the Balance Index and correlate variables
//!
//! Reproduces the manuscript's Table 2: for each requested correlate, the
//! product-moment correlation with the balance index column plus a two-sided
//! p-value from a Student-t test with n-2 degrees of freedom.

use crate::domain::{CountryDataset, CorrelationCoefficient, PValue, VariableName};
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

/// Minimum observations for a defined correlation and p-value
const MIN_OBSERVATIONS: usize = 3;

/// Correlation of one correlate variable with the Balance Index
///
/// `r` is the true signed coefficient for every variable, including
/// democratic erosion risk: the expected negative sign there is asserted by
/// the manuscript validator as a separate claim, never forced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    pub variable: VariableName,
    pub r: CorrelationCoefficient,
    pub p_value: PValue,
    /// Number of paired observations behind the estimate
    pub n: usize,
}

/// Correlation results in the insertion order of the requested variables
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrelationReport {
    results: Vec<CorrelationResult>,
}

impl CorrelationReport {
    pub fn results(&self) -> &[CorrelationResult] {
        &self.results
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorrelationResult> {
        self.results.iter()
    }

    /// Look up one variable's result by name
    pub fn get(&self, variable: &VariableName) -> Option<&CorrelationResult> {
        self.results.iter().find(|r| &r.variable == variable)
    }
}

/// Computes Pearson correlations over a loaded dataset
pub struct CorrelationAnalyzer;

impl CorrelationAnalyzer {
    /// Correlate the balance index column with each requested variable
    ///
    /// Output order is the insertion order of `variables`, not sorted by r.
    /// Fails when the dataset has fewer than 3 records, when a record lacks
    /// a requested variable, or when either column has zero variance.
    pub fn analyze(
        dataset: &CountryDataset,
        variables: &[VariableName],
    ) -> Result<CorrelationReport, AnalysisError> {
        if dataset.len() < MIN_OBSERVATIONS {
            return Err(AnalysisError::InsufficientData {
                context: "Pearson correlation",
                required: MIN_OBSERVATIONS,
                actual: dataset.len(),
            });
        }

        let balance = dataset.balance_indices();
        let mut results = Vec::with_capacity(variables.len());

        for variable in variables {
            let mut column = Vec::with_capacity(dataset.len());
            for record in dataset.records() {
                let value = record.correlate(variable).ok_or_else(|| {
                    AnalysisError::MissingVariable {
                        variable: variable.to_string(),
                        record: record.country().to_string(),
                    }
                })?;
                column.push(value);
            }

            let result = Self::pearson(&balance, &column, variable)?;
            debug!(
                variable = %result.variable,
                r = result.r.into_inner(),
                p = result.p_value.into_inner(),
                "correlation computed"
            );
            results.push(result);
        }

        Ok(CorrelationReport { results })
    }

    fn pearson(
        balance: &[f64],
        column: &[f64],
        variable: &VariableName,
    ) -> Result<CorrelationResult, AnalysisError> {
        let n = balance.len();
        let nf = n as f64;
        let mean_x = balance.iter().sum::<f64>() / nf;
        let mean_y = column.iter().sum::<f64>() / nf;

        let mut cov = 0.0;
        let mut var_x = 0.0;
        let mut var_y = 0.0;
        for (x, y) in balance.iter().zip(column) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            cov += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }

        if var_x == 0.0 {
            return Err(AnalysisError::ZeroVariance {
                variable: "balance_index".to_string(),
            });
        }
        if var_y == 0.0 {
            return Err(AnalysisError::ZeroVariance {
                variable: variable.to_string(),
            });
        }

        // Floating-point rounding can push |r| marginally past 1
        let r = (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0);
        let p = Self::two_sided_p(r, n);

        Ok(CorrelationResult {
            variable: variable.clone(),
            r: CorrelationCoefficient::try_new(r)
                .unwrap_or_else(|_| CorrelationCoefficient::try_new(0.0).unwrap()),
            p_value: PValue::try_new(p).unwrap_or_else(|_| PValue::try_new(1.0).unwrap()),
            n,
        })
    }

    /// Two-sided p-value under the null r = 0, t-distributed with n-2 dof
    fn two_sided_p(r: f64, n: usize) -> f64 {
        let dof = (n - 2) as f64;
        let denominator = 1.0 - r * r;
        if denominator <= 0.0 {
            // |r| == 1: the t statistic diverges
            return 0.0;
        }
        let t = r * (dof / denominator).sqrt();
        let dist =
            StudentsT::new(0.0, 1.0, dof).expect("degrees of freedom are positive for n >= 3");
        (2.0 * dist.cdf(-t.abs())).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountryName, CountryRecord, Percentage, RegionName};
    use std::collections::BTreeMap;

    fn var(name: &str) -> VariableName {
        VariableName::try_new(name.to_string()).unwrap()
    }

    fn record(country: &str, stem: f64, hum: f64, correlate: (&str, f64)) -> CountryRecord {
        let mut correlates = BTreeMap::new();
        correlates.insert(var(correlate.0), correlate.1);
        CountryRecord::new(
            CountryName::try_new(country.to_string()).unwrap(),
            RegionName::try_new("Test".to_string()).unwrap(),
            Percentage::try_new(stem).unwrap(),
            Percentage::try_new(hum).unwrap(),
            correlates,
        )
    }

    #[test]
    fn test_fewer_than_three_records_is_insufficient() {
        let dataset = CountryDataset::new(vec![
            record("A", 40.0, 10.0, ("x", 1.0)),
            record("B", 30.0, 15.0, ("x", 2.0)),
        ]);
        let err = CorrelationAnalyzer::analyze(&dataset, &[var("x")]).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InsufficientData { actual: 2, .. }
        ));
    }

    #[test]
    fn test_perfectly_linear_relationship_has_unit_correlation() {
        // balance index values 0.25, 0.50, 0.75; correlate is 2 * index
        let dataset = CountryDataset::new(vec![
            record("A", 40.0, 10.0, ("x", 0.50)),
            record("B", 40.0, 20.0, ("x", 1.00)),
            record("C", 40.0, 30.0, ("x", 1.50)),
        ]);
        let report = CorrelationAnalyzer::analyze(&dataset, &[var("x")]).unwrap();
        let result = report.get(&var("x")).unwrap();
        assert!((result.r.into_inner() - 1.0).abs() < 1e-12);
        assert!(result.p_value.into_inner() < 1e-9);
    }

    #[test]
    fn test_negative_association_keeps_its_sign() {
        // correlate decreases as the balance index increases
        let dataset = CountryDataset::new(vec![
            record("A", 40.0, 10.0, ("risk", 9.0)),
            record("B", 40.0, 20.0, ("risk", 6.5)),
            record("C", 40.0, 30.0, ("risk", 4.0)),
            record("D", 40.0, 40.0, ("risk", 2.0)),
        ]);
        let report = CorrelationAnalyzer::analyze(&dataset, &[var("risk")]).unwrap();
        let r = report.get(&var("risk")).unwrap().r.into_inner();
        assert!(r < -0.9, "expected strongly negative r, got {r}");
    }

    #[test]
    fn test_output_preserves_requested_variable_order() {
        let make =|country: &str, hum: f64, z: f64, a: f64| {
            let mut c = BTreeMap::new();
            c.insert(var("zeta"), z);
            c.insert(var("alpha"), a);
            CountryRecord::new(
                CountryName::try_new(country.to_string()).unwrap(),
                RegionName::try_new("Test".to_string()).unwrap(),
                Percentage::try_new(40.0).unwrap(),
                Percentage::try_new(hum).unwrap(),
                c,
            )
        };
        let dataset = CountryDataset::new(vec![
            make("A", 10.0, 1.0, 3.0),
            make("B", 20.0, 2.0, 2.0),
            make("C", 30.0, 3.0, 1.0),
        ]);
        let report =
            CorrelationAnalyzer::analyze(&dataset, &[var("zeta"), var("alpha")]).unwrap();
        let names: Vec<String> = report.iter().map(|r| r.variable.to_string()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_missing_variable_is_an_explicit_error() {
        let dataset = CountryDataset::new(vec![
            record("A", 40.0, 10.0, ("x", 1.0)),
            record("B", 40.0, 20.0, ("x", 2.0)),
            record("C", 40.0, 30.0, ("x", 3.0)),
        ]);
        let err = CorrelationAnalyzer::analyze(&dataset, &[var("y")]).unwrap_err();
        assert!(matches!(err, AnalysisError::MissingVariable { .. }));
    }

    #[test]
    fn test_constant_correlate_is_zero_variance() {
        let dataset = CountryDataset::new(vec![
            record("A", 40.0, 10.0, ("x", 5.0)),
            record("B", 40.0, 20.0, ("x", 5.0)),
            record("C", 40.0, 30.0, ("x", 5.0)),
        ]);
        let err = CorrelationAnalyzer::analyze(&dataset, &[var("x")]).unwrap_err();
        assert!(matches!(err, AnalysisError::ZeroVariance { .. }));
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let dataset = CountryDataset::new(vec![
            record("A", 40.0, 10.0, ("x", 0.7)),
            record("B", 35.0, 20.0, ("x", 1.4)),
            record("C", 30.0, 25.0, ("x", 2.9)),
            record("D", 45.0, 5.0, ("x", 0.3)),
        ]);
        let first = CorrelationAnalyzer::analyze(&dataset, &[var("x")]).unwrap();
        let second = CorrelationAnalyzer::analyze(&dataset, &[var("x")]).unwrap();
        assert_eq!(first, second);
    }
}
