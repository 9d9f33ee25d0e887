//! Per-region descriptive statistics (manuscript Table 1)

use crate::domain::{CountryDataset, CountryRecord, RegionName};
use serde::{Deserialize, Serialize};

/// Summary statistics for one column within one region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub mean: f64,
    /// Sample standard deviation (0.0 for fewer than two observations)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl ColumnSummary {
    fn from_values(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let std_dev = if values.len() < 2 {
            0.0
        } else {
            let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
            (ss / (n - 1.0)).sqrt()
        };
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self {
            mean,
            std_dev,
            min,
            max,
        }
    }
}

/// Descriptive statistics for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub region: RegionName,
    pub countries: usize,
    pub stem_percent: ColumnSummary,
    pub humanities_percent: ColumnSummary,
    pub balance_index: ColumnSummary,
}

/// Per-region summaries in sorted region order
///
/// Purely descriptive output for the reporting layer; empty datasets yield
/// an empty summary list rather than an error.
pub fn summarize_by_region(dataset: &CountryDataset) -> Vec<RegionSummary> {
    dataset
        .by_region()
        .into_iter()
        .map(|(region, records)| {
            let column = |f: fn(&CountryRecord) -> f64| {
                ColumnSummary::from_values(&records.iter().map(|r| f(r)).collect::<Vec<f64>>())
            };
            RegionSummary {
                region: region.clone(),
                countries: records.len(),
                stem_percent: column(|r| r.stem_percent().into_inner()),
                humanities_percent: column(|r| r.humanities_percent().into_inner()),
                balance_index: column(CountryRecord::balance_index),
            }
        })
        .collect()
}
