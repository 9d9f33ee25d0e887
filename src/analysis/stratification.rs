//! Digital Stratification Ratio
//!
//! The ratio of the cross-country spread in STEM enrollment to the spread in
//! humanities enrollment (manuscript value: 2.90:1). A pure, order-independent
//! aggregate over the full dataset.

use crate::domain::CountryDataset;
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};

/// Digital Stratification Ratio with the gaps behind it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StratificationRatio {
    /// max(STEM%) - min(STEM%) across all countries
    pub stem_gap: f64,
    /// max(Humanities%) - min(Humanities%) across all countries
    pub humanities_gap: f64,
    /// stem_gap / humanities_gap
    pub ratio: f64,
}

/// Computes the Digital Stratification Ratio
pub struct StratificationRatioCalculator;

impl StratificationRatioCalculator {
    /// Compute the ratio of enrollment spreads
    ///
    /// Fails when the dataset is too small for a spread, or when every
    /// country has the same humanities percentage (the ratio is undefined
    /// and must not silently become infinity).
    pub fn compute(dataset: &CountryDataset) -> Result<StratificationRatio, AnalysisError> {
        if dataset.len() < 2 {
            return Err(AnalysisError::InsufficientData {
                context: "stratification ratio",
                required: 2,
                actual: dataset.len(),
            });
        }

        let stem_gap = Self::spread(dataset, |r| r.stem_percent().into_inner());
        let humanities_gap = Self::spread(dataset, |r| r.humanities_percent().into_inner());

        if humanities_gap == 0.0 {
            return Err(AnalysisError::DegenerateSpread);
        }

        Ok(StratificationRatio {
            stem_gap,
            humanities_gap,
            ratio: stem_gap / humanities_gap,
        })
    }

    fn spread<F>(dataset: &CountryDataset, value: F) -> f64
    where
        F: Fn(&crate::domain::CountryRecord) -> f64,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for record in dataset.records() {
            let v = value(record);
            min = min.min(v);
            max = max.max(v);
        }
        max - min
    }
}
