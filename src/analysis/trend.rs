//! Linear trend estimation over the longitudinal dataset
//!
//! Reproduces the manuscript's 2015-2024 trend slopes (e.g. Asia STEM
//! +0.36 points per year): observations are mean-aggregated to one value per
//! (region, year), then an ordinary-least-squares line is fitted with the
//! actual year values on the x axis, so gaps in the observed years are
//! handled correctly.

use crate::domain::{RegionName, TimeSeriesDataset, TimeSeriesPoint};
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Minimum distinct years for a slope estimate
const MIN_YEARS: usize = 2;

/// Which longitudinal column to fit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendMetric {
    StemPercent,
    HumanitiesPercent,
    BalanceIndex,
}

impl TrendMetric {
    /// All metrics in manuscript reporting order
    pub const ALL: [Self; 3] = [Self::StemPercent, Self::HumanitiesPercent, Self::BalanceIndex];

    fn value(&self, point: &TimeSeriesPoint) -> f64 {
        match self {
            Self::StemPercent => point.stem_percent().into_inner(),
            Self::HumanitiesPercent => point.humanities_percent().into_inner(),
            Self::BalanceIndex => point.balance_index().into_inner(),
        }
    }
}

impl fmt::Display for TrendMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StemPercent => write!(f, "stem_percent"),
            Self::HumanitiesPercent => write!(f, "humanities_percent"),
            Self::BalanceIndex => write!(f, "balance_index"),
        }
    }
}

/// Fitted trend for one (region, metric) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendEstimate {
    pub region: RegionName,
    pub metric: TrendMetric,
    /// OLS slope in metric units per year
    pub slope_per_year: f64,
    /// Number of distinct years behind the fit
    pub years: usize,
}

/// Fits per-region linear trends over the time series
pub struct TimeSeriesTrendAnalyzer;

impl TimeSeriesTrendAnalyzer {
    /// Slope of the requested metric for one region, in units per year
    ///
    /// No extrapolation: callers wanting projected values multiply the slope
    /// by elapsed years themselves.
    pub fn trend(
        series: &TimeSeriesDataset,
        region: &RegionName,
        metric: TrendMetric,
    ) -> Result<TrendEstimate, AnalysisError> {
        // Mean per observed year for this region
        let mut yearly: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
        for point in series.points() {
            if point.region() == region {
                let entry = yearly.entry(point.year().into_inner()).or_insert((0.0, 0));
                entry.0 += metric.value(point);
                entry.1 += 1;
            }
        }

        if yearly.len() < MIN_YEARS {
            return Err(AnalysisError::InsufficientData {
                context: "time series trend",
                required: MIN_YEARS,
                actual: yearly.len(),
            });
        }

        let points: Vec<(f64, f64)> = yearly
            .into_iter()
            .map(|(year, (sum, count))| (f64::from(year), sum / count as f64))
            .collect();
        let slope = Self::ols_slope(&points);

        debug!(%region, %metric, slope, years = points.len(), "trend fitted");

        Ok(TrendEstimate {
            region: region.clone(),
            metric,
            slope_per_year: slope,
            years: points.len(),
        })
    }

    /// Trends for every region in the series, for one metric
    pub fn trends_by_region(
        series: &TimeSeriesDataset,
        metric: TrendMetric,
    ) -> Result<Vec<TrendEstimate>, AnalysisError> {
        series
            .regions()
            .iter()
            .map(|region| Self::trend(series, region, metric))
            .collect()
    }

    fn ols_slope(points: &[(f64, f64)]) -> f64 {
        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;
        let mut num = 0.0;
        let mut den = 0.0;
        for (x, y) in points {
            num += (x - mean_x) * (y - mean_y);
            den += (x - mean_x).powi(2);
        }
        // den > 0: at least two distinct years reached this point
        num / den
    }
}
