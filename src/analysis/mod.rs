//! Statistical analyzers over the loaded datasets
//!
//! Each analyzer is a pure, read-only computation: it borrows the dataset,
//! returns a freshly constructed result, and shares no mutable state with
//! the others. Calling any analyzer twice on the same dataset yields
//! identical results.

pub mod anova;
pub mod correlation;
pub mod descriptive;
pub mod stratification;
pub mod trend;

pub use anova::{AnovaResult, RegionalVarianceAnalyzer};
pub use correlation::{CorrelationAnalyzer, CorrelationReport, CorrelationResult};
pub use descriptive::{summarize_by_region, ColumnSummary, RegionSummary};
pub use stratification::{StratificationRatio, StratificationRatioCalculator};
pub use trend::{TimeSeriesTrendAnalyzer, TrendEstimate, TrendMetric};
