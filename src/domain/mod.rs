//! Domain types for the stratification analysis
//!
//! This module contains the core value types of the reproduction engine,
//! following type-driven development principles: quantities that carry an
//! invariant (percentages, index values, p-values) are validated newtypes,
//! and datasets are immutable after load.

pub mod balance;
pub mod dataset;
pub mod types;

pub use balance::{BalanceCategory, BalanceIndexModel, BalanceIndexResult};
pub use dataset::{correlates, CountryDataset, CountryRecord, TimeSeriesDataset, TimeSeriesPoint};
pub use types::{
    BalanceIndexValue, CorrelationCoefficient, CountryName, EtaSquared, ObservationYear,
    PValue, Percentage, RegionName, VariableName,
};
