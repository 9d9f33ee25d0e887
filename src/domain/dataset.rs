//! In-memory datasets for the cross-sectional and longitudinal tables
//!
//! Both datasets are built once by the loader and read-only for the rest of
//! a reproduction run. Derived balance metrics are recomputed on demand, not
//! stored mutably.

use crate::domain::balance::{BalanceIndexModel, BalanceIndexResult};
use crate::domain::types::{
    BalanceIndexValue, CountryName, ObservationYear, Percentage, RegionName, VariableName,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column names of the correlate variables in the cross-sectional table
pub mod correlates {
    pub const DEMOCRATIC_PARTICIPATION: &str = "democratic_participation_index";
    pub const INNOVATION_CAPACITY: &str = "innovation_capacity_index";
    pub const CIVIC_ENGAGEMENT: &str = "civic_engagement_score";
    pub const SOCIAL_TRUST: &str = "social_trust_level";
    pub const PATENT_CITATIONS: &str = "patent_citations_per_capita";
    pub const DEMOCRATIC_EROSION_RISK: &str = "democratic_erosion_risk";

    /// All correlate columns in the order the manuscript reports them
    pub const ALL: [&str; 6] = [
        DEMOCRATIC_PARTICIPATION,
        INNOVATION_CAPACITY,
        CIVIC_ENGAGEMENT,
        SOCIAL_TRUST,
        PATENT_CITATIONS,
        DEMOCRATIC_EROSION_RISK,
    ];
}

/// One country's cross-sectional observation
///
/// Immutable value: percentages are validated at construction and the
/// correlate map is fixed once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    country: CountryName,
    region: RegionName,
    stem_percent: Percentage,
    humanities_percent: Percentage,
    correlates: BTreeMap<VariableName, f64>,
}

impl CountryRecord {
    pub fn new(
        country: CountryName,
        region: RegionName,
        stem_percent: Percentage,
        humanities_percent: Percentage,
        correlates: BTreeMap<VariableName, f64>,
    ) -> Self {
        Self {
            country,
            region,
            stem_percent,
            humanities_percent,
            correlates,
        }
    }

    pub fn country(&self) -> &CountryName {
        &self.country
    }

    pub fn region(&self) -> &RegionName {
        &self.region
    }

    pub fn stem_percent(&self) -> Percentage {
        self.stem_percent
    }

    pub fn humanities_percent(&self) -> Percentage {
        self.humanities_percent
    }

    /// Derived balance metrics for this record
    pub fn balance(&self) -> BalanceIndexResult {
        BalanceIndexModel::compute(self.stem_percent, self.humanities_percent)
    }

    /// Balance index as a raw value, for statistical aggregation
    pub fn balance_index(&self) -> f64 {
        self.balance().index.into_inner()
    }

    /// Look up a correlate variable value
    pub fn correlate(&self, variable: &VariableName) -> Option<f64> {
        self.correlates.get(variable).copied()
    }
}

/// Ordered, read-only collection of country records
///
/// Row order is the load order; no duplicate-country constraint is enforced
/// here (that is the loader's responsibility).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CountryDataset {
    records: Vec<CountryRecord>,
}

impl CountryDataset {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Balance index column in row order
    pub fn balance_indices(&self) -> Vec<f64> {
        self.records.iter().map(CountryRecord::balance_index).collect()
    }

    /// Records grouped by observed region label, in sorted region order
    pub fn by_region(&self) -> BTreeMap<&RegionName, Vec<&CountryRecord>> {
        let mut groups: BTreeMap<&RegionName, Vec<&CountryRecord>> = BTreeMap::new();
        for record in &self.records {
            groups.entry(record.region()).or_default().push(record);
        }
        groups
    }

    /// Mean of a per-record value over one region, if the region is present
    pub fn regional_mean<F>(&self, region: &RegionName, value: F) -> Option<f64>
    where
        F: Fn(&CountryRecord) -> f64,
    {
        let values: Vec<f64> = self
            .records
            .iter()
            .filter(|r| r.region() == region)
            .map(value)
            .collect();
        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }
}

/// One longitudinal observation, keyed by (region, year)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    region: RegionName,
    year: ObservationYear,
    stem_percent: Percentage,
    humanities_percent: Percentage,
    balance_index: BalanceIndexValue,
}

impl TimeSeriesPoint {
    pub fn new(
        region: RegionName,
        year: ObservationYear,
        stem_percent: Percentage,
        humanities_percent: Percentage,
        balance_index: BalanceIndexValue,
    ) -> Self {
        Self {
            region,
            year,
            stem_percent,
            humanities_percent,
            balance_index,
        }
    }

    pub fn region(&self) -> &RegionName {
        &self.region
    }

    pub fn year(&self) -> ObservationYear {
        self.year
    }

    pub fn stem_percent(&self) -> Percentage {
        self.stem_percent
    }

    pub fn humanities_percent(&self) -> Percentage {
        self.humanities_percent
    }

    pub fn balance_index(&self) -> BalanceIndexValue {
        self.balance_index
    }
}

/// Ordered, read-only collection of longitudinal observations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimeSeriesDataset {
    points: Vec<TimeSeriesPoint>,
}

impl TimeSeriesDataset {
    pub fn new(points: Vec<TimeSeriesPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    /// Distinct regions in first-observed order
    pub fn regions(&self) -> Vec<RegionName> {
        let mut seen = Vec::new();
        for point in &self.points {
            if !seen.contains(point.region()) {
                seen.push(point.region().clone());
            }
        }
        seen
    }
}
