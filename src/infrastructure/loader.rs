//! CSV loading for the cross-sectional and longitudinal tables
//!
//! The loader is the single place where untyped file input becomes validated
//! domain data. Percentages are validated into newtypes here, and the balance
//! index is re-derived from the percentages rather than trusted from the
//! stored column; a stored value that disagrees is logged, not propagated.

use crate::domain::{
    correlates, BalanceIndexModel, BalanceIndexValue, CountryDataset, CountryName, CountryRecord,
    ObservationYear, Percentage, RegionName, TimeSeriesDataset, TimeSeriesPoint, VariableName,
};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

/// Tolerance for the stored balance_index column sanity check
const STORED_INDEX_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Deserialize)]
struct CountryRow {
    country: String,
    region: String,
    stem_percent: f64,
    humanities_percent: f64,
    balance_index: f64,
    #[allow(dead_code)]
    stem_humanities_ratio: f64,
    democratic_participation_index: f64,
    innovation_capacity_index: f64,
    civic_engagement_score: f64,
    social_trust_level: f64,
    patent_citations_per_capita: f64,
    democratic_erosion_risk: f64,
}

#[derive(Debug, Deserialize)]
struct TimeSeriesRow {
    year: i32,
    region: String,
    stem_percent: f64,
    humanities_percent: f64,
    balance_index: f64,
}

fn percentage(row: usize, field: &str, value: f64) -> Result<Percentage> {
    Percentage::try_new(value).map_err(|_| {
        Error::invalid_record(row, format!("{field} must be between 0 and 100, got {value}"))
    })
}

fn variable(name: &str) -> VariableName {
    VariableName::try_new(name.to_string()).expect("correlate column names are non-empty")
}

/// Load the cross-sectional country table
pub fn load_country_dataset(path: &Path) -> Result<CountryDataset> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut records = Vec::new();

    for (index, row) in reader.deserialize::<CountryRow>().enumerate() {
        // Header is line 1; data rows start at line 2
        let line = index + 2;
        let row = row?;

        let country = CountryName::try_new(row.country)
            .map_err(|_| Error::invalid_record(line, "country name must not be empty"))?;
        let region = RegionName::try_new(row.region)
            .map_err(|_| Error::invalid_record(line, "region must not be empty"))?;
        let stem = percentage(line, "stem_percent", row.stem_percent)?;
        let humanities = percentage(line, "humanities_percent", row.humanities_percent)?;

        let derived = BalanceIndexModel::compute(stem, humanities).index.into_inner();
        if (derived - row.balance_index).abs() > STORED_INDEX_TOLERANCE {
            warn!(
                country = %country,
                stored = row.balance_index,
                derived,
                "stored balance_index disagrees with derived value; using derived"
            );
        }

        let mut correlate_map = BTreeMap::new();
        correlate_map.insert(
            variable(correlates::DEMOCRATIC_PARTICIPATION),
            row.democratic_participation_index,
        );
        correlate_map.insert(
            variable(correlates::INNOVATION_CAPACITY),
            row.innovation_capacity_index,
        );
        correlate_map.insert(
            variable(correlates::CIVIC_ENGAGEMENT),
            row.civic_engagement_score,
        );
        correlate_map.insert(variable(correlates::SOCIAL_TRUST), row.social_trust_level);
        correlate_map.insert(
            variable(correlates::PATENT_CITATIONS),
            row.patent_citations_per_capita,
        );
        correlate_map.insert(
            variable(correlates::DEMOCRATIC_EROSION_RISK),
            row.democratic_erosion_risk,
        );

        records.push(CountryRecord::new(
            country,
            region,
            stem,
            humanities,
            correlate_map,
        ));
    }

    info!(countries = records.len(), path = %path.display(), "country dataset loaded");
    Ok(CountryDataset::new(records))
}

/// Load the longitudinal (region, year) table
pub fn load_time_series(path: &Path) -> Result<TimeSeriesDataset> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut points = Vec::new();

    for (index, row) in reader.deserialize::<TimeSeriesRow>().enumerate() {
        let line = index + 2;
        let row = row?;

        let region = RegionName::try_new(row.region)
            .map_err(|_| Error::invalid_record(line, "region must not be empty"))?;
        let year = ObservationYear::try_new(row.year)
            .map_err(|_| Error::invalid_record(line, format!("implausible year {}", row.year)))?;
        let stem = percentage(line, "stem_percent", row.stem_percent)?;
        let humanities = percentage(line, "humanities_percent", row.humanities_percent)?;
        let balance = BalanceIndexValue::try_new(row.balance_index).map_err(|_| {
            Error::invalid_record(
                line,
                format!("balance_index must be in [0, 1], got {}", row.balance_index),
            )
        })?;

        points.push(TimeSeriesPoint::new(region, year, stem, humanities, balance));
    }

    info!(observations = points.len(), path = %path.display(), "time series loaded");
    Ok(TimeSeriesDataset::new(points))
}
