//! Reproduction pipeline orchestration
//!
//! Sequences the phases of a manuscript reproduction run: load both tables,
//! run every analyzer, validate the claims, and write the reports. All
//! analyzers receive the datasets by shared reference; nothing is mutated
//! after load.

use crate::analysis::{
    summarize_by_region, AnovaResult, CorrelationAnalyzer, CorrelationReport,
    RegionSummary, RegionalVarianceAnalyzer, StratificationRatio,
    StratificationRatioCalculator, TimeSeriesTrendAnalyzer, TrendEstimate, TrendMetric,
};
use crate::config::Settings;
use crate::domain::{correlates, CountryDataset, TimeSeriesDataset, VariableName};
use crate::error::Result;
use crate::infrastructure::{load_country_dataset, load_time_series, ReportPaths, ReportWriter};
use crate::validation::{ManuscriptValidator, ValidationClaim};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};

/// Everything a reproduction run computed, in one serializable value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReproductionOutcome {
    pub countries: usize,
    pub observations: usize,
    pub summaries: Vec<RegionSummary>,
    pub correlations: CorrelationReport,
    pub anova: AnovaResult,
    pub ratio: StratificationRatio,
    pub trends: Vec<TrendEstimate>,
    pub claims: Vec<ValidationClaim>,
    pub all_claims_pass: bool,
}

/// The reproduction application
pub struct Application {
    settings: Settings,
}

impl Application {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run the full pipeline and write the reports
    #[instrument(skip(self))]
    pub fn run(&self) -> Result<(ReproductionOutcome, ReportPaths)> {
        info!("phase 1: loading datasets");
        let dataset = load_country_dataset(Path::new(&self.settings.data.country_table))?;
        let series = load_time_series(Path::new(&self.settings.data.time_series_table))?;

        let outcome = Self::analyze(&dataset, &series)?;

        info!("phase 4: writing reports");
        let writer = ReportWriter::new(&self.settings.output.directory);
        let paths = writer.write(&outcome)?;

        if outcome.all_claims_pass {
            info!("all manuscript claims reproduced");
        } else {
            info!("one or more manuscript claims failed validation");
        }

        Ok((outcome, paths))
    }

    /// Run every analyzer and the validator over already-loaded datasets
    pub fn analyze(
        dataset: &CountryDataset,
        series: &TimeSeriesDataset,
    ) -> Result<ReproductionOutcome> {
        info!("phase 2: statistical analysis");
        let summaries = summarize_by_region(dataset);

        let variables: Vec<VariableName> = correlates::ALL
            .iter()
            .map(|name| {
                VariableName::try_new((*name).to_string())
                    .expect("correlate column names are non-empty")
            })
            .collect();
        let correlations = CorrelationAnalyzer::analyze(dataset, &variables)?;
        let anova = RegionalVarianceAnalyzer::analyze(dataset)?;
        let ratio = StratificationRatioCalculator::compute(dataset)?;

        let mut trends = Vec::new();
        for metric in TrendMetric::ALL {
            trends.extend(TimeSeriesTrendAnalyzer::trends_by_region(series, metric)?);
        }

        info!("phase 3: manuscript claims validation");
        let claims = ManuscriptValidator::validate(dataset, &correlations, &anova, &ratio);
        let all_claims_pass = ManuscriptValidator::all_pass(&claims);

        Ok(ReproductionOutcome {
            countries: dataset.len(),
            observations: series.len(),
            summaries,
            correlations,
            anova,
            ratio,
            trends,
            claims,
            all_claims_pass,
        })
    }
}
