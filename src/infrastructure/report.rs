//! Reproduction report output
//!
//! Writes two artifacts into the configured output directory: a
//! human-readable text report mirroring the manuscript's reproduction
//! summary, and a JSON file with the full structured results for downstream
//! tooling.

use crate::application::ReproductionOutcome;
use crate::error::Result;
use chrono::Utc;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Locations of the written artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub text: PathBuf,
    pub json: PathBuf,
}

/// Writes reproduction reports to an output directory
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Render and write both artifacts, creating the directory if needed
    pub fn write(&self, outcome: &ReproductionOutcome) -> Result<ReportPaths> {
        fs::create_dir_all(&self.output_dir)?;

        let text = self.output_dir.join("reproduction_report.txt");
        fs::write(&text, render_text_report(outcome))?;

        let json = self.output_dir.join("statistical_results.json");
        fs::write(&json, serde_json::to_string_pretty(outcome)?)?;

        info!(text = %text.display(), json = %json.display(), "reports written");
        Ok(ReportPaths { text, json })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

fn render_text_report(outcome: &ReproductionOutcome) -> String {
    let mut out = String::new();
    let status = if outcome.all_claims_pass {
        "SUCCESS"
    } else {
        "ISSUES DETECTED"
    };

    let _ = writeln!(out, "DIGITAL STRATIFICATION RESEARCH - REPRODUCTION REPORT");
    let _ = writeln!(out, "====================================================");
    let _ = writeln!(out, "Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "Reproduction status: {status}");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Dataset: {} countries, {} longitudinal observations",
        outcome.countries, outcome.observations
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "DESCRIPTIVE STATISTICS BY REGION");
    for summary in &outcome.summaries {
        let _ = writeln!(
            out,
            "  {} (n={}): STEM {:.1}% +/- {:.1}, Humanities {:.1}% +/- {:.1}, Balance {:.3}",
            summary.region,
            summary.countries,
            summary.stem_percent.mean,
            summary.stem_percent.std_dev,
            summary.humanities_percent.mean,
            summary.humanities_percent.std_dev,
            summary.balance_index.mean,
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "CORRELATIONS WITH THE BALANCE INDEX");
    for result in outcome.correlations.iter() {
        let _ = writeln!(
            out,
            "  {:<35} r = {:+.3}  p = {:.3e}  (n = {})",
            result.variable,
            result.r.into_inner(),
            result.p_value.into_inner(),
            result.n,
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "REGIONAL ANOVA");
    if outcome.anova.degenerate {
        let _ = writeln!(out, "  degenerate: all balance index values identical");
    } else {
        let _ = writeln!(
            out,
            "  F({}, {}) = {:.1}, p = {:.3e}, eta squared = {:.3}",
            outcome.anova.df_between,
            outcome.anova.df_within,
            outcome.anova.f_statistic,
            outcome.anova.p_value,
            outcome.anova.eta_squared.into_inner(),
        );
    }
    for (region, mean) in &outcome.anova.group_means {
        let _ = writeln!(out, "  {region}: mean balance index {mean:.3}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "DIGITAL STRATIFICATION RATIO");
    let _ = writeln!(
        out,
        "  STEM gap {:.1} points / Humanities gap {:.1} points = {:.2}:1",
        outcome.ratio.stem_gap, outcome.ratio.humanities_gap, outcome.ratio.ratio,
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "TIME SERIES TRENDS (units per year)");
    for trend in &outcome.trends {
        let _ = writeln!(
            out,
            "  {} {}: {:+.2} over {} years",
            trend.region, trend.metric, trend.slope_per_year, trend.years,
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "MANUSCRIPT CLAIMS VALIDATION");
    for claim in &outcome.claims {
        let mark = if claim.passes { "PASS" } else { "FAIL" };
        let _ = writeln!(out, "  [{mark}] {}", claim.description);
        let _ = writeln!(out, "         {}", claim.observed);
    }

    out
}
