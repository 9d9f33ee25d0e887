//! Reference constants for the manuscript claims
//!
//! Every threshold the validator checks lives here, so the claim table is
//! data-driven and the validator stays independent of the specific
//! manuscript being reproduced.

/// Region the manuscript characterizes as extremely STEM-heavy
pub const STEM_FOCUSED_REGION: &str = "Asia";

/// Region the manuscript characterizes as balanced
pub const BALANCED_REGION: &str = "Europe";

/// Expected bounds on the STEM-focused region's mean STEM percentage
pub const STEM_FOCUSED_MEAN_STEM_MIN: f64 = 43.0;
pub const STEM_FOCUSED_MEAN_STEM_MAX: f64 = 44.5;

/// The STEM-focused region's mean balance index must stay below this
pub const STEM_FOCUSED_BALANCE_MAX: f64 = 0.2;

/// The balanced region's mean balance index must exceed this
pub const BALANCED_BALANCE_MIN: f64 = 0.4;

/// Minimum correlation with democratic participation
pub const DEMOCRATIC_PARTICIPATION_R_MIN: f64 = 0.6;

/// Minimum correlation with innovation capacity
pub const INNOVATION_CAPACITY_R_MIN: f64 = 0.8;

/// Minimum ANOVA effect size
pub const ETA_SQUARED_MIN: f64 = 0.9;

/// Published Digital Stratification Ratio and accepted deviation
pub const STRATIFICATION_RATIO_EXPECTED: f64 = 2.90;
pub const STRATIFICATION_RATIO_TOLERANCE: f64 = 0.15;
