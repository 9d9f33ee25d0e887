//! I/O collaborators around the statistical core: CSV loading and report
//! output. The core never touches files itself.

pub mod loader;
pub mod report;

pub use loader::{load_country_dataset, load_time_series};
pub use report::{ReportPaths, ReportWriter};
