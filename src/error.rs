use thiserror::Error;

/// Errors raised by the statistical core at the point of detection.
///
/// Analyzers never catch or suppress each other's errors; the orchestration
/// layer decides whether to abort or report partial results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("{field} percentage must be between 0 and 100 (got {value})")]
    Range { field: &'static str, value: f64 },

    #[error("{context} requires at least {required} observations, got {actual}")]
    InsufficientData {
        context: &'static str,
        required: usize,
        actual: usize,
    },

    #[error("ANOVA requires at least 2 regions, got {actual}")]
    InsufficientGroups { actual: usize },

    #[error("humanities spread is zero; stratification ratio is undefined")]
    DegenerateSpread,

    #[error("variable {variable} has zero variance; correlation is undefined")]
    ZeroVariance { variable: String },

    #[error("variable {variable} is missing from record {record}")]
    MissingVariable { variable: String, record: String },
}

/// Application error types for the reproduction pipeline
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },
}

impl Error {
    pub fn invalid_record(row: usize, message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            row,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
