use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub data: DataSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub country_table: String,
    pub time_series_table: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputSettings {
    pub directory: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("data.country_table", "data/balance_index_47_countries.csv")?
            .set_default("data.time_series_table", "data/time_series_data.csv")?
            .set_default("output.directory", "results")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "plain")?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("STRATIFICATION").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
