use config::Config;
use error_stack::{Result, ResultExt};
use thiserror::Error;

use super::{report_config::ReportConfig, sheets_config::SpreadsheetConfig};

pub const DEFAULT_CONFIG_PATH: &str = "Config";

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub sheets: SpreadsheetConfig,
    pub report: ReportConfig,
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("Error reading config file '{0}'")]
    Read(String),
    #[error("Failed to deserialize config file '{0}'")]
    Deserialize(String),
}

impl AppConfig {
    /// Loads the configuration from `CONFIG_PATH` (or `Config`), falling back
    /// to the built-in defaults for every missing key. The file is optional.
    pub fn load() -> Result<AppConfig, AppConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> Result<AppConfig, AppConfigError> {
        let read_error = || AppConfigError::Read(config_path.to_string());

        let config = Config::builder()
            .set_default("sheets.priv_key", SpreadsheetConfig::DEFAULT_PRIV_KEY)
            .change_context_lazy(read_error)?
            .set_default("sheets.spreadsheet_id", SpreadsheetConfig::DEFAULT_SPREADSHEET_ID)
            .change_context_lazy(read_error)?
            .set_default("sheets.range", SpreadsheetConfig::DEFAULT_RANGE)
            .change_context_lazy(read_error)?
            .set_default("report.pie_chart_path", ReportConfig::DEFAULT_PIE_CHART_PATH)
            .change_context_lazy(read_error)?
            .set_default("report.bar_chart_path", ReportConfig::DEFAULT_BAR_CHART_PATH)
            .change_context_lazy(read_error)?
            .set_default("report.preview_rows", ReportConfig::DEFAULT_PREVIEW_ROWS as i64)
            .change_context_lazy(read_error)?
            .add_source(config::File::with_name(config_path).required(false))
            .build()
            .change_context_lazy(read_error)?;

        config
            .try_deserialize::<AppConfig>()
            .change_context_lazy(|| AppConfigError::Deserialize(config_path.to_string()))
            .attach_printable("Make sure all fields in the configuration file have the right type.")
    }
}
