use ::config::{Config, File};
use error_stack::ResultExt;
use thiserror::Error;

use super::{database_config::DatabaseConfig, sheets_config::SpreadsheetConfig};

pub const DEFAULT_CONFIG_PATH: &str = "Config";

const DEFAULTS: [(&str, &str); 5] = [
    ("database.path", "Drug_Supply.db"),
    ("database.query", "SELECT * FROM view_pr_plan"),
    ("sheets.priv_key", "credentials.json"),
    (
        "sheets.spreadsheet_id",
        "19EPvMA2LHyYgG2ljOvYNlseCRxH0nZa4P89tpTazKUA",
    ),
    ("sheets.worksheet_name", "Sheet1"),
];

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub sheets: SpreadsheetConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read the configuration")]
    Read,
    #[error("failed to deserialize the configuration")]
    Deserialize,
}

impl AppConfig {
    /// Loads the configuration from the file named by `CONFIG_PATH` (default `Config`, any
    /// extension the `config` crate understands). The file is optional; missing keys fall
    /// back to the built-in defaults.
    pub fn load() -> error_stack::Result<Self, ConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> error_stack::Result<Self, ConfigError> {
        let builder = DEFAULTS
            .iter()
            .try_fold(Config::builder(), |builder, (key, value)| {
                builder.set_default(*key, *value)
            })
            .change_context(ConfigError::Read)?;

        let config = builder
            .add_source(File::with_name(config_path).required(false))
            .build()
            .change_context(ConfigError::Read)
            .attach_printable_lazy(|| format!("config file: {config_path}"))?;

        config
            .try_deserialize::<AppConfig>()
            .change_context(ConfigError::Deserialize)
            .attach_printable_lazy(|| format!("config file: {config_path}"))
    }
}
