use std::{num::NonZeroUsize, path::PathBuf};

use ais_core::{InfoOptions, Mmsi, OpenRange};
use config::{Config, ConfigError, File};
use serde::Deserialize;
use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Environment {
    Local,
    Development,
    Production,
    Test,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub environment: Environment,
    pub log_level: LogLevel,
    /// Files to read newline delimited json from, stdin is used when empty.
    #[serde(default)]
    pub sources: Vec<PathBuf>,
    pub max_line_length: usize,
    pub width: NonZeroUsize,
    pub height: NonZeroUsize,
    pub per_sender: bool,
    pub with_map: bool,
    #[serde(default)]
    pub filter: FilterSettings,
}

#[derive(Deserialize, Debug, Default)]
pub struct FilterSettings {
    #[serde(default)]
    pub mmsis: Vec<Mmsi>,
    /// File with one mmsi per line, appended to `mmsis`.
    pub mmsi_file: Option<PathBuf>,
    pub type_id: Option<u32>,
    pub longitude: Option<OpenRange>,
    pub latitude: Option<OpenRange>,
}

impl Settings {
    pub fn new() -> Result<Settings, ConfigError> {
        let environment = match std::env::var("APP_ENVIRONMENT") {
            Ok(v) => v.parse::<Environment>().map_err(|e| {
                ConfigError::Message(format!("failed to parse APP_ENVIRONMENT '{v}': {e}"))
            })?,
            Err(_) => Environment::Local,
        };

        let builder = Config::builder()
            .add_source(
                File::with_name(&format!("config/{}", environment.as_ref().to_lowercase()))
                    .required(true),
            )
            .add_source(
                config::Environment::with_prefix("AIS_INFO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("sources")
                    .with_list_parse_key("filter.mmsis")
                    .try_parsing(true),
            )
            .set_override("environment", environment.as_ref())?;

        let config = builder.build()?;

        config.try_deserialize()
    }

    pub fn info_options(&self) -> InfoOptions {
        InfoOptions {
            width: self.width,
            height: self.height,
            per_sender: self.per_sender,
            with_map: self.with_map,
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
