use std::{num::ParseIntError, path::PathBuf};

use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to load configuration"))]
    Config {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: config::ConfigError,
    },
    #[snafu(display("Failed to open source '{}'", path.display()))]
    OpenSource {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("Failed to read mmsi file '{}'", path.display()))]
    ReadMmsiFile {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("Invalid mmsi '{value}'"))]
    ParseMmsi {
        #[snafu(implicit)]
        location: Location,
        value: String,
        #[snafu(source)]
        error: ParseIntError,
    },
    #[snafu(display("Failed to write report"))]
    Report {
        #[snafu(implicit)]
        location: Location,
        source: ais_core::Error,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum AisMessageError {
    #[snafu(display("Encountered an unsupported message type: '{message_type}'"))]
    InvalidMessageType {
        #[snafu(implicit)]
        location: Location,
        message_type: u32,
    },
    #[snafu(display("Failed to deserialize ais message"))]
    Deserialize {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: serde_json::Error,
    },
}
