use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};
use tracing::warn;

/// What to do with a data row that cannot be turned into a match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedRowPolicy {
    #[default]
    Abort,
    Skip,
}

impl std::str::FromStr for MalformedRowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(Self::Abort),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown malformed row policy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoaderConfig {
    pub path: PathBuf,
    pub delimiter: u8,
    pub date_format: String,
    pub malformed_rows: MalformedRowPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("matches.csv"),
            delimiter: b',',
            date_format: "%Y-%m-%d".to_string(),
            malformed_rows: MalformedRowPolicy::Abort,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub loader: LoaderConfig,
}

impl SchedulerConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var("MATCHES_CSV_PATH") {
            config.loader.path = PathBuf::from(path);
        }
        if let Ok(delimiter) = env::var("MATCHES_CSV_DELIMITER") {
            match delimiter.as_bytes() {
                [byte] if byte.is_ascii() => config.loader.delimiter = *byte,
                _ => warn!("Ignoring MATCHES_CSV_DELIMITER={:?}: expected a single ASCII character", delimiter),
            }
        }
        if let Ok(date_format) = env::var("MATCHES_DATE_FORMAT") {
            config.loader.date_format = date_format;
        }
        if let Ok(policy) = env::var("MATCHES_MALFORMED_ROWS") {
            match policy.parse() {
                Ok(policy) => config.loader.malformed_rows = policy,
                Err(e) => warn!("Ignoring MATCHES_MALFORMED_ROWS: {}", e),
            }
        }

        config
    }
}
