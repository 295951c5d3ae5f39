//! Configuration schema definitions

use crate::error::{Error, Result};
use ordertaker_search::MatchOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ConfigSchema {
    /// Menu matching thresholds
    #[serde(default)]
    pub matching: MatchOptions,

    /// Order output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Log settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check that every threshold lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("matching.token_threshold", self.matching.token_threshold),
            ("matching.subset_weight", self.matching.subset_weight),
            ("matching.similarity_threshold", self.matching.similarity_threshold),
            ("output.low_confidence", self.output.low_confidence),
        ];

        for (key, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::invalid_config_value(
                    key,
                    value,
                    "a number between 0.0 and 1.0",
                ));
            }
        }

        Ok(())
    }
}

/// How a parsed order is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable receipt
    #[default]
    Text,
    /// The order result as JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::invalid_config_value(
                "output.format",
                other,
                "\"text\" or \"json\"",
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Order output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Items matched below this confidence are flagged for review
    #[serde(default = "default_low_confidence")]
    pub low_confidence: f64,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            low_confidence: default_low_confidence(),
            format: OutputFormat::default(),
        }
    }
}

fn default_low_confidence() -> f64 {
    0.8
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
