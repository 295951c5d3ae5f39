//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::Path;

const CANDIDATES: [&str; 3] = [
    ".order-taker.toml",
    "order-taker.toml",
    ".config/order-taker.toml",
];

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched in order and defaults are used when none exists.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !Path::new(p).exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_string()),
            None => find_config_file(Path::new(".")),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations under `root`
fn find_config_file(root: &Path) -> Option<String> {
    CANDIDATES
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| path.exists())
        .map(|path| path.display().to_string())
}

/// Load, parse and validate a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read config file {}", path))?;

    let schema: ConfigSchema = toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path))?;

    schema.validate().context(format!("Validating {}", path))?;

    Ok(schema)
}
