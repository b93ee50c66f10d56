//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path, or search the standard locations
    ///
    /// An explicit path that does not exist is an error; when no path is given
    /// and no file is found, defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(Error::new(
                    crate::ErrorCode::ConfigNotFound,
                    format!("Configuration file not found: {}", p.display()),
                )
                .with_suggestion("Create the file or omit --config to use defaults"));
            }
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };
        schema
            .validate()
            .context("While validating jowafrique configuration")?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = [
        "jowafrique.toml",
        ".jowafrique.toml",
        ".config/jowafrique.toml",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("jowafrique").join("config.toml"));
    }

    candidates.into_iter().find(|p| p.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {e}", path.display())).with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| Error::config_parse(path, &e).with_source(e))
}
