use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_TITLE_COLUMN: &str = "נושא";
pub const DEFAULT_BODY_COLUMN: &str = "גוף";
pub const DEFAULT_ENCODING: &str = "windows-1255";

/// Ingestion settings: defaults, then an optional file, then `LEADS_*` variables.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub title_column: String,
    pub body_column: String,
    pub encoding: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            title_column: DEFAULT_TITLE_COLUMN.to_string(),
            body_column: DEFAULT_BODY_COLUMN.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl Settings {
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(file, Environment::with_prefix("LEADS"))
    }

    fn load_with_env(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("title_column", DEFAULT_TITLE_COLUMN)?
            .set_default("body_column", DEFAULT_BODY_COLUMN)?
            .set_default("encoding", DEFAULT_ENCODING)?;
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder.add_source(env).build()?.try_deserialize()
    }
}
