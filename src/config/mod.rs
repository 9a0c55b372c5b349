use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::formatter::{Formatter, DEFAULT_GROUP_SEPARATOR, DEFAULT_LINE_SEPARATOR};
use crate::core::writer::DEFAULT_OUTPUT_FILE;
use crate::error::{ConfigError, Result};

pub mod env;
pub mod validation;

use env::{EnvParser, EnvVars};
use validation::ConfigValidator;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File the combined text is saved to
    pub output_path: PathBuf,

    /// Placed between the lines of one row group
    pub line_separator: String,

    /// Placed between row groups
    pub group_separator: String,

    /// Exit with a failure status when any input or output error was logged
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            line_separator: DEFAULT_LINE_SEPARATOR.to_string(),
            group_separator: DEFAULT_GROUP_SEPARATOR.to_string(),
            strict: false,
        }
    }
}

impl Config {
    /// Build the configuration from defaults, an optional TOML file and the
    /// environment, in increasing order of priority. Nothing is written back.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Pick up a .env file if one is present
        dotenvy::dotenv().ok();

        let mut config = match config_path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };

        config.load_from_env()?;
        config.validate()?;

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from environment variables
    fn load_from_env(&mut self) -> Result<()> {
        if let Some(path) = EnvParser::parse_path(EnvVars::OUTPUT_PATH)? {
            self.output_path = path;
        }

        if let Some(separator) = EnvParser::parse_separator(EnvVars::LINE_SEPARATOR)? {
            self.line_separator = separator;
        }

        if let Some(separator) = EnvParser::parse_separator(EnvVars::GROUP_SEPARATOR)? {
            self.group_separator = separator;
        }

        if let Some(strict) = EnvParser::parse_bool(EnvVars::STRICT)? {
            self.strict = strict;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate_output_path(&self.output_path)?;
        ConfigValidator::validate_separator(&self.line_separator, "line_separator")?;
        ConfigValidator::validate_separator(&self.group_separator, "group_separator")?;
        Ok(())
    }

    pub fn formatter(&self) -> Formatter {
        Formatter::new(self.line_separator.as_str(), self.group_separator.as_str())
    }
}
