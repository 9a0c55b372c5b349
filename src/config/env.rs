use std::env;
use std::path::PathBuf;
use crate::error::{Result, CombineError};

/// Environment variable configuration constants
pub struct EnvVars;

impl EnvVars {
    pub const OUTPUT_PATH: &'static str = "LYRIC_COMBINE_OUTPUT_PATH";
    pub const LINE_SEPARATOR: &'static str = "LYRIC_COMBINE_LINE_SEPARATOR";
    pub const GROUP_SEPARATOR: &'static str = "LYRIC_COMBINE_GROUP_SEPARATOR";
    pub const STRICT: &'static str = "LYRIC_COMBINE_STRICT";
}

/// Environment variable parsing utilities with validation
pub struct EnvParser;

impl EnvParser {
    /// Parse environment variable as a trimmed string; blank counts as unset
    pub fn parse_string(var_name: &str) -> Result<Option<String>> {
        match Self::parse_raw(var_name)? {
            Some(value) => {
                let trimmed = value.trim().to_string();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(trimmed))
                }
            }
            None => Ok(None),
        }
    }

    /// Parse environment variable holding a separator. Whitespace is kept
    /// and `\n`, `\r`, `\t` and `\\` escapes are decoded.
    pub fn parse_separator(var_name: &str) -> Result<Option<String>> {
        Ok(Self::parse_raw(var_name)?
            .filter(|value| !value.is_empty())
            .map(|value| unescape(&value)))
    }

    /// Parse environment variable as PathBuf
    pub fn parse_path(var_name: &str) -> Result<Option<PathBuf>> {
        Ok(Self::parse_string(var_name)?.map(PathBuf::from))
    }

    /// Parse environment variable as boolean with validation
    pub fn parse_bool(var_name: &str) -> Result<Option<bool>> {
        if let Some(value_str) = Self::parse_string(var_name)? {
            match value_str.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(Some(true)),
                "false" | "0" | "no" | "off" => Ok(Some(false)),
                _ => Err(CombineError::Validation(format!(
                    "Invalid boolean value in {}: '{}'. Use: true/false, 1/0, yes/no, on/off",
                    var_name, value_str
                )))
            }
        } else {
            Ok(None)
        }
    }

    fn parse_raw(var_name: &str) -> Result<Option<String>> {
        match env::var(var_name) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => {
                Err(CombineError::Validation(format!(
                    "Environment variable {} contains invalid UTF-8",
                    var_name
                )))
            }
        }
    }
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
