use std::env;

use crate::assembler::AssemblerOptions;
use crate::error::{OgpError, OgpResult};

pub const DEFAULT_LOG_FILTER: &str = "ogp=info";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub legacy_determiner: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            legacy_determiner: true,
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Read configuration from the environment, after loading `.env` if present.
    pub fn from_env() -> OgpResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            legacy_determiner: match env::var("OGP_LEGACY_DETERMINER") {
                Ok(value) => parse_bool("OGP_LEGACY_DETERMINER", &value)?,
                Err(_) => true,
            },
            log_format: match env::var("OGP_LOG_FORMAT") {
                Ok(value) => parse_log_format(&value)?,
                Err(_) => LogFormat::Text,
            },
        })
    }

    pub fn assembler_options(&self) -> AssemblerOptions {
        AssemblerOptions {
            legacy_determiner: self.legacy_determiner,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> OgpResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OgpError::Config(format!(
            "{key} must be a boolean, got {value:?}"
        ))),
    }
}

fn parse_log_format(value: &str) -> OgpResult<LogFormat> {
    match value.trim().to_ascii_lowercase().as_str() {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(OgpError::Config(format!(
            "OGP_LOG_FORMAT must be text or json, got {value:?}"
        ))),
    }
}
