//! Runtime settings for the binary, read from the environment (and `.env`).

use crate::output::OutputFormat;
use std::error::Error;

/// Default log4rs configuration file.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Default number of items pulled from a sequence when no count is given.
pub const DEFAULT_TAKE: usize = 256;

pub const ENV_LOG_CONFIG: &str = "IPADDR_SEQ_LOG_CONFIG";
pub const ENV_TAKE: &str = "IPADDR_SEQ_TAKE";
pub const ENV_OUTPUT: &str = "IPADDR_SEQ_OUTPUT";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the log4rs YAML file.
    pub log_config: String,
    /// Cap on items pulled from `range` / `split`.
    pub take: usize,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            take: DEFAULT_TAKE,
            output: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }
        if let Some(take) = lookup(ENV_TAKE) {
            config.take = take
                .trim()
                .parse::<usize>()
                .map_err(|e| format!("Invalid {ENV_TAKE}={take}: {e}"))?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output.parse()?;
        }

        Ok(config)
    }
}
