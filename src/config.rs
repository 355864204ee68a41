use std::fs;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use crate::classic::CipherVariant;
use crate::digest::DigestAlgorithm;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    // default cipher when the command line does not name one
    #[serde(default)]
    pub cipher: Option<CipherVariant>,

    #[serde(default)]
    pub digest: DigestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    // tracing level: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> anyhow::Result<LevelFilter> {
        self.level
            .parse()
            .with_context(|| format!("invalid log level: {}", self.level))
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    // algorithms computed by `hash` when none are given
    #[serde(default = "default_digest_algorithms")]
    pub algorithms: Vec<DigestAlgorithm>,

    // render hex digits in uppercase
    #[serde(default)]
    pub uppercase: bool,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            algorithms: default_digest_algorithms(),
            uppercase: false,
        }
    }
}

fn default_digest_algorithms() -> Vec<DigestAlgorithm> {
    DigestAlgorithm::ALL.to_vec()
}

pub fn load(path: &str) -> anyhow::Result<Config> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read config {}", path))?;
    parse(&content).with_context(|| format!("failed to parse config {}", path))
}

pub fn parse(content: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(content)?;
    config.log.level_filter()?;
    Ok(config)
}
