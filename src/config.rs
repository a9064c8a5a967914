//! Runtime configuration read from the environment

use anyhow::{Context, Result};
use std::time::Duration;

pub const RUN_MODE_VAR: &str = "ALGOVIZ_RUN_MODE";
pub const GATEWAY_URL_VAR: &str = "ALGOVIZ_MODEL_GATEWAY_URL";
pub const GATEWAY_TIMEOUT_VAR: &str = "ALGOVIZ_MODEL_GATEWAY_TIMEOUT_MS";
pub const PORT_VAR: &str = "ALGOVIZ_PORT";

const DEFAULT_GATEWAY_TIMEOUT_MS: u64 = 4000;
const DEFAULT_PORT: u16 = 8091;

/// Execution mode; only production suppresses catalog diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    Production,
    #[default]
    Development,
    Test,
}

impl RunMode {
    /// Interpret an explicit mode flag. Anything missing or unrecognized is
    /// treated as development so diagnostics stay visible.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag.map(|f| f.trim().to_lowercase()).as_deref() {
            Some("production") | Some("prod") => RunMode::Production,
            Some("test") => RunMode::Test,
            _ => RunMode::Development,
        }
    }

    pub fn from_env() -> Self {
        Self::from_flag(std::env::var(RUN_MODE_VAR).ok().as_deref())
    }

    pub fn is_production(&self) -> bool {
        matches!(self, RunMode::Production)
    }
}

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub run_mode: RunMode,
    pub gateway_url: Option<String>,
    pub gateway_timeout: Duration,
    pub port: u16,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            run_mode: RunMode::default(),
            gateway_url: None,
            gateway_timeout: Duration::from_millis(DEFAULT_GATEWAY_TIMEOUT_MS),
            port: DEFAULT_PORT,
        }
    }
}

impl AssistantConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup (environment, map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let gateway_url = lookup(GATEWAY_URL_VAR)
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        let gateway_timeout = match lookup(GATEWAY_TIMEOUT_VAR) {
            Some(raw) => Duration::from_millis(
                raw.trim()
                    .parse()
                    .with_context(|| format!("{} must be a number of milliseconds, got '{}'", GATEWAY_TIMEOUT_VAR, raw))?,
            ),
            None => defaults.gateway_timeout,
        };

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a port number, got '{}'", PORT_VAR, raw))?,
            None => defaults.port,
        };

        Ok(Self {
            run_mode: RunMode::from_flag(lookup(RUN_MODE_VAR).as_deref()),
            gateway_url,
            gateway_timeout,
            port,
        })
    }
}
