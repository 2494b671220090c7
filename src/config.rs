//! Runtime configuration.
//!
//! Values come from the environment first; CLI flags override them in
//! `main`. Unset variables fall back to the defaults below, while set but
//! unparsable ones are errors.

use std::{path::PathBuf, str::FromStr, time::Duration};

use crate::{
    core::default_scratch_dir,
    error::{FplError, Result},
    fpl::http::{BOOTSTRAP_URL, DEFAULT_TIMEOUT},
    lineup::formulation::SquadRules,
    API_URL_ENV_VAR, BUDGET_ENV_VAR, FETCH_TIMEOUT_ENV_VAR, PORT_ENV_VAR, SCRATCH_DIR_ENV_VAR,
};

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub api_url: String,
    pub fetch_timeout: Duration,
    pub rules: SquadRules,
    /// `None` keeps the candidate table in memory.
    pub scratch_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: BOOTSTRAP_URL.to_string(),
            fetch_timeout: DEFAULT_TIMEOUT,
            rules: SquadRules::default(),
            scratch_dir: Some(default_scratch_dir()),
        }
    }
}

fn parse_var<T: FromStr>(var: &str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| FplError::InvalidConfig {
                var: var.to_string(),
                value,
            }),
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value when set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_var(PORT_ENV_VAR, lookup(PORT_ENV_VAR), defaults.port)?;
        let timeout_secs = parse_var(
            FETCH_TIMEOUT_ENV_VAR,
            lookup(FETCH_TIMEOUT_ENV_VAR),
            defaults.fetch_timeout.as_secs(),
        )?;
        let budget = parse_var(BUDGET_ENV_VAR, lookup(BUDGET_ENV_VAR), defaults.rules.budget)?;

        let api_url = lookup(API_URL_ENV_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(defaults.api_url);

        let scratch_dir = match lookup(SCRATCH_DIR_ENV_VAR) {
            Some(dir) if dir.trim().is_empty() => None,
            Some(dir) => Some(PathBuf::from(dir)),
            None => defaults.scratch_dir,
        };

        Ok(Self {
            port,
            api_url,
            fetch_timeout: Duration::from_secs(timeout_secs),
            rules: defaults.rules.with_budget(budget),
            scratch_dir,
        })
    }
}
