//! Configuration loader for failover
//!
//! Layers defaults, an optional settings file and `FAILOVER_*` environment
//! variables into a validated [`BreakerSettings`].

use crate::config::BreakerSettings;
use failover_core::{
    constants::{
        FAILOVER_CLOSE_ON_RECOVERY_VAR, FAILOVER_MAX_ATTEMPTS_VAR, FAILOVER_RESET_TIMEOUT_MS_VAR,
    },
    Error, Result,
};
use std::path::{Path, PathBuf};
use std::str::FromStr;

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Configuration loader that resolves breaker settings at startup
pub struct ConfigLoader {
    /// Optional settings file
    file: Option<PathBuf>,
    /// Source of environment overrides
    env: EnvLookup,
}

impl ConfigLoader {
    /// Create a loader that reads the process environment
    pub fn new() -> Self {
        Self {
            file: None,
            env: Box::new(|key| std::env::var(key).ok()),
        }
    }

    /// Read settings from a JSON file before applying overrides
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Replace the environment lookup, mainly for tests
    pub fn env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.env = Box::new(lookup);
        self
    }

    /// Ignore the environment entirely
    pub fn without_env(self) -> Self {
        self.env_lookup(|_| None)
    }

    /// Load and validate the settings
    pub fn load(self) -> Result<BreakerSettings> {
        let settings = self.load_unvalidated()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Layer file and environment without validating, for callers that
    /// apply further overrides and validate the final result themselves
    pub fn load_unvalidated(self) -> Result<BreakerSettings> {
        let mut settings = match &self.file {
            Some(path) => load_file(path)?,
            None => BreakerSettings::default(),
        };

        self.apply_env_overrides(&mut settings)?;

        tracing::debug!(
            reset_timeout_ms = settings.reset_timeout_ms,
            max_attempts = settings.max_attempts,
            close_on_recovery = settings.close_on_recovery,
            "Loaded breaker settings"
        );
        Ok(settings)
    }

    fn apply_env_overrides(&self, settings: &mut BreakerSettings) -> Result<()> {
        if let Some(value) = self.lookup::<u64>(FAILOVER_RESET_TIMEOUT_MS_VAR)? {
            settings.reset_timeout_ms = value;
        }
        if let Some(value) = self.lookup::<usize>(FAILOVER_MAX_ATTEMPTS_VAR)? {
            settings.max_attempts = value;
        }
        if let Some(raw) = (self.env)(FAILOVER_CLOSE_ON_RECOVERY_VAR) {
            settings.close_on_recovery = parse_bool(FAILOVER_CLOSE_ON_RECOVERY_VAR, &raw)?;
        }
        Ok(())
    }

    fn lookup<T>(&self, variable: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match (self.env)(variable) {
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|e| Error::environment(variable, format!("invalid value '{raw}': {e}"))),
            None => Ok(None),
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn load_file(path: &Path) -> Result<BreakerSettings> {
    let content =
        std::fs::read_to_string(path).map_err(|e| Error::file_system(path, "read", e))?;
    BreakerSettings::from_json(&content)
}

fn parse_bool(variable: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::environment(
            variable,
            format!("invalid value '{raw}': expected true, false, 1 or 0"),
        )),
    }
}
