//! Threshold and color settings for the `bench` binary.
//!
//! Sources are layered: defaults, then the TOML file (with the
//! `toml-config` feature), then `BENCH_*` environment variables, then
//! command-line flags.

#[cfg(feature = "toml-config")]
use std::path::Path;

use bench_timer::Thresholds;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::BenchError;

pub const ENV_SLOW: &str = "BENCH_SLOW";
pub const ENV_VERYSLOW: &str = "BENCH_VERYSLOW";
pub const ENV_COLOR: &str = "BENCH_COLOR";

/// When to style the result line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Let `colored` decide from the terminal and `NO_COLOR`.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

impl std::str::FromStr for ColorChoice {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" | "on" | "yes" => Ok(Self::Always),
            "never" | "off" | "no" => Ok(Self::Never),
            _ => Err(BenchError::InvalidColor(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub thresholds: Thresholds,
    pub color: ColorChoice,
}

impl BenchConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Load a TOML file. Missing keys keep their defaults.
    #[cfg(feature = "toml-config")]
    pub fn from_file(path: &Path) -> Result<Self, BenchError> {
        let content = std::fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|err| BenchError::ConfigParse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn apply_env(&mut self) {
        self.apply_vars(|name| std::env::var(name).ok());
    }

    /// Override fields from `lookup`. Unparseable values are logged and
    /// skipped.
    pub fn apply_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_SLOW) {
            match raw.trim().parse() {
                Ok(slow) => self.thresholds.slow = slow,
                Err(_) => warn!("ignoring {ENV_SLOW}={raw}: not a number"),
            }
        }

        if let Some(raw) = lookup(ENV_VERYSLOW) {
            match raw.trim().parse() {
                Ok(veryslow) => self.thresholds.veryslow = veryslow,
                Err(_) => warn!("ignoring {ENV_VERYSLOW}={raw}: not a number"),
            }
        }

        if let Some(raw) = lookup(ENV_COLOR) {
            match raw.trim().parse() {
                Ok(color) => self.color = color,
                Err(err) => warn!("ignoring {ENV_COLOR}: {err}"),
            }
        }
    }
}
