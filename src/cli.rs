#[cfg(feature = "toml-config")]
use std::path::PathBuf;

use clap::Parser;

use crate::config::{BenchConfig, ColorChoice};
use crate::error::BenchError;

/// Time a command and report whether it was slow.
#[derive(Debug, Parser)]
#[command(name = "bench", version, about)]
pub struct Cli {
    /// Seconds at or above which the result is highlighted as slow
    #[arg(long, value_name = "SECONDS")]
    pub slow: Option<f64>,

    /// Seconds at or above which the result is highlighted as very slow
    #[arg(long, value_name = "SECONDS")]
    pub veryslow: Option<f64>,

    /// TOML file with `color` and a `[thresholds]` table
    #[cfg(feature = "toml-config")]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Whether to color the result line
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Discard the command's stdout
    #[arg(long, short = 'q')]
    pub quiet_output: bool,

    /// Command to time, followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// Layer file, environment and flags over the defaults.
    pub fn resolve_config(&self) -> Result<BenchConfig, BenchError> {
        #[cfg(feature = "toml-config")]
        let mut config = match &self.config {
            Some(path) => {
                let mut config = BenchConfig::from_file(path)?;
                config.apply_env();
                config
            }
            None => BenchConfig::from_env(),
        };
        #[cfg(not(feature = "toml-config"))]
        let mut config = BenchConfig::from_env();

        self.apply_flags(&mut config);
        Ok(config)
    }

    pub fn apply_flags(&self, config: &mut BenchConfig) {
        if let Some(slow) = self.slow {
            config.thresholds.slow = slow;
        }
        if let Some(veryslow) = self.veryslow {
            config.thresholds.veryslow = veryslow;
        }
        if let Some(color) = self.color {
            config.color = color;
        }
    }
}
