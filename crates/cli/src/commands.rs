use crate::demo::{self, DemoOptions};
use clap::{Args, Subcommand};
use failover_config::{BreakerSettings, ConfigLoader};
use failover_core::Result;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Send calls through a breaker guarding a flaky service
    Demo {
        #[command(flatten)]
        breaker: BreakerArgs,

        /// Number of calls to make
        #[arg(long, default_value_t = 5)]
        calls: usize,

        /// Number of primary invocations that fail before it recovers
        #[arg(long, default_value_t = 3)]
        failures: usize,

        /// Pause between calls in milliseconds
        #[arg(long, value_name = "MS", default_value_t = 500)]
        interval_ms: u64,
    },

    /// Print the effective breaker settings as JSON
    Config {
        #[command(flatten)]
        breaker: BreakerArgs,
    },
}

/// Breaker flags, applied over the settings file and environment
#[derive(Args, Debug, Clone)]
pub struct BreakerArgs {
    /// JSON settings file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Cooldown after a trip before the primary is probed again
    #[arg(long, value_name = "MS")]
    reset_timeout_ms: Option<u64>,

    /// Immediate attempts against the primary before tripping
    #[arg(long, value_name = "N")]
    max_attempts: Option<usize>,

    /// Close the circuit after a successful probe (`--close-on-recovery false` turns it off)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    close_on_recovery: Option<bool>,
}

impl BreakerArgs {
    pub fn resolve(&self) -> Result<BreakerSettings> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.file(path);
        }
        // Flags may replace invalid file or environment values, so validate last
        let mut settings = loader.load_unvalidated()?;

        if let Some(reset_timeout_ms) = self.reset_timeout_ms {
            settings.reset_timeout_ms = reset_timeout_ms;
        }
        if let Some(max_attempts) = self.max_attempts {
            settings.max_attempts = max_attempts;
        }
        if let Some(close_on_recovery) = self.close_on_recovery {
            settings.close_on_recovery = close_on_recovery;
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Commands {
    pub async fn execute(self) -> eyre::Result<()> {
        match self {
            Commands::Demo {
                breaker,
                calls,
                failures,
                interval_ms,
            } => {
                let settings = breaker.resolve()?;
                let options = DemoOptions {
                    calls,
                    failures,
                    interval: std::time::Duration::from_millis(interval_ms),
                };
                demo::run(&settings, &options).await?;
            }
            Commands::Config { breaker } => {
                let settings = breaker.resolve()?;
                println!("{}", serde_json::to_string_pretty(&settings)?);
            }
        }
        Ok(())
    }
}
