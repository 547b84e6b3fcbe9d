//! Loop configuration from environment variables and command-line arguments.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::DROP_INTERVAL_MS;

/// Game loop configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoopConfig {
    /// Milliseconds between timer ticks
    pub drop_ms: u32,
    /// RNG seed for shape selection
    pub seed: u32,
    /// JSON-lines journal path (None = disabled)
    pub log_path: Option<String>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            drop_ms: DROP_INTERVAL_MS,
            seed: 1,
            log_path: None,
        }
    }
}

impl LoopConfig {
    /// Create from environment variables.
    ///
    /// - `BLOCK_DROP_DROP_MS`: tick cadence (default 500, zero or garbage ignored)
    /// - `BLOCK_DROP_SEED`: RNG seed (default derived from the system clock)
    /// - `BLOCK_DROP_LOG_PATH`: journal path (empty = disabled)
    pub fn from_env() -> Self {
        use std::env;

        let drop_ms = env::var("BLOCK_DROP_DROP_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(DROP_INTERVAL_MS);

        let seed = env::var("BLOCK_DROP_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = env::var("BLOCK_DROP_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            drop_ms,
            seed,
            log_path,
        }
    }

    /// Override fields from `--drop-ms N`, `--seed N`, `--log PATH`.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            let value = || {
                args.get(i + 1)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))
            };
            match flag {
                "--drop-ms" => {
                    let v = value()?;
                    let ms = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --drop-ms value: {}", v))?;
                    if ms == 0 {
                        return Err(anyhow!("--drop-ms must be greater than zero"));
                    }
                    self.drop_ms = ms;
                }
                "--seed" => {
                    let v = value()?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                "--log" => {
                    let v = value()?.trim();
                    self.log_path = if v.is_empty() { None } else { Some(v.to_string()) };
                }
                other => {
                    return Err(anyhow!("unknown argument: {}", other));
                }
            }
            i += 2;
        }
        Ok(())
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
