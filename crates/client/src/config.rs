//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Settings the `arena` binary needs before any content is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding `equipment.json`, `classes.ron` and `arena.toml`.
    pub data_dir: PathBuf,
    /// Fixed RNG seed; battles replay exactly when set.
    pub seed: Option<u64>,
    /// Directory for a daily-rolling log file. Logs go to stderr only when unset.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_DATA_DIR` - Content directory (default: `./data`)
    /// - `ARENA_SEED` - RNG seed (default: derived from the clock)
    /// - `ARENA_LOG_DIR` - Log file directory (default: none)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("ARENA_DATA_DIR").filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        config.seed = read_var::<u64>(&lookup, "ARENA_SEED");

        config.log_dir = lookup("ARENA_LOG_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        config
    }

    /// The configured seed, or one taken from the wall clock.
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            seed: None,
            log_dir: None,
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
