//! Arena configuration loader.

use std::path::Path;

use arena_core::ArenaConfig;

use crate::loaders::{CatalogLoadError, LoadResult, check_non_negative, read_file};

/// Loader for arena configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`ArenaConfig::default`].
    pub fn load(path: &Path) -> LoadResult<ArenaConfig> {
        let content = read_file(path)?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> LoadResult<ArenaConfig> {
        let config: ArenaConfig =
            toml::from_str(content).map_err(|e| CatalogLoadError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let origin = path.display().to_string();
        check_non_negative(&origin, "config", "stamina_per_round", config.stamina_per_round)?;
        if config.enemy_skill_chance > 100 {
            return Err(CatalogLoadError::Invalid {
                origin,
                message: format!(
                    "config: `enemy_skill_chance` is a percentage, got {}",
                    config.enemy_skill_chance
                ),
            });
        }
        Ok(config)
    }
}
