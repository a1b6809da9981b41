//! Content factory for loading battle content from a data directory.

use std::path::{Path, PathBuf};

use arena_core::{ArenaConfig, UnitClassRegistry};
use tracing::debug;

use crate::loaders::{
    ClassLoader, ConfigLoader, EquipmentLoader, LoadResult, equipment::EquipmentCatalog,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── equipment.json   (required; .ron / .toml also accepted)
/// ├── classes.ron      (optional; built-in classes otherwise)
/// └── arena.toml       (optional; defaults otherwise)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    const EQUIPMENT_FILES: [&'static str; 3] =
        ["equipment.json", "equipment.ron", "equipment.toml"];

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the equipment catalog.
    ///
    /// Looks for `equipment.json`, then `.ron`, then `.toml`. When none exists the
    /// error names the JSON path.
    pub fn load_equipment(&self) -> LoadResult<EquipmentCatalog> {
        let path = Self::EQUIPMENT_FILES
            .iter()
            .map(|name| self.data_dir.join(name))
            .find(|p| p.is_file())
            .unwrap_or_else(|| self.data_dir.join(Self::EQUIPMENT_FILES[0]));
        EquipmentLoader::load(&path)
    }

    /// Load unit classes from `classes.ron`, or the standard set if the file is absent.
    pub fn load_classes(&self) -> LoadResult<UnitClassRegistry> {
        let path = self.data_dir.join("classes.ron");
        if !path.is_file() {
            debug!(
                target: "arena::content",
                path = %path.display(),
                "no class table, using standard classes"
            );
            return Ok(UnitClassRegistry::standard());
        }
        ClassLoader::load(&path)
    }

    /// Load arena configuration from `arena.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<ArenaConfig> {
        let path = self.data_dir.join("arena.toml");
        if !path.is_file() {
            debug!(
                target: "arena::content",
                path = %path.display(),
                "no arena config, using defaults"
            );
            return Ok(ArenaConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
