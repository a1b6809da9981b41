//! Content loaders for reading battle data from files.
//!
//! Every loader reads the whole file, picks a parser from the file extension
//! (`.json`, `.ron`, `.toml`) and validates the result before handing it out.

pub mod classes;
pub mod config;
pub mod equipment;
pub mod factory;

pub use classes::ClassLoader;
pub use config::ConfigLoader;
pub use equipment::EquipmentLoader;
pub use factory::ContentFactory;

use std::path::{Path, PathBuf};

use arena_core::{ErrorSeverity, GameError};
use serde::de::DeserializeOwned;

/// Errors raised while loading static content.
///
/// All of them are fatal to setup: the battle cannot start without a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported data format for {} (expected .json, .ron or .toml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("invalid content in {origin}: {message}")]
    Invalid { origin: String, message: String },
}

impl GameError for CatalogLoadError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CATALOG_IO",
            Self::UnsupportedFormat { .. } => "CATALOG_FORMAT",
            Self::Parse { .. } => "CATALOG_PARSE",
            Self::Invalid { .. } => "CATALOG_INVALID",
        }
    }
}

/// Common result type for loaders.
pub type LoadResult<T> = Result<T, CatalogLoadError>;

/// Serialization format of a content file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Ron,
    Toml,
}

impl DataFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("ron") => Ok(Self::Ron),
            Some("toml") => Ok(Self::Toml),
            _ => Err(CatalogLoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Ron => ron::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and deserializes a content file, choosing the parser by extension.
pub(crate) fn load_document<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let format = DataFormat::from_path(path)?;
    let content = read_file(path)?;
    format
        .parse(&content)
        .map_err(|message| CatalogLoadError::Parse {
            path: path.to_path_buf(),
            message,
        })
}

/// Checks that a numeric field is finite and not negative.
pub(crate) fn check_non_negative(
    origin: &str,
    what: &str,
    field: &str,
    value: f32,
) -> LoadResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CatalogLoadError::Invalid {
            origin: origin.to_owned(),
            message: format!("{what}: `{field}` must be a non-negative number, got {value}"),
        })
    }
}

/// Checks that a numeric field is finite and strictly positive.
pub(crate) fn check_positive(origin: &str, what: &str, field: &str, value: f32) -> LoadResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CatalogLoadError::Invalid {
            origin: origin.to_owned(),
            message: format!("{what}: `{field}` must be a positive number, got {value}"),
        })
    }
}
