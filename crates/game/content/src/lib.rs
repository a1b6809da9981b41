//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the static data a battle needs:
//! - Equipment catalog (JSON, RON or TOML)
//! - Unit class tables (RON)
//! - Arena configuration (TOML)
//!
//! Content is loaded once at setup and never changes afterwards. All loaders use
//! arena-core types directly with serde for deserialization.

pub mod loaders;

pub use loaders::equipment::{EquipmentCatalog, EquipmentDocument};
pub use loaders::{
    CatalogLoadError, ClassLoader, ConfigLoader, ContentFactory, DataFormat, EquipmentLoader,
    LoadResult,
};
