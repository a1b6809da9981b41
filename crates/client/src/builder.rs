//! Client builder.

use anyhow::{Context, Result};
use arena_content::EquipmentCatalog;
use arena_core::{Arena, ArenaConfig, PcgRng, UnitClassRegistry};

use crate::Client;

/// Builder for constructing a [`Client`].
///
/// The equipment catalog is required; classes and engine config fall back to
/// the built-in set and defaults.
#[derive(Default)]
pub struct ClientBuilder {
    catalog: Option<EquipmentCatalog>,
    classes: Option<UnitClassRegistry>,
    config: Option<ArenaConfig>,
    seed: Option<u64>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the equipment catalog (required).
    pub fn catalog(mut self, catalog: EquipmentCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn classes(mut self, classes: UnitClassRegistry) -> Self {
        self.classes = Some(classes);
        self
    }

    pub fn config(mut self, config: ArenaConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Seed for the arena's random source. Defaults to 0.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is not set or no classes are available.
    pub fn build(self) -> Result<Client> {
        let catalog = self
            .catalog
            .context("Equipment catalog is required. Use .catalog() to set it.")?;

        let classes = self.classes.unwrap_or_else(UnitClassRegistry::standard);
        anyhow::ensure!(!classes.is_empty(), "Class registry is empty");

        let arena = Arena::with_config(
            self.config.unwrap_or_default(),
            PcgRng::new(self.seed.unwrap_or_default()),
        );

        Ok(Client {
            arena,
            catalog,
            classes,
        })
    }
}
