//! Equipment catalog and its loader.

use std::collections::HashSet;
use std::path::Path;

use arena_core::{ArmorDef, WeaponDef};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{CatalogLoadError, LoadResult, check_non_negative, load_document};

/// On-disk layout of the equipment file.
///
/// ```json
/// {
///   "weapons": [{"id": 1, "name": "hatchet", "min_damage": 2.5, "max_damage": 4.1, "stamina_per_hit": 1.5}],
///   "armors":  [{"id": 1, "name": "t-shirt", "defence": 0.5, "stamina_per_turn": 0.1}]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EquipmentDocument {
    pub weapons: Vec<WeaponDef>,
    pub armors: Vec<ArmorDef>,
}

/// Read-only weapon and armor lookup, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentCatalog {
    weapons: Vec<WeaponDef>,
    armors: Vec<ArmorDef>,
}

impl EquipmentCatalog {
    /// Builds a catalog from already-parsed entries, applying the same checks as
    /// [`EquipmentLoader::load`].
    pub fn from_parts(weapons: Vec<WeaponDef>, armors: Vec<ArmorDef>) -> LoadResult<Self> {
        Self::validated("inline catalog", weapons, armors)
    }

    fn validated(origin: &str, weapons: Vec<WeaponDef>, armors: Vec<ArmorDef>) -> LoadResult<Self> {
        validate_weapons(origin, &weapons)?;
        validate_armors(origin, &armors)?;
        Ok(Self { weapons, armors })
    }

    /// Weapon with exactly this name, if any.
    pub fn weapon(&self, name: &str) -> Option<&WeaponDef> {
        self.weapons.iter().find(|w| w.name == name)
    }

    /// Armor with exactly this name, if any.
    pub fn armor(&self, name: &str) -> Option<&ArmorDef> {
        self.armors.iter().find(|a| a.name == name)
    }

    pub fn weapon_names(&self) -> Vec<&str> {
        self.weapons.iter().map(|w| w.name.as_str()).collect()
    }

    pub fn armor_names(&self) -> Vec<&str> {
        self.armors.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn weapons(&self) -> &[WeaponDef] {
        &self.weapons
    }

    pub fn armors(&self) -> &[ArmorDef] {
        &self.armors
    }
}

/// Loader for the equipment catalog.
pub struct EquipmentLoader;

impl EquipmentLoader {
    /// Load and validate an equipment catalog.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to a `.json`, `.ron` or `.toml` file with an [`EquipmentDocument`]
    pub fn load(path: &Path) -> LoadResult<EquipmentCatalog> {
        let document: EquipmentDocument = load_document(path)?;
        let catalog = EquipmentCatalog::validated(
            &path.display().to_string(),
            document.weapons,
            document.armors,
        )?;

        info!(
            target: "arena::content",
            path = %path.display(),
            weapons = catalog.weapons.len(),
            armors = catalog.armors.len(),
            "equipment catalog loaded"
        );
        Ok(catalog)
    }
}

fn invalid(origin: &str, message: String) -> CatalogLoadError {
    CatalogLoadError::Invalid {
        origin: origin.to_owned(),
        message,
    }
}

fn validate_weapons(origin: &str, weapons: &[WeaponDef]) -> LoadResult<()> {
    if weapons.is_empty() {
        return Err(invalid(origin, "catalog lists no weapons".into()));
    }
    let mut seen = HashSet::new();
    for w in weapons {
        if w.name.trim().is_empty() {
            return Err(invalid(origin, format!("weapon #{} has an empty name", w.id)));
        }
        let what = format!("weapon `{}`", w.name);
        if !seen.insert(w.name.as_str()) {
            return Err(invalid(origin, format!("{what} is listed twice")));
        }
        check_non_negative(origin, &what, "min_damage", w.min_damage)?;
        check_non_negative(origin, &what, "max_damage", w.max_damage)?;
        check_non_negative(origin, &what, "stamina_per_hit", w.stamina_per_hit)?;
        if w.min_damage > w.max_damage {
            return Err(invalid(
                origin,
                format!(
                    "{what}: min_damage {} exceeds max_damage {}",
                    w.min_damage, w.max_damage
                ),
            ));
        }
    }
    Ok(())
}

fn validate_armors(origin: &str, armors: &[ArmorDef]) -> LoadResult<()> {
    if armors.is_empty() {
        return Err(invalid(origin, "catalog lists no armors".into()));
    }
    let mut seen = HashSet::new();
    for a in armors {
        if a.name.trim().is_empty() {
            return Err(invalid(origin, format!("armor #{} has an empty name", a.id)));
        }
        let what = format!("armor `{}`", a.name);
        if !seen.insert(a.name.as_str()) {
            return Err(invalid(origin, format!("{what} is listed twice")));
        }
        check_non_negative(origin, &what, "defence", a.defence)?;
        check_non_negative(origin, &what, "stamina_per_turn", a.stamina_per_turn)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stick() -> WeaponDef {
        WeaponDef::new(1, "stick", 1.0, 2.8, 1.0)
    }

    fn shirt() -> ArmorDef {
        ArmorDef::new(1, "t-shirt", 0.5, 0.1)
    }

    #[test]
    fn lookup_is_exact_and_missing_is_none() {
        let catalog = EquipmentCatalog::from_parts(vec![stick()], vec![shirt()]).unwrap();
        assert_eq!(catalog.weapon("stick"), Some(&stick()));
        assert!(catalog.weapon("Stick").is_none());
        assert!(catalog.armor("plate").is_none());
    }

    #[test]
    fn inverted_damage_range_is_rejected() {
        let bad = WeaponDef::new(1, "stick", 3.0, 2.0, 1.0);
        let err = EquipmentCatalog::from_parts(vec![bad], vec![shirt()]).unwrap_err();
        assert!(err.to_string().contains("exceeds max_damage"), "{err}");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = EquipmentCatalog::from_parts(vec![stick()], vec![shirt(), shirt()]).unwrap_err();
        assert!(err.to_string().contains("listed twice"), "{err}");
    }

    #[test]
    fn empty_sections_are_rejected() {
        assert!(EquipmentCatalog::from_parts(vec![], vec![shirt()]).is_err());
        assert!(EquipmentCatalog::from_parts(vec![stick()], vec![]).is_err());
    }
}
