//! Unit class table loader.

use std::collections::HashSet;
use std::path::Path;

use arena_core::{SkillEffect, UnitClass, UnitClassRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{
    CatalogLoadError, LoadResult, check_non_negative, check_positive, load_document,
};

/// Class table structure for data files.
///
/// ```ron
/// (
///     classes: [
///         (
///             name: "Warrior",
///             max_health: 60.0,
///             max_stamina: 30.0,
///             attack: 0.8,
///             stamina: 0.9,
///             armor: 1.2,
///             skill: (name: "Fury Punch", stamina_cost: 6.0, effect: Strike(damage: 12.0)),
///         ),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassTable {
    pub classes: Vec<UnitClass>,
}

/// Loader for unit class tables.
pub struct ClassLoader;

impl ClassLoader {
    /// Load a class table into a registry (file order is kept).
    pub fn load(path: &Path) -> LoadResult<UnitClassRegistry> {
        let table: ClassTable = load_document(path)?;
        let origin = path.display().to_string();

        if table.classes.is_empty() {
            return Err(CatalogLoadError::Invalid {
                origin,
                message: "class table lists no classes".into(),
            });
        }
        let mut seen = HashSet::new();
        for class in &table.classes {
            validate_class(&origin, class)?;
            if !seen.insert(class.name.to_ascii_lowercase()) {
                return Err(CatalogLoadError::Invalid {
                    origin,
                    message: format!("class `{}` is listed twice", class.name),
                });
            }
        }

        Ok(UnitClassRegistry::from_classes(table.classes))
    }
}

fn validate_class(origin: &str, class: &UnitClass) -> LoadResult<()> {
    if class.name.trim().is_empty() {
        return Err(CatalogLoadError::Invalid {
            origin: origin.to_owned(),
            message: "class with an empty name".into(),
        });
    }
    let what = format!("class `{}`", class.name);
    check_positive(origin, &what, "max_health", class.max_health)?;
    check_positive(origin, &what, "max_stamina", class.max_stamina)?;
    check_non_negative(origin, &what, "attack", class.attack)?;
    check_non_negative(origin, &what, "stamina", class.stamina)?;
    check_non_negative(origin, &what, "armor", class.armor)?;
    check_non_negative(origin, &what, "skill.stamina_cost", class.skill.stamina_cost)?;

    let magnitude = match class.skill.effect {
        SkillEffect::Strike { damage } => damage,
        SkillEffect::Heal { amount } | SkillEffect::Drain { amount } => amount,
    };
    check_non_negative(origin, &what, "skill.effect", magnitude)
}
