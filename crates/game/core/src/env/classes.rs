use std::sync::Arc;

use crate::skill::{Skill, SkillEffect};

/// Immutable class definition shared by every unit of that class.
///
/// Multipliers scale the unit's weapon damage (`attack`), armor defence (`armor`)
/// and per-round stamina gain (`stamina`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct UnitClass {
    pub name: String,
    pub max_health: f32,
    pub max_stamina: f32,
    pub attack: f32,
    pub stamina: f32,
    pub armor: f32,
    pub skill: Skill,
}

impl UnitClass {
    pub fn new(
        name: impl Into<String>,
        max_health: f32,
        max_stamina: f32,
        attack: f32,
        stamina: f32,
        armor: f32,
        skill: Skill,
    ) -> Self {
        Self {
            name: name.into(),
            max_health,
            max_stamina,
            attack,
            stamina,
            armor,
            skill,
        }
    }

    pub fn warrior() -> Self {
        Self::new(
            "Warrior",
            60.0,
            30.0,
            0.8,
            0.9,
            1.2,
            Skill::new("Fury Punch", 6.0, SkillEffect::Strike { damage: 12.0 }),
        )
    }

    pub fn thief() -> Self {
        Self::new(
            "Thief",
            50.0,
            25.0,
            1.5,
            1.2,
            1.0,
            Skill::new("Hard Shot", 5.0, SkillEffect::Strike { damage: 15.0 }),
        )
    }

    pub fn cleric() -> Self {
        Self::new(
            "Cleric",
            55.0,
            28.0,
            0.9,
            1.0,
            1.1,
            Skill::new("Mending Light", 6.0, SkillEffect::Heal { amount: 15.0 }),
        )
    }

    pub fn warlock() -> Self {
        Self::new(
            "Warlock",
            45.0,
            26.0,
            1.2,
            1.1,
            0.9,
            Skill::new("Life Tap", 5.0, SkillEffect::Drain { amount: 8.0 }),
        )
    }
}

/// Ordered set of unit classes available for battle.
#[derive(Clone, Debug, Default)]
pub struct UnitClassRegistry {
    classes: Vec<Arc<UnitClass>>,
}

impl UnitClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in classes: Warrior, Thief, Cleric, Warlock.
    pub fn standard() -> Self {
        Self::from_classes([
            UnitClass::warrior(),
            UnitClass::thief(),
            UnitClass::cleric(),
            UnitClass::warlock(),
        ])
    }

    pub fn from_classes(classes: impl IntoIterator<Item = UnitClass>) -> Self {
        let mut registry = Self::new();
        for class in classes {
            registry.insert(class);
        }
        registry
    }

    /// Adds a class, replacing an existing one with the same (case-insensitive) name.
    pub fn insert(&mut self, class: UnitClass) {
        let class = Arc::new(class);
        match self
            .classes
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(&class.name))
        {
            Some(slot) => *slot = class,
            None => self.classes.push(class),
        }
    }

    /// Looks a class up by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<Arc<UnitClass>> {
        self.classes
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Returns the class at `index` in registration order.
    pub fn get_index(&self, index: usize) -> Option<Arc<UnitClass>> {
        self.classes.get(index).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_preserves_order() {
        let registry = UnitClassRegistry::standard();
        assert_eq!(
            registry.names(),
            vec!["Warrior", "Thief", "Cleric", "Warlock"]
        );
    }

    #[test]
    fn lookup_ignores_case_and_shares_definitions() {
        let registry = UnitClassRegistry::standard();
        let a = registry.get("thief").unwrap();
        let b = registry.get("THIEF").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(registry.get("bard").is_none());
    }

    #[test]
    fn insert_replaces_same_name() {
        let mut registry = UnitClassRegistry::standard();
        let mut tougher = UnitClass::warrior();
        tougher.max_health = 80.0;
        registry.insert(tougher);

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.get("warrior").unwrap().max_health, 80.0);
    }
}
