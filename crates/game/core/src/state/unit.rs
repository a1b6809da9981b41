//! Per-combatant battle state.

use std::sync::Arc;

use tracing::debug;

use super::ResourceMeter;
use crate::combat::{self, StrikeOutcome, round_tenths};
use crate::env::{ArmorDef, RngSource, UnitClass, WeaponDef};

/// Which side a unit fights on.
///
/// The role only decides who drives the unit (the caller for the player, the engine
/// for the enemy) and how narration addresses it. The damage pipeline is shared.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnitRole {
    Player,
    Enemy,
}

/// A combatant: class, resources, gear and the one-shot skill flag.
#[derive(Clone, Debug)]
pub struct CombatUnit {
    name: String,
    role: UnitRole,
    class: Arc<UnitClass>,
    health: ResourceMeter,
    stamina: ResourceMeter,
    weapon: Option<WeaponDef>,
    armor: Option<ArmorDef>,
    skill_used: bool,
}

impl CombatUnit {
    /// Creates a unit at full health and stamina with no gear.
    pub fn new(name: impl Into<String>, role: UnitRole, class: Arc<UnitClass>) -> Self {
        Self {
            name: name.into(),
            role,
            health: ResourceMeter::full(class.max_health),
            stamina: ResourceMeter::full(class.max_stamina),
            class,
            weapon: None,
            armor: None,
            skill_used: false,
        }
    }

    pub fn player(name: impl Into<String>, class: Arc<UnitClass>) -> Self {
        Self::new(name, UnitRole::Player, class)
    }

    pub fn enemy(name: impl Into<String>, class: Arc<UnitClass>) -> Self {
        Self::new(name, UnitRole::Enemy, class)
    }

    // ===== accessors =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> UnitRole {
        self.role
    }

    pub fn class(&self) -> &UnitClass {
        &self.class
    }

    pub fn health(&self) -> f32 {
        self.health.current()
    }

    pub fn stamina(&self) -> f32 {
        self.stamina.current()
    }

    /// Health rounded to one decimal, for display.
    pub fn health_points(&self) -> f32 {
        round_tenths(self.health.current())
    }

    /// Stamina rounded to one decimal, for display.
    pub fn stamina_points(&self) -> f32 {
        round_tenths(self.stamina.current())
    }

    pub fn weapon(&self) -> Option<&WeaponDef> {
        self.weapon.as_ref()
    }

    pub fn armor(&self) -> Option<&ArmorDef> {
        self.armor.as_ref()
    }

    pub fn is_equipped(&self) -> bool {
        self.weapon.is_some() && self.armor.is_some()
    }

    pub fn skill_used(&self) -> bool {
        self.skill_used
    }

    pub fn is_defeated(&self) -> bool {
        self.health.is_depleted()
    }

    // ===== gear =====

    pub fn equip_weapon(&mut self, weapon: WeaponDef) -> String {
        let narration = format!("{} is now armed with {}.", self.name, weapon.name);
        self.weapon = Some(weapon);
        narration
    }

    pub fn equip_armor(&mut self, armor: ArmorDef) -> String {
        let narration = format!("{} now wears {}.", self.name, armor.name);
        self.armor = Some(armor);
        narration
    }

    // ===== resource mutation =====

    pub(crate) fn take_health(&mut self, amount: f32) {
        self.health.drain(amount);
    }

    /// Returns the health actually restored.
    pub(crate) fn restore_health(&mut self, amount: f32) -> f32 {
        self.health.restore(amount)
    }

    pub(crate) fn spend_stamina(&mut self, amount: f32) {
        self.stamina.drain(amount);
    }

    /// Adds one round of stamina, capped at the class maximum. Health is untouched.
    pub fn regenerate_one_round(&mut self, amount: f32) -> f32 {
        let gained = self.stamina.restore(amount);
        debug!(
            target: "arena::unit",
            unit = %self.name,
            gained,
            stamina = self.stamina.current(),
            "stamina regenerated"
        );
        gained
    }

    // ===== actions =====

    /// Whether the unit can pay for one swing of its weapon.
    pub fn can_afford_hit(&self) -> bool {
        self.weapon
            .as_ref()
            .is_some_and(|w| self.stamina.current() >= w.stamina_per_hit)
    }

    /// Whether the unit can pay its class skill's stamina cost.
    pub fn can_afford_skill(&self) -> bool {
        self.stamina.current() >= self.class.skill.stamina_cost
    }

    /// Swings at `target` through the stamina gate and the damage pipeline.
    pub fn hit(
        &mut self,
        target: &mut CombatUnit,
        rng: &mut (impl RngSource + ?Sized),
    ) -> StrikeOutcome {
        combat::resolve_strike(self, target, rng)
    }

    /// Uses the class skill on `target` unless it was already spent this battle.
    ///
    /// The flag is set before the effect runs, so a skill that fizzles for lack of
    /// stamina is still spent.
    pub fn use_skill_once(&mut self, target: &mut CombatUnit) -> String {
        if self.skill_used {
            return format!("{} has already used their skill.", self.name);
        }
        self.skill_used = true;
        let class = Arc::clone(&self.class);
        class.skill.apply(self, target)
    }
}
