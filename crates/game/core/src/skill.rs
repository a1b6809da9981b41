//! One-shot class skills.
//!
//! A [`Skill`] pairs a stamina cost with a [`SkillEffect`]. The effect decides what
//! changes on the user and target; the at-most-once gate lives on
//! [`CombatUnit::use_skill_once`](crate::CombatUnit::use_skill_once), not here.

use tracing::debug;

use crate::combat::round_tenths;
use crate::state::CombatUnit;

/// What a skill does when it lands.
///
/// # Variant contracts
///
/// - `Strike`: target loses `damage` health. Flat; armor is not consulted and no
///   stamina is taken from the target.
/// - `Heal`: user regains `amount` health, capped at the class maximum.
/// - `Drain`: target loses `amount` health, user regains the same amount capped at
///   the class maximum.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    Strike { damage: f32 },
    Heal { amount: f32 },
    Drain { amount: f32 },
}

/// Class skill definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Skill {
    pub name: String,
    pub stamina_cost: f32,
    pub effect: SkillEffect,
}

impl Skill {
    pub fn new(name: impl Into<String>, stamina_cost: f32, effect: SkillEffect) -> Self {
        Self {
            name: name.into(),
            stamina_cost,
            effect,
        }
    }

    /// Applies the skill from `user` to `target` and returns the narration.
    ///
    /// If the user cannot pay the stamina cost nothing changes and a failed attempt is
    /// narrated.
    pub fn apply(&self, user: &mut CombatUnit, target: &mut CombatUnit) -> String {
        if user.stamina() < self.stamina_cost {
            debug!(
                target: "arena::skill",
                user = user.name(),
                skill = %self.name,
                stamina = user.stamina(),
                cost = self.stamina_cost,
                "skill fizzled"
            );
            return format!(
                "{} tried to use {}, but did not have enough stamina.",
                user.name(),
                self.name
            );
        }

        user.spend_stamina(self.stamina_cost);

        let narration = match self.effect {
            SkillEffect::Strike { damage } => {
                target.take_health(damage);
                format!(
                    "{} uses {} and deals {} damage to the opponent.",
                    user.name(),
                    self.name,
                    round_tenths(damage)
                )
            }
            SkillEffect::Heal { amount } => {
                let healed = user.restore_health(amount);
                format!(
                    "{} uses {} and restores {} health.",
                    user.name(),
                    self.name,
                    healed
                )
            }
            SkillEffect::Drain { amount } => {
                target.take_health(amount);
                let healed = user.restore_health(amount);
                format!(
                    "{} uses {}, draining {} health from the opponent and recovering {}.",
                    user.name(),
                    self.name,
                    round_tenths(amount),
                    healed
                )
            }
        };

        debug!(
            target: "arena::skill",
            user = user.name(),
            skill = %self.name,
            target_health = target.health(),
            "skill applied"
        );
        narration
    }
}
