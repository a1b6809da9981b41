//! Damage calculation and application.

use tracing::debug;

use super::result::{DamageDealt, StrikeOutcome};
use crate::env::RngSource;
use crate::state::CombatUnit;

/// Rounds to one decimal place.
#[inline]
pub fn round_tenths(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Armor mitigation the defender would get from its equipped armor.
///
/// `defence × class armor multiplier`, or zero without armor.
pub fn armor_mitigation(defender: &CombatUnit) -> f32 {
    defender
        .armor()
        .map_or(0.0, |armor| armor.defence * defender.class().armor)
}

/// Stamina gate followed by the damage pipeline.
///
/// An attacker that cannot pay `stamina_per_hit` does not swing: no roll is drawn
/// and neither unit changes. Both roles go through this gate.
pub fn resolve_strike(
    attacker: &mut CombatUnit,
    defender: &mut CombatUnit,
    rng: &mut (impl RngSource + ?Sized),
) -> StrikeOutcome {
    if attacker.weapon().is_none() {
        return StrikeOutcome::Unarmed;
    }
    if !attacker.can_afford_hit() {
        debug!(
            target: "arena::combat",
            attacker = attacker.name(),
            stamina = attacker.stamina(),
            "too exhausted to swing"
        );
        return StrikeOutcome::Exhausted;
    }
    StrikeOutcome::Landed(compute_and_apply_damage(attacker, defender, rng))
}

/// Rolls the attacker's weapon and applies the result to the defender.
///
/// # Formula
///
/// ```text
/// raw = roll(min_damage, max_damage) × attacker.attack
/// attacker.stamina -= stamina_per_hit
///
/// if defender.stamina >= armor.stamina_per_turn:
///     defender.stamina -= armor.stamina_per_turn
///     raw -= armor.defence × defender.armor
///
/// final = round(raw, 1)
/// ```
///
/// A positive `final` is subtracted from the defender's health; anything else is
/// reported as [`DamageDealt::Blocked`] and health is left alone.
///
/// No stamina check is made on the attacker here; callers gate first (see
/// [`resolve_strike`]). An attacker without a weapon deals a blocked hit.
pub fn compute_and_apply_damage(
    attacker: &mut CombatUnit,
    defender: &mut CombatUnit,
    rng: &mut (impl RngSource + ?Sized),
) -> DamageDealt {
    let Some(weapon) = attacker.weapon() else {
        return DamageDealt::Blocked;
    };
    let cost = weapon.stamina_per_hit;
    let rolled = weapon.roll_damage(rng);
    let mut damage = rolled * attacker.class().attack;

    attacker.spend_stamina(cost);

    // Armor only works if the defender can pay for it this hit.
    if let Some(armor_cost) = defender.armor().map(|a| a.stamina_per_turn)
        && defender.stamina() >= armor_cost
    {
        damage -= armor_mitigation(defender);
        defender.spend_stamina(armor_cost);
    }

    let damage = round_tenths(damage);
    let dealt = if damage > 0.0 {
        defender.take_health(damage);
        DamageDealt::Applied(damage)
    } else {
        DamageDealt::Blocked
    };

    debug!(
        target: "arena::combat",
        attacker = attacker.name(),
        defender = defender.name(),
        rolled,
        dealt = dealt.amount(),
        defender_health = defender.health(),
        "strike resolved"
    );
    dealt
}
