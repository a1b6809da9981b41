//! Turn narration text.

use crate::combat::{DamageDealt, StrikeOutcome};
use crate::state::{CombatUnit, UnitRole};

/// Describes a weapon swing from the attacker's side.
///
/// The player is narrated in the third person; the enemy addresses the player
/// directly ("your armor").
pub fn strike(attacker: &CombatUnit, defender: &CombatUnit, outcome: StrikeOutcome) -> String {
    let who = attacker.name();
    let weapon = attacker.weapon().map_or("bare hands", |w| w.name.as_str());
    let armor = defender.armor().map_or("guard", |a| a.name.as_str());
    let (their, target) = match attacker.role() {
        UnitRole::Player => ("the opponent's", "the opponent"),
        UnitRole::Enemy => ("your", "you"),
    };

    match outcome {
        StrikeOutcome::Exhausted => {
            format!("{who} tried to use {weapon}, but did not have enough stamina.")
        }
        StrikeOutcome::Unarmed => format!("{who} has nothing to attack with."),
        StrikeOutcome::Landed(DamageDealt::Applied(damage)) => format!(
            "{who}, wielding {weapon}, breaks through {their} {armor} and deals {target} {damage} damage."
        ),
        StrikeOutcome::Landed(DamageDealt::Blocked) => {
            format!("{who} strikes with {weapon}, but {their} {armor} stops the blow.")
        }
    }
}
