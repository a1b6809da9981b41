use crate::combat::round_tenths;
use crate::env::RngSource;

/// Weapon catalog entry.
///
/// Damage is not a fixed stat: every swing draws a fresh value from
/// `[min_damage, max_damage]` (see [`WeaponDef::roll_damage`]).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct WeaponDef {
    pub id: u32,
    pub name: String,
    pub min_damage: f32,
    pub max_damage: f32,
    pub stamina_per_hit: f32,
}

impl WeaponDef {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        min_damage: f32,
        max_damage: f32,
        stamina_per_hit: f32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            min_damage,
            max_damage,
            stamina_per_hit,
        }
    }

    /// Draws a damage value uniformly from the weapon's range, rounded to one decimal.
    pub fn roll_damage(&self, rng: &mut (impl RngSource + ?Sized)) -> f32 {
        round_tenths(rng.uniform(self.min_damage, self.max_damage))
    }
}

/// Armor catalog entry.
///
/// Armor only mitigates when its wearer can pay `stamina_per_turn` at the moment
/// the hit lands.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct ArmorDef {
    pub id: u32,
    pub name: String,
    pub defence: f32,
    pub stamina_per_turn: f32,
}

impl ArmorDef {
    pub fn new(id: u32, name: impl Into<String>, defence: f32, stamina_per_turn: f32) -> Self {
        Self {
            id,
            name: name.into(),
            defence,
            stamina_per_turn,
        }
    }
}
