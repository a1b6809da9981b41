//! Strike outcome types.

/// Damage produced by one pass through the damage pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageDealt {
    /// Health was reduced by this amount (always > 0, one decimal).
    Applied(f32),
    /// Mitigation absorbed everything; health unchanged.
    Blocked,
}

impl DamageDealt {
    /// Amount removed from the defender's health (zero when blocked).
    pub fn amount(&self) -> f32 {
        match self {
            Self::Applied(amount) => *amount,
            Self::Blocked => 0.0,
        }
    }
}

/// Outcome of a weapon swing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrikeOutcome {
    /// Attacker could not pay the weapon's stamina cost. Nothing changed.
    Exhausted,
    /// Attacker has no weapon equipped. Nothing changed.
    Unarmed,
    /// The swing went through the damage pipeline.
    Landed(DamageDealt),
}

impl StrikeOutcome {
    /// Damage applied to the defender, if any.
    pub fn damage(&self) -> Option<f32> {
        match self {
            Self::Landed(DamageDealt::Applied(amount)) => Some(*amount),
            _ => None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Landed(DamageDealt::Blocked))
    }
}
