//! Battle lifecycle types.

use core::fmt;

use crate::state::CombatUnit;

/// Lifecycle phase of an [`Arena`](super::Arena).
///
/// `NotStarted → Running → Finished`. A finished arena may be started again, which
/// creates a fresh session.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattlePhase {
    #[default]
    NotStarted,
    Running,
    Finished,
}

/// Terminal battle outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleResult {
    PlayerWins,
    EnemyWins,
    Draw,
}

impl BattleResult {
    /// Decides the outcome from the two defeat flags, or `None` if both still stand.
    pub fn from_defeats(player_defeated: bool, enemy_defeated: bool) -> Option<Self> {
        match (player_defeated, enemy_defeated) {
            (true, true) => Some(Self::Draw),
            (true, false) => Some(Self::EnemyWins),
            (false, true) => Some(Self::PlayerWins),
            (false, false) => None,
        }
    }
}

impl fmt::Display for BattleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PlayerWins => "The enemy has been defeated! The player wins!",
            Self::EnemyWins => "The player has been defeated! The enemy wins!",
            Self::Draw => "Draw!",
        };
        f.write_str(text)
    }
}

/// The two combatants of one battle plus the round counter.
#[derive(Clone, Debug)]
pub struct BattleSession {
    pub(crate) player: CombatUnit,
    pub(crate) enemy: CombatUnit,
    pub(crate) round: u32,
}

impl BattleSession {
    pub(crate) fn new(player: CombatUnit, enemy: CombatUnit) -> Self {
        Self {
            player,
            enemy,
            round: 1,
        }
    }

    pub fn player(&self) -> &CombatUnit {
        &self.player
    }

    pub fn enemy(&self) -> &CombatUnit {
        &self.enemy
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Outcome if either side is down.
    pub fn outcome(&self) -> Option<BattleResult> {
        BattleResult::from_defeats(self.player.is_defeated(), self.enemy.is_defeated())
    }
}
