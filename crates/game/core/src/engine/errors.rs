//! Error types for the battle control surface.

use super::BattlePhase;
use crate::error::{ErrorSeverity, GameError};
use crate::state::UnitRole;

/// Piece of gear a unit must carry before it may fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MissingGear {
    Weapon,
    Armor,
}

/// Errors surfaced by [`Arena`](super::Arena) operations.
///
/// Running out of stamina is not an error; it is narrated as part of the turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// A unit entered the arena without a weapon or armor. No session was created.
    #[error("invalid setup: {role} unit `{name}` has no {missing} equipped")]
    InvalidSetup {
        role: UnitRole,
        name: String,
        missing: MissingGear,
    },

    /// An operation was called in a phase that does not allow it.
    #[error("illegal state: cannot {operation} while the battle is {phase}")]
    IllegalState {
        operation: &'static str,
        phase: BattlePhase,
    },
}

impl BattleError {
    pub(crate) fn illegal_state(operation: &'static str, phase: BattlePhase) -> Self {
        Self::IllegalState { operation, phase }
    }
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidSetup { .. } => ErrorSeverity::Validation,
            Self::IllegalState { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSetup { .. } => "INVALID_SETUP",
            Self::IllegalState { .. } => "ILLEGAL_STATE",
        }
    }
}
