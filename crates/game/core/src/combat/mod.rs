//! Combat resolution system.
//!
//! One damage pipeline serves both the player and the enemy. Callers go through
//! [`resolve_strike`], which applies the stamina gate before
//! [`compute_and_apply_damage`] rolls and applies damage.
//!
//! # Core Functions
//!
//! - `resolve_strike`: stamina gate + damage pipeline
//! - `compute_and_apply_damage`: weapon roll, armor mitigation, health reduction
//! - `armor_mitigation`: defence scaled by the defender's class
//! - `round_tenths`: one-decimal rounding used for every displayed number

pub mod damage;
pub mod result;

pub use damage::{armor_mitigation, compute_and_apply_damage, resolve_strike, round_tenths};
pub use result::{DamageDealt, StrikeOutcome};
