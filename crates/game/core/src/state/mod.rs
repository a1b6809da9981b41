//! Mutable battle state.
//!
//! [`CombatUnit`] carries everything that changes during a fight: health,
//! stamina, equipped gear and the skill flag. Class data stays behind an
//! `Arc` and is never mutated.
mod meter;
mod unit;

pub use meter::ResourceMeter;
pub use unit::{CombatUnit, UnitRole};
