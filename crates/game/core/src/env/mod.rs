//! Static battle environment: catalog entries, unit classes and the random source.
//!
//! Nothing in here changes during a battle. Catalog entries and classes are loaded
//! once at setup (see the `arena-content` crate) and shared by reference.

mod classes;
mod items;
mod rng;

pub use classes::{UnitClass, UnitClassRegistry};
pub use items::{ArmorDef, WeaponDef};
pub use rng::{PcgRng, RngSource, ScriptedRng};
