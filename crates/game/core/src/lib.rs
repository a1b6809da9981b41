//! Turn-based battle rules shared by the content loaders and the client.
//!
//! `arena-core` defines the canonical rules (damage pipeline, skills, turn
//! sequencing) and exposes pure APIs with no I/O. All battle mutation flows
//! through [`engine::Arena`]; supporting crates depend on the types re-exported
//! here.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod skill;
pub mod state;

pub use combat::{DamageDealt, StrikeOutcome};
pub use config::ArenaConfig;
pub use engine::{
    Arena, BattleError, BattlePhase, BattleResult, BattleSession, MissingGear,
    should_trigger_enemy_skill,
};
pub use env::{
    ArmorDef, PcgRng, RngSource, ScriptedRng, UnitClass, UnitClassRegistry, WeaponDef,
};
pub use error::{ErrorSeverity, GameError};
pub use skill::{Skill, SkillEffect};
pub use state::{CombatUnit, ResourceMeter, UnitRole};
