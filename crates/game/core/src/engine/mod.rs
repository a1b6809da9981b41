//! Battle engine and turn sequencing.
//!
//! The [`Arena`] is the only thing that mutates a running battle. It owns the
//! session, the config and the random source; callers own the arena itself, so
//! "one battle at a time" is enforced per arena instead of through global state.
//!
//! # Turn sequence
//!
//! ```text
//! player action (hit / skill / skip)
//!   → health check        (ends the battle; no counter-attack)
//!   → stamina regeneration (both units)
//!   → enemy turn          (optional skill, then a swing)
//! ```

mod errors;
mod narration;
mod session;

pub use errors::{BattleError, MissingGear};
pub use session::{BattlePhase, BattleResult, BattleSession};

use tracing::{debug, info, warn};

use crate::config::ArenaConfig;
use crate::env::{PcgRng, RngSource};
use crate::state::CombatUnit;

/// Whether the enemy fires its skill this turn.
///
/// The skill must be unspent and affordable; only then is a d100 drawn and compared
/// against `chance_percent`.
pub fn should_trigger_enemy_skill(
    enemy: &CombatUnit,
    chance_percent: u32,
    rng: &mut (impl RngSource + ?Sized),
) -> bool {
    !enemy.skill_used() && enemy.can_afford_skill() && rng.roll_d100() <= chance_percent
}

/// Two-combatant battle engine.
///
/// All randomness (weapon rolls, the enemy skill trigger) comes from the single
/// `R` it owns, in call order.
pub struct Arena<R = PcgRng> {
    config: ArenaConfig,
    rng: R,
    phase: BattlePhase,
    session: Option<BattleSession>,
    result: Option<BattleResult>,
}

impl Arena<PcgRng> {
    /// Arena with default config and a PCG source seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(PcgRng::new(seed))
    }
}

impl<R: RngSource> Arena<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(ArenaConfig::default(), rng)
    }

    pub fn with_config(config: ArenaConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            phase: BattlePhase::NotStarted,
            session: None,
            result: None,
        }
    }

    // ===== observation =====

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == BattlePhase::Running
    }

    /// Result of the last finished battle. Cleared by the next [`Arena::start`].
    pub fn result(&self) -> Option<BattleResult> {
        self.result
    }

    pub fn session(&self) -> Option<&BattleSession> {
        self.session.as_ref()
    }

    pub fn player(&self) -> Option<&CombatUnit> {
        self.session.as_ref().map(BattleSession::player)
    }

    pub fn enemy(&self) -> Option<&CombatUnit> {
        self.session.as_ref().map(BattleSession::enemy)
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // ===== control surface =====

    /// Starts a battle between two fully equipped units.
    ///
    /// # Errors
    ///
    /// - [`BattleError::IllegalState`] if a battle is already running.
    /// - [`BattleError::InvalidSetup`] if either unit lacks a weapon or armor.
    pub fn start(&mut self, player: CombatUnit, enemy: CombatUnit) -> Result<String, BattleError> {
        if self.phase == BattlePhase::Running {
            warn!(target: "arena::engine", "start rejected: a battle is already running");
            return Err(BattleError::illegal_state("start", self.phase));
        }
        validate_gear(&player)?;
        validate_gear(&enemy)?;

        let narration = format!(
            "The battle begins: {} the {} faces {} the {}.",
            player.name(),
            player.class().name,
            enemy.name(),
            enemy.class().name
        );
        info!(
            target: "arena::engine",
            player = player.name(),
            player_class = %player.class().name,
            enemy = enemy.name(),
            enemy_class = %enemy.class().name,
            "battle started"
        );

        self.session = Some(BattleSession::new(player, enemy));
        self.result = None;
        self.phase = BattlePhase::Running;
        Ok(narration)
    }

    /// Player swings at the enemy, then the turn advances.
    pub fn player_hit(&mut self) -> Result<String, BattleError> {
        let session = running_session(&mut self.session, self.phase, "hit")?;
        let outcome = session.player.hit(&mut session.enemy, &mut self.rng);
        let narration = narration::strike(&session.player, &session.enemy, outcome);
        Ok(format!("{narration} {}", self.advance_turn()))
    }

    /// Player uses their class skill, then the turn advances.
    ///
    /// A spent skill is narrated as such and the turn still advances.
    pub fn player_use_skill(&mut self) -> Result<String, BattleError> {
        running_session(&mut self.session, self.phase, "use a skill")?;
        if let Some(result) = self.check_health() {
            return Ok(self.finish(result));
        }
        let session = running_session(&mut self.session, self.phase, "use a skill")?;
        let narration = session.player.use_skill_once(&mut session.enemy);
        Ok(format!("{narration} {}", self.advance_turn()))
    }

    /// Player passes; the post-action sequence runs as usual.
    pub fn player_skip_turn(&mut self) -> Result<String, BattleError> {
        running_session(&mut self.session, self.phase, "skip a turn")?;
        let name = self.player().map(|p| p.name().to_owned()).unwrap_or_default();
        Ok(format!("{name} holds back. {}", self.advance_turn()))
    }

    // ===== turn sequencing =====

    /// Health check, stamina regeneration, then the enemy's turn.
    fn advance_turn(&mut self) -> String {
        if let Some(result) = self.check_health() {
            return self.finish(result);
        }

        let Some(session) = self.session.as_mut() else {
            return String::new();
        };
        let player_regen = regen_amount(&self.config, &session.player);
        let enemy_regen = regen_amount(&self.config, &session.enemy);
        session.player.regenerate_one_round(player_regen);
        session.enemy.regenerate_one_round(enemy_regen);

        let narration = self.enemy_turn();
        if let Some(session) = self.session.as_mut() {
            session.round += 1;
        }
        narration
    }

    /// Enemy acts automatically: maybe its skill, then always a swing.
    fn enemy_turn(&mut self) -> String {
        let Some(session) = self.session.as_mut() else {
            return String::new();
        };
        let BattleSession {
            player,
            enemy,
            round,
        } = session;

        let mut parts = Vec::with_capacity(2);
        if should_trigger_enemy_skill(enemy, self.config.enemy_skill_chance, &mut self.rng) {
            debug!(
                target: "arena::engine",
                round = *round,
                enemy = enemy.name(),
                "enemy skill triggered"
            );
            parts.push(enemy.use_skill_once(player));
        }

        let outcome = enemy.hit(player, &mut self.rng);
        parts.push(narration::strike(enemy, player, outcome));
        parts.join(" ")
    }

    fn check_health(&self) -> Option<BattleResult> {
        self.session.as_ref().and_then(BattleSession::outcome)
    }

    /// Enters `Finished`, drops the session and returns the result narration.
    fn finish(&mut self, result: BattleResult) -> String {
        let rounds = self.session.as_ref().map_or(0, BattleSession::round);
        info!(target: "arena::engine", ?result, rounds, "battle finished");

        self.session = None;
        self.phase = BattlePhase::Finished;
        self.result = Some(result);
        result.to_string()
    }
}

fn running_session<'a>(
    session: &'a mut Option<BattleSession>,
    phase: BattlePhase,
    operation: &'static str,
) -> Result<&'a mut BattleSession, BattleError> {
    match session {
        Some(session) if phase == BattlePhase::Running => Ok(session),
        _ => {
            warn!(target: "arena::engine", operation, %phase, "action rejected");
            Err(BattleError::illegal_state(operation, phase))
        }
    }
}

fn validate_gear(unit: &CombatUnit) -> Result<(), BattleError> {
    let missing = if unit.weapon().is_none() {
        MissingGear::Weapon
    } else if unit.armor().is_none() {
        MissingGear::Armor
    } else {
        return Ok(());
    };
    Err(BattleError::InvalidSetup {
        role: unit.role(),
        name: unit.name().to_owned(),
        missing,
    })
}

fn regen_amount(config: &ArenaConfig, unit: &CombatUnit) -> f32 {
    if config.scale_regen_by_class {
        config.stamina_per_round * unit.class().stamina
    } else {
        config.stamina_per_round
    }
}
