/// Battle tuning constants and runtime-tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ArenaConfig {
    /// Stamina restored to each unit at the end of every round.
    pub stamina_per_round: f32,

    /// Chance (in percent, 0..=100) that the enemy fires its skill on a given turn.
    pub enemy_skill_chance: u32,

    /// When set, the per-round stamina gain is multiplied by the unit class'
    /// stamina multiplier. Off by default: every unit regains the same flat amount.
    pub scale_regen_by_class: bool,
}

impl ArenaConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STAMINA_PER_ROUND: f32 = 1.0;
    pub const DEFAULT_ENEMY_SKILL_CHANCE: u32 = 10;

    pub fn new() -> Self {
        Self {
            stamina_per_round: Self::DEFAULT_STAMINA_PER_ROUND,
            enemy_skill_chance: Self::DEFAULT_ENEMY_SKILL_CHANCE,
            scale_regen_by_class: false,
        }
    }

    pub fn with_stamina_per_round(mut self, stamina_per_round: f32) -> Self {
        self.stamina_per_round = stamina_per_round.max(0.0);
        self
    }

    pub fn with_enemy_skill_chance(mut self, percent: u32) -> Self {
        self.enemy_skill_chance = percent.min(100);
        self
    }

    pub fn with_class_scaled_regen(mut self, enabled: bool) -> Self {
        self.scale_regen_by_class = enabled;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
