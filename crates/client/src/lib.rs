//! Terminal client for the arena.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ Arena       (battle engine, owns the RNG)
//!   ├─→ Catalog     (weapons and armors to pick from)
//!   └─→ Classes     (unit classes to pick from)
//! ```
//!
//! The client only talks to the engine through its control surface
//! (`start`, `player_hit`, `player_use_skill`, `player_skip_turn`) and prints
//! whatever narration comes back.

mod builder;
pub mod command;
pub mod config;
pub mod console;
pub mod logging;
pub mod setup;

pub use builder::ClientBuilder;
pub use command::Command;
pub use config::ClientConfig;
pub use console::{Console, ConsoleError};

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use arena_content::EquipmentCatalog;
use arena_core::{Arena, BattleResult, CombatUnit, PcgRng, UnitClassRegistry};
use tracing::info;

/// How a single battle left the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleEnd {
    Finished(BattleResult),
    Quit,
}

/// Top-level client container.
pub struct Client {
    arena: Arena<PcgRng>,
    catalog: EquipmentCatalog,
    classes: UnitClassRegistry,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn arena(&self) -> &Arena<PcgRng> {
        &self.arena
    }

    /// Runs battles until the player quits, declines a rematch or closes input.
    pub fn run<I: BufRead, O: Write>(&mut self, console: &mut Console<I, O>) -> Result<()> {
        match self.run_battles(console) {
            Err(err)
                if matches!(
                    err.downcast_ref::<ConsoleError>(),
                    Some(ConsoleError::Closed)
                ) =>
            {
                info!(target: "arena::client", "input closed, leaving the arena");
                Ok(())
            }
            other => other,
        }
    }

    fn run_battles<I: BufRead, O: Write>(&mut self, console: &mut Console<I, O>) -> Result<()> {
        console.say("Welcome to the arena!")?;
        loop {
            let player = setup::create_player(console, &self.classes, &self.catalog)?;
            let enemy = setup::random_enemy(self.arena.rng_mut(), &self.classes, &self.catalog)
                .context("nothing to build an enemy from")?;
            console.say(describe_opponent(&enemy))?;

            let intro = self.arena.start(player, enemy)?;
            console.say(intro)?;
            console.say("Commands:")?;
            console.say(Command::help_text())?;

            match self.play_battle(console)? {
                BattleEnd::Quit => return Ok(()),
                BattleEnd::Finished(result) => {
                    info!(target: "arena::client", %result, "battle over");
                }
            }

            if !console.confirm("Fight again? [y/N]")? {
                console.say("Farewell.")?;
                return Ok(());
            }
        }
    }

    /// Reads commands until the running battle finishes or the player quits.
    pub fn play_battle<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<BattleEnd> {
        loop {
            let line = console.ask(">")?;
            let Some(command) = Command::parse(&line) else {
                console.say(format_args!(
                    "Unknown command `{line}`. Try one of: {}.",
                    Command::usage()
                ))?;
                continue;
            };

            let narration = match command {
                Command::Hit => self.arena.player_hit()?,
                Command::Skill => self.arena.player_use_skill()?,
                Command::Skip => self.arena.player_skip_turn()?,
                Command::Status => {
                    console.say(status_report(&self.arena))?;
                    continue;
                }
                Command::Quit => {
                    console.say("You leave the arena.")?;
                    return Ok(BattleEnd::Quit);
                }
            };
            console.say(narration)?;

            if let Some(result) = self.arena.result() {
                return Ok(BattleEnd::Finished(result));
            }
            console.say(status_report(&self.arena))?;
        }
    }
}

fn describe_opponent(enemy: &CombatUnit) -> String {
    format!(
        "Your opponent is {} the {}, armed with {} and wearing {}.",
        enemy.name(),
        enemy.class().name,
        enemy.weapon().map_or("nothing", |w| w.name.as_str()),
        enemy.armor().map_or("nothing", |a| a.name.as_str()),
    )
}

/// One line per fighter: health, stamina and whether the skill is still available.
pub fn status_report(arena: &Arena<PcgRng>) -> String {
    [arena.player(), arena.enemy()]
        .into_iter()
        .flatten()
        .map(status_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn status_line(unit: &CombatUnit) -> String {
    let class = unit.class();
    format!(
        "{} the {}: health {}/{}, stamina {}/{}, {} {}",
        unit.name(),
        class.name,
        unit.health_points(),
        class.max_health,
        unit.stamina_points(),
        class.max_stamina,
        class.skill.name,
        if unit.skill_used() { "spent" } else { "ready" },
    )
}
