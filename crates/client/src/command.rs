//! Battle commands typed at the prompt.
use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString};

/// One line of player input during a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Command {
    #[strum(to_string = "hit", serialize = "h", serialize = "attack")]
    Hit,
    #[strum(to_string = "skill", serialize = "s")]
    Skill,
    #[strum(to_string = "skip", serialize = "pass", serialize = "wait")]
    Skip,
    #[strum(to_string = "status", serialize = "st")]
    Status,
    #[strum(to_string = "quit", serialize = "q", serialize = "exit")]
    Quit,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Hit,
        Command::Skill,
        Command::Skip,
        Command::Status,
        Command::Quit,
    ];

    /// Parses a trimmed input line; `None` for anything unrecognised.
    pub fn parse(line: &str) -> Option<Self> {
        Self::from_str(line.trim()).ok()
    }

    pub fn help(self) -> &'static str {
        match self {
            Command::Hit => "swing your weapon",
            Command::Skill => "use your class skill (once per battle)",
            Command::Skip => "hold back and let the round pass",
            Command::Status => "show health and stamina of both fighters",
            Command::Quit => "leave the arena",
        }
    }

    pub fn usage() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One line per command with its description.
    pub fn help_text() -> String {
        Self::ALL
            .iter()
            .map(|c| format!("  {:<7}{}", c.as_ref(), c.help()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
