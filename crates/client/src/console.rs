//! Line-based terminal I/O.
use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Errors from reading or writing the terminal.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Input reached end of file; treated as the player leaving.
    #[error("input closed")]
    Closed,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Prompt-and-answer wrapper over any reader/writer pair.
pub struct Console<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and reads one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{prompt} ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::Closed);
        }
        Ok(line.trim().to_owned())
    }

    /// Asks until a non-empty answer is given.
    pub fn ask_non_empty(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Lists `options` numbered from 1 and returns the index picked.
    ///
    /// Accepts either the number or the option name (case-insensitive); asks again
    /// on anything else.
    pub fn choose<S: AsRef<str>>(
        &mut self,
        prompt: &str,
        options: &[S],
    ) -> Result<usize, ConsoleError> {
        self.say(prompt)?;
        for (i, option) in options.iter().enumerate() {
            self.say(format_args!("  {}. {}", i + 1, option.as_ref()))?;
        }

        loop {
            let answer = self.ask(">")?;
            if let Some(index) = match_option(&answer, options) {
                return Ok(index);
            }
            self.say(format_args!(
                "Pick a number between 1 and {} or type a name.",
                options.len()
            ))?;
        }
    }

    /// Yes/no question; only `y` or `yes` count as yes.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, ConsoleError> {
        let answer = self.ask(prompt)?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }
}

fn match_option<S: AsRef<str>>(answer: &str, options: &[S]) -> Option<usize> {
    if let Ok(number) = answer.parse::<usize>() {
        return (1..=options.len()).contains(&number).then(|| number - 1);
    }
    options
        .iter()
        .position(|option| option.as_ref().eq_ignore_ascii_case(answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn printed(console: &Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    #[test]
    fn choose_accepts_number_or_name() {
        let options = ["hatchet", "knife", "stick"];

        let mut by_number = console("2\n");
        assert_eq!(by_number.choose("Weapon:", &options).unwrap(), 1);
        assert!(printed(&by_number).contains("  3. stick"));

        let mut by_name = console("STICK\n");
        assert_eq!(by_name.choose("Weapon:", &options).unwrap(), 2);
    }

    #[test]
    fn choose_asks_again_on_bad_input() {
        let mut console = console("0\nsword\n1\n");
        assert_eq!(console.choose("Weapon:", &["knife"]).unwrap(), 0);
        assert_eq!(
            printed(&console).matches("Pick a number between 1 and 1").count(),
            2
        );
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut console = console("");
        assert!(matches!(console.ask("name?"), Err(ConsoleError::Closed)));
    }

    #[test]
    fn blank_answers_are_skipped() {
        let mut console = console("\n   \nAda\n");
        assert_eq!(console.ask_non_empty("name?").unwrap(), "Ada");
    }

    #[test]
    fn confirm_defaults_to_no() {
        assert!(console("yes\n").confirm("again?").unwrap());
        assert!(!console("\n").confirm("again?").unwrap());
        assert!(!console("nope\n").confirm("again?").unwrap());
    }
}
