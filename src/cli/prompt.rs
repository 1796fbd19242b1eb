use anyhow::Result;
use std::collections::VecDeque;
use std::io::Write;

/// A source of yes/no answers. Cleanup steps ask through this trait so
/// the same flow works on a terminal, under --yes, and in tests.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Interactive terminal prompt. Only an explicit "y" or "yes"
/// (case-insensitive) proceeds; anything else, including EOF on a
/// non-interactive stdin, declines.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        print!("  {} {} [y/N] ", "❓", prompt);
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        let answer = input.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

/// Answers every prompt affirmatively. Backs the --yes flag.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Replays a fixed sequence of answers, then declines. Used by tests
/// to script a run without a terminal.
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
}

impl ScriptedConfirm {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}
