//! Confirmation prompts.

use std::io::{self, BufRead, Write};

use crate::traits::Confirm;

/// Asks on stderr and reads the answer from stdin. Only `y`/`yes` count
/// as agreement.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{} [y/N] ", prompt);
        let _ = stderr.flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

/// An answer collected before the flow runs: `--yes` on the command line,
/// or the result of the browser's confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preanswered(pub bool);

impl Confirm for Preanswered {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
