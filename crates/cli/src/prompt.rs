//! Interactive prompts

use std::io::{self, BufRead, Write};

use storefront_app::domain::carts::Confirm;

/// Confirms everything, for `--yes`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Asks on the terminal. Anything but an explicit yes declines.
///
/// Reading stdin blocks the calling runtime thread until the user answers.
/// Only one command runs per process, so nothing else is starved.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        read_line(&format!("{prompt} [y/N] ")).is_ok_and(|answer| is_yes(&answer))
    }
}

/// Print `prompt` on stderr and read one line from stdin.
pub(crate) fn read_line(prompt: &str) -> io::Result<String> {
    let mut stderr = io::stderr();

    write!(stderr, "{prompt}")?;
    stderr.flush()?;

    let mut line = String::new();

    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
