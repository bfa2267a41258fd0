//! Yes/no confirmation read from the terminal

use anyhow::{Context, Result};
use console::Term;
use std::io::{BufRead, IsTerminal};

/// Whether `input` accepts the prompt.
///
/// An empty answer accepts only when `empty_is_yes` is set; otherwise the
/// trimmed answer must start with `y` (any case).
pub fn interpret_answer(input: &str, empty_is_yes: bool) -> bool {
    if empty_is_yes && input.is_empty() {
        return true;
    }
    input.trim().to_lowercase().starts_with('y')
}

/// Show `prompt` and read one line of input.
/// Leaves it to the caller to decide what a rejection means.
pub fn confirm(prompt: &str, empty_is_yes: bool) -> Result<bool> {
    let term = Term::stderr();
    term.write_str(prompt).context("Failed to write prompt")?;

    // console only reads from a real terminal; piped answers come from stdin
    let stdin = std::io::stdin();
    if !term.is_term() || !stdin.is_terminal() {
        return confirm_from(stdin.lock(), empty_is_yes);
    }

    let input = term.read_line().context("Failed to read answer")?;
    Ok(interpret_answer(&input, empty_is_yes))
}

/// Read one answer line from `reader`. End of input rejects.
pub fn confirm_from(mut reader: impl BufRead, empty_is_yes: bool) -> Result<bool> {
    let mut input = String::new();
    if reader
        .read_line(&mut input)
        .context("Failed to read answer")?
        == 0
    {
        return Ok(false);
    }

    let input = input.trim_end_matches(['\r', '\n']);
    Ok(interpret_answer(input, empty_is_yes))
}
