//! Line-oriented prompting for the terminal player.

use anyhow::{Context, Result, bail};
use std::io::{self, Write};

/// Prints a prompt and reads one trimmed line from stdin.
///
/// # Errors
///
/// Fails when stdin is closed, so callers never spin on EOF.
pub fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line).context("reading input")?;
    if read == 0 {
        bail!("input closed");
    }
    Ok(line.trim().to_string())
}

/// Re-prompts until the user enters one of the accepted answers.
pub fn read_choice(prompt: &str, retry: &str, accepted: &[&str]) -> Result<String> {
    let mut answer = read_line(prompt)?;
    while !accepted.contains(&answer.as_str()) {
        answer = read_line(retry)?;
    }
    Ok(answer)
}
