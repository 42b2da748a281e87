// file: src/prompt.rs
// description: interactive y/N confirmation before destructive runs

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Prints `message` followed by `[y/N]` and reads one line of input.
/// Only `y` or `yes` (any case) confirm; end of input declines.
pub fn confirm<R: BufRead, W: Write>(message: &str, mut input: R, mut output: W) -> io::Result<bool> {
    write!(output, "{} [y/N]: ", message.yellow().bold())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
