//! Yes/no confirmation prompt.

use std::io::{self, BufRead, Write};

/// Ask a yes/no question and block until the operator answers.
///
/// Only `y` or `yes` (any case) confirm. An empty answer or end of input
/// declines.
pub fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, out: &mut W) -> io::Result<bool> {
    write!(out, "{} [y/N]: ", question)?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}
