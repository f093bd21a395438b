//! Interactive N-Queens enumeration: reads a board size from stdin
//! and prints every solution followed by the total count.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use u_exact::queens::{QueensConfig, QueensRunner};

fn main() -> Result<()> {
    env_logger::init();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    let size = line
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid board size {:?}", line.trim()))?;
    if size < 0 {
        bail!("board size must be non-negative, got {size}");
    }

    let config = QueensConfig::default()
        .with_size(size as usize)
        .with_collect_solutions(false);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Stream solutions as the search finds them; defer any write
    // failure until after the search returns.
    let mut write_error: Option<io::Error> = None;
    let result = QueensRunner::run_with_observer(&config, |index, board| {
        if write_error.is_some() {
            return;
        }
        if let Err(err) = write!(out, "Solution {index}:\n{board}") {
            write_error = Some(err);
        }
    });
    if let Some(err) = write_error {
        return Err(err).context("failed to write solution");
    }

    if result.count == 0 {
        writeln!(out, "No solutions found.")?;
    } else {
        writeln!(out, "Number of solutions found: {}", result.count)?;
    }

    Ok(())
}
