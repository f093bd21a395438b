//! Interactive insertion sort: reads `n` integers from stdin, sorts
//! them in place, and prints the sorted sequence space-separated.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use u_exact::sort::insertion_sort;

/// Reads `count` whitespace-separated integers, spanning as many
/// lines as needed.
fn read_integers(reader: &mut impl BufRead, count: usize) -> Result<Vec<i64>> {
    let mut values = Vec::with_capacity(count);
    let mut line = String::new();

    while values.len() < count {
        line.clear();
        let bytes = reader.read_line(&mut line).context("failed to read stdin")?;
        if bytes == 0 {
            bail!("expected {} integers, got {}", count, values.len());
        }
        for token in line.split_whitespace() {
            if values.len() == count {
                break;
            }
            let value = token
                .parse::<i64>()
                .with_context(|| format!("invalid integer {token:?}"))?;
            values.push(value);
        }
    }

    Ok(values)
}

fn main() -> Result<()> {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    print!("Enter n: ");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("failed to read stdin")?;
    let n = line
        .trim()
        .parse::<i64>()
        .with_context(|| format!("invalid array length {:?}", line.trim()))?;
    if n < 0 {
        bail!("array length must be non-negative, got {n}");
    }

    print!("Enter elements of array:  ");
    io::stdout().flush()?;

    let mut values = read_integers(&mut input, n as usize)?;
    let inversions = insertion_sort(&mut values);
    log::debug!("sorted {n} elements, {inversions} inversions");

    let rendered: Vec<String> = values.iter().map(i64::to_string).collect();
    println!("{}", rendered.join(" "));

    Ok(())
}
