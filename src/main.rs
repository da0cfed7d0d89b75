//! Rankify demo CLI
//!
//! Thin glue over the library: load a file, list its numeric columns or
//! rank by one of them, print the result as JSON for downstream tooling.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use rankify::ranking::DEFAULT_TOP_N;
use rankify::{load_tables, rank_single, Bounds, Preference};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [file, rest @ ..] = args.as_slice() else {
        bail!("usage: rankify <FILE> [PARAMETER] [TOP_N] [lower|higher]");
    };

    let path = PathBuf::from(file);
    let tables =
        load_tables(&path).with_context(|| format!("loading {}", path.display()))?;

    let Some(parameter) = rest.first() else {
        // No parameter given: list what the file offers.
        for name in tables.numeric_headers() {
            println!("{name}");
        }
        return Ok(());
    };

    let top_n = match rest.get(1) {
        Some(s) => s.parse().context("TOP_N must be a positive integer")?,
        None => DEFAULT_TOP_N,
    };
    let preference = match rest.get(2) {
        Some(s) => s.parse::<Preference>().map_err(|e| anyhow::anyhow!(e))?,
        None => Preference::Lower,
    };

    let ranking = rank_single(&tables, parameter, preference, Bounds::UNBOUNDED, top_n)?;
    println!("{}", serde_json::to_string_pretty(&ranking)?);
    Ok(())
}
