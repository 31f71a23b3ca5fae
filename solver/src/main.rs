use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::debug;
use thalweg::Grid;

/// Find the minimum-risk route across a grid of digit risk levels.
///
/// The input file holds one grid row per line, one risk digit (1 to 9) per
/// cell. The route overlay and its total risk are printed to stdout.
#[derive(Parser)]
struct Args {
    /// Path to the grid file.
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let grid: Grid = text.parse()?;
    let route = grid.solve()?;
    debug!("route crosses {} cells", route.cells().len());

    println!("{route}");
    println!("total risk: {}", route.risk());

    Ok(())
}
