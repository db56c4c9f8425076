use std::env;

use anyhow::{ensure, Context as _, Result};
use itertools::Itertools as _;
use railway_lib::prelude::*;
use tracing_subscriber::EnvFilter;

/// Sweeps track lengths and prints every length at which some total changes, so the rounding
/// steps of the recipe table are easy to eyeball.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let max_distance: Distance = env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()
        .context("first argument must be the largest track length to sweep")?
        .unwrap_or(1024);

    let book = match env::var_os("RAILWAY_RECIPES") {
        Some(path) => RecipeBook::from_file(&path)
            .with_context(|| format!("reading recipe table from {path:?}"))?,
        None => RecipeBook::default(),
    };
    let calculator = Calculator::new(book)?;

    let reports = (0..=max_distance)
        .map(|distance| calculator.compute_report(distance))
        .collect::<RailResult<Vec<_>>>()?;

    println!(
        "{:>8} {:>8} {:>8} {:>8} {:>8}",
        "blocks", "iron", "gold", "sticks", "redstone"
    );

    let breakpoints = reports
        .iter()
        .dedup_by(|a, b| a.totals == b.totals)
        .collect_vec();

    for report in &breakpoints {
        let amounts = report
            .totals
            .iter()
            .map(|(_, amount)| format!("{amount:>8}"))
            .join(" ");
        println!("{:>8} {amounts}", report.distance);
    }

    for (before, after) in breakpoints.iter().tuple_windows() {
        for ((material, a), (_, b)) in before.totals.iter().zip(after.totals.iter()) {
            ensure!(
                b >= a,
                "{material} drops from {a} to {b} between {} and {} blocks",
                before.distance,
                after.distance
            );
        }
    }

    Ok(())
}
