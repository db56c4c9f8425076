use std::{env, io, process::ExitCode};

use railway_lib::prelude::*;
use tracing_subscriber::EnvFilter;

mod cli;
mod error;

use cli::Options;
use error::{AppError, USAGE};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), AppError> {
    let options = Options::parse(env::args().skip(1))?;

    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    let calculator = Calculator::new(cli::load_recipe_book(options.recipes_path())?)?;

    let waypoints = if options.waypoints.len() >= 2 {
        options.waypoints
    } else {
        let mut input = io::stdin().lock();
        let mut output = io::stdout();
        vec![
            cli::prompt_coordinate("Start", &mut input, &mut output)?,
            cli::prompt_coordinate("End", &mut input, &mut output)?,
        ]
    };

    let report = calculator.compute_route(&waypoints)?;
    tracing::info!(waypoints = waypoints.len(), distance = report.distance, "computed report");

    print!("{}", cli::render_report(&report, options.json)?);

    Ok(())
}

fn main() -> ExitCode {
    enable_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "calculation failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
