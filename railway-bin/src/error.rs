use railway_lib::error::RailError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Rail(#[from] RailError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),
}

pub const USAGE: &str = "\
Usage: railway-bin [--json] [--recipes PATH] [X Z]...

Prints the materials needed for a rail track through the given coordinates.
With fewer than two coordinates, asks for start and end coordinates instead.

Options:
  --json            print the report as JSON
  --recipes PATH    read the recipe table from a JSON file
                    (defaults to $RAILWAY_RECIPES, then the built-in table)
  -h, --help        show this message";
