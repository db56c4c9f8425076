use std::{
    env,
    io::{BufRead, Write},
    path::PathBuf,
};

use railway_lib::prelude::*;

use crate::error::AppError;

pub const RECIPES_ENV: &str = "RAILWAY_RECIPES";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub json: bool,
    pub recipes: Option<PathBuf>,
    pub waypoints: Vec<Coordinate>,
    pub help: bool,
}

impl Options {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, AppError> {
        let mut options = Self::default();
        let mut numbers: Vec<i32> = vec![];
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => options.json = true,
                "-h" | "--help" => options.help = true,
                "--recipes" => {
                    let path = args.next().ok_or_else(|| {
                        AppError::Usage("`--recipes` needs a file path".to_string())
                    })?;
                    options.recipes = Some(path.into());
                }
                other => {
                    let number = other
                        .parse()
                        .map_err(|_| AppError::Usage(format!("Unexpected argument `{other}`")))?;
                    numbers.push(number);
                }
            }
        }

        if numbers.len() % 2 != 0 {
            return Err(AppError::Usage(format!(
                "Coordinates come in X Z pairs, got {} numbers",
                numbers.len()
            )));
        }

        options.waypoints = numbers
            .chunks_exact(2)
            .map(|pair| Coordinate::new(pair[0], pair[1]))
            .collect();

        Ok(options)
    }

    /// The command line flag wins over the environment.
    pub fn recipes_path(&self) -> Option<PathBuf> {
        self.recipes
            .clone()
            .or_else(|| env::var_os(RECIPES_ENV).map(PathBuf::from))
    }
}

pub fn load_recipe_book(path: Option<PathBuf>) -> Result<RecipeBook, AppError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading recipe table");
            Ok(RecipeBook::from_file(path)?)
        }
        None => Ok(RecipeBook::default()),
    }
}

/// The text report, or pretty JSON with a trailing newline.
pub fn render_report(report: &ResourceReport, json: bool) -> Result<String, AppError> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(report)?))
    } else {
        Ok(report.to_string())
    }
}

/// Asks for a coordinate until the answer parses. Gives up with an error on end of input.
pub fn prompt_coordinate(
    label: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Coordinate, AppError> {
    loop {
        write!(output, "{label} coordinate (x z): ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(AppError::Usage(format!("No {label} coordinate given")));
        }

        match line.parse::<Coordinate>() {
            Ok(coordinate) => return Ok(coordinate),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}
