use std::io;
use thiserror::Error;

pub type RailResult<T> = Result<T, RailError>;

#[derive(Error, Debug)]
pub enum RailError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("Failed to parse provided recipe json: `{0}`")]
    BadJson(serde_json::Error),

    #[error("Can't read `{0}` as a coordinate, expected two integers like `120 -45`")]
    InvalidCoordinate(String),

    #[error("Recipe table is invalid: {0}")]
    InvalidRecipe(String),

    #[error("Resource quantity doesn't fit into an unsigned 64-bit integer")]
    QuantityOverflow,
}
