use std::{fs, path::Path};

use crate::{
    data::RecipeBook,
    error::{RailError, RailResult},
};

/// Something a [`RecipeBook`] can be read from.
pub trait RecipeSource {
    fn from_str(recipes_str: &str) -> RailResult<Self>
    where
        Self: Sized;

    fn from_file(path: impl AsRef<Path>) -> RailResult<Self>
    where
        Self: Sized,
    {
        let file_content = fs::read_to_string(path).map_err(RailError::Io)?;

        Self::from_str(&file_content)
    }
}

/// Parses a JSON recipe book. Missing entries keep their default values, so a file only needs
/// to name what it overrides.
impl RecipeSource for RecipeBook {
    fn from_str(recipes_str: &str) -> RailResult<Self> {
        let book: RecipeBook = serde_json::from_str(recipes_str).map_err(RailError::BadJson)?;
        book.validate()?;

        Ok(book)
    }
}
