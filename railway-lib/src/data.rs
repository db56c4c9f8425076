use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{
    domain::recipe_minimum,
    entities::{Distance, Material, Quantity},
    error::{RailError, RailResult},
};

/// How much of one material a recipe consumes per crafted unit, and how the raw amount is
/// rounded into something that can actually be crafted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeSpec {
    /// Material per crafted unit, e.g. 6 ingots for 16 rails is `0.375`.
    pub coefficient: Decimal,
    /// Every non-zero amount is rounded up to a multiple of this.
    pub batch: Quantity,
    /// Smallest non-zero amount worth crafting.
    pub minimum: Quantity,
}

impl RecipeSpec {
    pub const fn new(coefficient: Decimal, batch: Quantity, minimum: Quantity) -> Self {
        Self {
            coefficient,
            batch,
            minimum,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct NormalRailTable {
    pub iron_ingot: RecipeSpec,
    pub stick: RecipeSpec,
}

impl Default for NormalRailTable {
    fn default() -> Self {
        Self {
            iron_ingot: RecipeSpec::new(dec!(0.375), 6, recipe_minimum(Material::IronIngot)),
            stick: RecipeSpec::new(dec!(0.0625), 8, recipe_minimum(Material::Stick)),
        }
    }
}

/// Powered rail redstone always equals its stick count, so it has no entry of its own.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct PoweredRailTable {
    pub gold_ingot: RecipeSpec,
    pub stick: RecipeSpec,
    /// Blocks of track per powered rail.
    pub spacing: Distance,
}

impl Default for PoweredRailTable {
    fn default() -> Self {
        Self {
            gold_ingot: RecipeSpec::new(dec!(0.375), 6, recipe_minimum(Material::GoldIngot)),
            stick: RecipeSpec::new(dec!(0.0625), 8, recipe_minimum(Material::Stick)),
            spacing: 32,
        }
    }
}

/// Full recipe table used by [`crate::domain::Calculator`].
///
/// Redstone torches are always one stick and one redstone dust per torch and are not
/// configurable.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RecipeBook {
    pub normal_rail: NormalRailTable,
    pub powered_rail: PoweredRailTable,
}

impl RecipeBook {
    /// Rejects tables the calculator can't make sense of.
    pub fn validate(&self) -> RailResult<()> {
        let entries = [
            ("normal_rail.iron_ingot", &self.normal_rail.iron_ingot),
            ("normal_rail.stick", &self.normal_rail.stick),
            ("powered_rail.gold_ingot", &self.powered_rail.gold_ingot),
            ("powered_rail.stick", &self.powered_rail.stick),
        ];

        for (name, spec) in entries {
            if spec.coefficient < Decimal::ZERO {
                return Err(RailError::InvalidRecipe(format!(
                    "`{name}` has negative coefficient {}",
                    spec.coefficient
                )));
            }
            if spec.batch == 0 {
                return Err(RailError::InvalidRecipe(format!(
                    "`{name}` has a batch size of zero"
                )));
            }
        }

        if self.powered_rail.spacing == 0 {
            return Err(RailError::InvalidRecipe(
                "`powered_rail.spacing` must be at least one block".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_book_is_valid() {
        assert!(RecipeBook::default().validate().is_ok());
    }

    #[test]
    fn zero_batch_is_rejected() {
        let mut book = RecipeBook::default();
        book.powered_rail.stick.batch = 0;

        let err = book.validate().unwrap_err();
        assert!(err.to_string().contains("powered_rail.stick"));
    }

    #[test]
    fn negative_coefficient_is_rejected() {
        let mut book = RecipeBook::default();
        book.normal_rail.iron_ingot.coefficient = dec!(-0.375);

        assert!(matches!(book.validate(), Err(RailError::InvalidRecipe(_))));
    }

    #[test]
    fn zero_spacing_is_rejected() {
        let mut book = RecipeBook::default();
        book.powered_rail.spacing = 0;

        assert!(matches!(book.validate(), Err(RailError::InvalidRecipe(_))));
    }
}
