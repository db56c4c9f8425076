pub use crate::data::{NormalRailTable, PoweredRailTable, RecipeBook, RecipeSpec};
pub use crate::domain::{distance, minimum_craft, recipe_minimum, stack, Calculator};
pub use crate::entities::{Coordinate, Distance, Material, Quantity, RecipeKind, Stack};
pub use crate::error::{RailError, RailResult};
pub use crate::report::{
    NormalRailResources, PoweredRailResources, RedstoneTorchResources, ResourceReport,
    ResourceTotals,
};
pub use crate::traits::RecipeSource;
