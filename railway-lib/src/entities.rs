use std::{fmt, str::FromStr};

use itertools::Itertools as _;
use serde::{Deserialize, Serialize};

use crate::error::RailError;

pub type Distance = u64;
pub type Quantity = u64;

/// Amount of items that fit into one inventory slot.
pub const STACK_SIZE: Quantity = 64;

/// A block position on the horizontal plane. Height is ignored, tracks are assumed flat.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub z: i32,
}

impl Coordinate {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, z): (i32, i32)) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// Accepts `"x z"`, `"x,z"` and `"x, z"`.
impl FromStr for Coordinate {
    type Err = RailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RailError::InvalidCoordinate(s.trim().to_string());

        let (x, z) = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect_tuple()
            .ok_or_else(invalid)?;

        Ok(Self {
            x: x.parse().map_err(|_| invalid())?,
            z: z.parse().map_err(|_| invalid())?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum Material {
    IronIngot,
    GoldIngot,
    Stick,
    Redstone,
}

impl Material {
    pub const ALL: [Material; 4] = [
        Material::IronIngot,
        Material::GoldIngot,
        Material::Stick,
        Material::Redstone,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Material::IronIngot => "Iron Ingots",
            Material::GoldIngot => "Gold Ingots",
            Material::Stick => "Sticks",
            Material::Redstone => "Redstone",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeKind {
    NormalRail,
    PoweredRail,
    RedstoneTorch,
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeKind::NormalRail => f.write_str("Regular rail"),
            RecipeKind::PoweredRail => f.write_str("Powered rail"),
            RecipeKind::RedstoneTorch => f.write_str("Redstone torch"),
        }
    }
}

/// How many full stacks a quantity takes up, plus what is left over.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stack {
    pub stacks: Quantity,
    pub remainder: Quantity,
}

impl Stack {
    pub fn total(&self) -> Quantity {
        self.stacks * STACK_SIZE + self.remainder
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} stacks and {}", self.stacks, self.remainder)
    }
}
