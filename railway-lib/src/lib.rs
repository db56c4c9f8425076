//! Material calculator for minecart tracks.
//!
//! Given two horizontal coordinates, [`domain::distance`] yields the Manhattan distance of the
//! track and [`domain::Calculator::compute_report`] turns it into iron ingots, gold ingots,
//! sticks and redstone dust for normal rails, powered rails and the redstone torches that keep
//! the powered rails switched on.

pub mod data;
pub mod domain;
pub mod entities;
pub mod error;
pub mod prelude;
pub mod report;
pub mod traits;
