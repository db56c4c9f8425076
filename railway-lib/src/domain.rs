use itertools::Itertools as _;
use rust_decimal::{prelude::ToPrimitive as _, Decimal};
use tracing::{debug, instrument};

use crate::{
    data::{RecipeBook, RecipeSpec},
    entities::{Coordinate, Distance, Material, Quantity, Stack, STACK_SIZE},
    error::{RailError, RailResult},
    report::{
        NormalRailResources, PoweredRailResources, RedstoneTorchResources, ResourceReport,
        ResourceTotals,
    },
};

/// Manhattan distance between two points, which is the length of a track that only runs along
/// the x and z axes.
pub fn distance(from: Coordinate, to: Coordinate) -> Distance {
    Distance::from(from.x.abs_diff(to.x)) + Distance::from(from.z.abs_diff(to.z))
}

/// Splits a quantity into full 64 item stacks and the leftover.
pub fn stack(quantity: Quantity) -> Stack {
    Stack {
        stacks: quantity / STACK_SIZE,
        remainder: quantity % STACK_SIZE,
    }
}

/// Smallest amount of a material that is worth crafting with: a full ingot batch for the rail
/// recipes, a single item for everything else. The default [`RecipeBook`] takes its minimums
/// from here.
pub fn recipe_minimum(material: Material) -> Quantity {
    match material {
        Material::IronIngot | Material::GoldIngot => 6,
        Material::Stick | Material::Redstone => 1,
    }
}

/// Applies the fixed minimum of [`recipe_minimum`]. A calculator built from a custom book uses
/// that book's [`RecipeSpec::minimum`] instead.
pub fn minimum_craft(material: Material, amount: Quantity) -> Quantity {
    amount.max(recipe_minimum(material))
}

fn round_up_to_multiple(amount: Quantity, batch: Quantity) -> RailResult<Quantity> {
    let rem = amount
        .checked_rem(batch)
        .ok_or_else(|| RailError::InvalidRecipe("batch size must be at least one".to_string()))?;

    match rem {
        0 => Ok(amount),
        rem => amount
            .checked_add(batch - rem)
            .ok_or(RailError::QuantityOverflow),
    }
}

fn checked_sum(amounts: &[Quantity]) -> RailResult<Quantity> {
    amounts.iter().try_fold(0, |acc: Quantity, amount| {
        acc.checked_add(*amount).ok_or(RailError::QuantityOverflow)
    })
}

/// Turns track lengths into material counts using a [`RecipeBook`].
///
/// Holds no running totals; every call starts from nothing, so the same input always produces
/// the same report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Calculator {
    book: RecipeBook,
}

impl Calculator {
    pub fn new(book: RecipeBook) -> RailResult<Self> {
        book.validate()?;

        Ok(Self { book })
    }

    pub fn book(&self) -> &RecipeBook {
        &self.book
    }

    /// Number of powered rails for a track, one every `spacing` blocks, rounded up.
    pub fn placements(&self, distance: Distance) -> Quantity {
        distance.div_ceil(self.book.powered_rail.spacing)
    }

    /// The one conversion every rail recipe goes through.
    ///
    /// The raw amount is `ceil(units * coefficient)`. Zero stays zero, anything else is raised
    /// to the recipe minimum and then rounded up to a whole batch.
    pub fn convert(&self, spec: &RecipeSpec, units: Quantity) -> RailResult<Quantity> {
        let raw = Decimal::from(units)
            .checked_mul(spec.coefficient)
            .ok_or(RailError::QuantityOverflow)?
            .ceil()
            .to_u64()
            .ok_or(RailError::QuantityOverflow)?;

        if raw == 0 {
            return Ok(0);
        }

        let amount = round_up_to_multiple(raw.max(spec.minimum), spec.batch)?;
        debug!(units, raw, amount, coefficient = %spec.coefficient, "converted recipe amount");

        Ok(amount)
    }

    /// Iron ingots and sticks for the whole track laid as normal rail.
    pub fn normal_rail(&self, distance: Distance) -> RailResult<NormalRailResources> {
        let table = &self.book.normal_rail;

        Ok(NormalRailResources {
            rails: distance - self.placements(distance),
            iron_ingots: self.convert(&table.iron_ingot, distance)?,
            sticks: self.convert(&table.stick, distance)?,
        })
    }

    pub fn powered_rail(&self, distance: Distance) -> RailResult<PoweredRailResources> {
        let table = &self.book.powered_rail;
        let placements = self.placements(distance);
        let sticks = self.convert(&table.stick, placements)?;

        Ok(PoweredRailResources {
            rails: placements,
            gold_ingots: self.convert(&table.gold_ingot, placements)?,
            sticks,
            redstone: sticks,
        })
    }

    /// One torch per powered rail, each made of a stick and a redstone dust.
    pub fn redstone_torch(&self, placements: Quantity) -> RedstoneTorchResources {
        RedstoneTorchResources {
            torches: placements,
            sticks: placements,
            redstone: placements,
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn compute_report(&self, distance: Distance) -> RailResult<ResourceReport> {
        let normal_rail = self.normal_rail(distance)?;
        let powered_rail = self.powered_rail(distance)?;
        let redstone_torch = self.redstone_torch(powered_rail.rails);

        let totals = ResourceTotals {
            iron_ingots: normal_rail.iron_ingots,
            gold_ingots: powered_rail.gold_ingots,
            sticks: checked_sum(&[normal_rail.sticks, powered_rail.sticks, redstone_torch.sticks])?,
            redstone: checked_sum(&[powered_rail.redstone, redstone_torch.redstone])?,
        };
        debug!(?totals, "assembled report");

        Ok(ResourceReport {
            distance,
            normal_rail,
            powered_rail,
            redstone_torch,
            totals,
        })
    }

    pub fn compute_between(&self, from: Coordinate, to: Coordinate) -> RailResult<ResourceReport> {
        self.compute_report(distance(from, to))
    }

    /// Costs one continuous track visiting every waypoint in order. Fewer than two waypoints is
    /// a track of length zero.
    pub fn compute_route(&self, waypoints: &[Coordinate]) -> RailResult<ResourceReport> {
        let total = waypoints
            .iter()
            .tuple_windows()
            .try_fold(0 as Distance, |acc, (from, to)| {
                acc.checked_add(distance(*from, *to))
                    .ok_or(RailError::QuantityOverflow)
            })?;

        self.compute_report(total)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn distance_ignores_direction() {
        let a = Coordinate::new(-10, 40);
        let b = Coordinate::new(20, -5);
        assert_eq!(distance(a, b), 75);
        assert_eq!(distance(b, a), 75);
        assert_eq!(distance(a, a), 0);
    }

    #[test]
    fn distance_spans_the_whole_i32_range() {
        let a = Coordinate::new(i32::MIN, i32::MIN);
        let b = Coordinate::new(i32::MAX, i32::MAX);
        assert_eq!(distance(a, b), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn stack_splits_into_full_stacks() {
        assert_eq!(stack(0), Stack { stacks: 0, remainder: 0 });
        assert_eq!(stack(63), Stack { stacks: 0, remainder: 63 });
        assert_eq!(stack(64), Stack { stacks: 1, remainder: 0 });
        assert_eq!(stack(200), Stack { stacks: 3, remainder: 8 });
    }

    #[test]
    fn minimum_craft_uses_fixed_lookup() {
        assert_eq!(minimum_craft(Material::IronIngot, 4), 6);
        assert_eq!(minimum_craft(Material::GoldIngot, 12), 12);
        assert_eq!(minimum_craft(Material::Stick, 0), 1);
        assert_eq!(minimum_craft(Material::Redstone, 3), 3);
    }

    #[test]
    fn default_minimums_match_lookup() {
        let book = RecipeBook::default();
        assert_eq!(book.normal_rail.iron_ingot.minimum, recipe_minimum(Material::IronIngot));
        assert_eq!(book.powered_rail.gold_ingot.minimum, recipe_minimum(Material::GoldIngot));
        assert_eq!(book.normal_rail.stick.minimum, recipe_minimum(Material::Stick));
        assert_eq!(book.powered_rail.stick.minimum, recipe_minimum(Material::Stick));
    }

    #[test]
    fn convert_applies_ceiling_minimum_then_batch() {
        let calc = Calculator::default();
        let iron = calc.book().normal_rail.iron_ingot;

        assert_eq!(calc.convert(&iron, 0).unwrap(), 0);
        // ceil(0.375) = 1, raised to the minimum of 6
        assert_eq!(calc.convert(&iron, 1).unwrap(), 6);
        assert_eq!(calc.convert(&iron, 16).unwrap(), 6);
        // ceil(6.375) = 7, next batch is 12
        assert_eq!(calc.convert(&iron, 17).unwrap(), 12);
        assert_eq!(calc.convert(&iron, 64).unwrap(), 24);
    }

    #[test]
    fn convert_rounds_sticks_to_bundles_of_eight() {
        let calc = Calculator::default();
        let sticks = calc.book().normal_rail.stick;

        assert_eq!(calc.convert(&sticks, 1).unwrap(), 8);
        assert_eq!(calc.convert(&sticks, 128).unwrap(), 8);
        assert_eq!(calc.convert(&sticks, 129).unwrap(), 16);
    }

    #[test]
    fn convert_reports_overflow() {
        let calc = Calculator::default();
        let greedy = RecipeSpec::new(dec!(1000000000), 1, 1);

        assert!(matches!(
            calc.convert(&greedy, u64::MAX),
            Err(RailError::QuantityOverflow)
        ));
    }

    #[test]
    fn convert_rejects_zero_batch() {
        let calc = Calculator::default();
        let broken = RecipeSpec::new(dec!(0.375), 0, 6);

        assert!(matches!(
            calc.convert(&broken, 10),
            Err(RailError::InvalidRecipe(_))
        ));
        // nothing to round when the raw amount is zero
        assert_eq!(calc.convert(&broken, 0).unwrap(), 0);
    }

    #[test]
    fn placements_round_up() {
        let calc = Calculator::default();
        assert_eq!(calc.placements(0), 0);
        assert_eq!(calc.placements(1), 1);
        assert_eq!(calc.placements(32), 1);
        assert_eq!(calc.placements(33), 2);
        assert_eq!(calc.placements(320), 10);
    }

    #[test]
    fn powered_rail_redstone_follows_sticks() {
        let report = Calculator::default().powered_rail(320).unwrap();
        assert_eq!(report.rails, 10);
        assert_eq!(report.gold_ingots, 6);
        assert_eq!(report.sticks, 8);
        assert_eq!(report.redstone, report.sticks);
    }

    #[test]
    fn normal_rails_exclude_powered_placements() {
        let report = Calculator::default().compute_report(100).unwrap();
        assert_eq!(report.powered_rail.rails, 4);
        assert_eq!(report.normal_rail.rails, 96);
    }

    #[test]
    fn report_for_64_blocks() {
        let report = Calculator::default().compute_report(64).unwrap();

        assert_eq!(report.normal_rail.iron_ingots, 24);
        assert_eq!(report.normal_rail.sticks, 8);
        assert_eq!(report.powered_rail.rails, 2);
        assert_eq!(report.powered_rail.gold_ingots, 6);
        assert_eq!(report.redstone_torch.torches, 2);
        assert_eq!(
            report.totals,
            ResourceTotals {
                iron_ingots: 24,
                gold_ingots: 6,
                sticks: 8 + 8 + 2,
                redstone: 8 + 2,
            }
        );
    }

    #[test]
    fn route_sums_every_leg() {
        let calc = Calculator::default();
        let waypoints = [
            Coordinate::new(0, 0),
            Coordinate::new(100, 0),
            Coordinate::new(100, -50),
        ];

        let route = calc.compute_route(&waypoints).unwrap();
        assert_eq!(route.distance, 150);
        assert_eq!(route, calc.compute_report(150).unwrap());
    }

    #[test]
    fn route_with_a_single_waypoint_is_empty() {
        let route = Calculator::default()
            .compute_route(&[Coordinate::new(5, 5)])
            .unwrap();
        assert_eq!(route, Calculator::default().compute_report(0).unwrap());
    }

    #[test]
    fn custom_spacing_changes_placements() {
        let mut book = RecipeBook::default();
        book.powered_rail.spacing = 8;
        let calc = Calculator::new(book).unwrap();

        let report = calc.compute_report(64).unwrap();
        assert_eq!(report.powered_rail.rails, 8);
        assert_eq!(report.redstone_torch.sticks, 8);
        assert_eq!(report.normal_rail.rails, 56);
    }

    #[test]
    fn calculator_rejects_invalid_book() {
        let mut book = RecipeBook::default();
        book.normal_rail.iron_ingot.batch = 0;
        assert!(Calculator::new(book).is_err());
    }
}
