use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    domain::stack,
    entities::{Distance, Material, Quantity, RecipeKind},
    error::{RailError, RailResult},
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalRailResources {
    /// Normal rails actually laid, i.e. the track length minus the powered rails.
    pub rails: Quantity,
    pub iron_ingots: Quantity,
    pub sticks: Quantity,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoweredRailResources {
    pub rails: Quantity,
    pub gold_ingots: Quantity,
    pub sticks: Quantity,
    pub redstone: Quantity,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RedstoneTorchResources {
    pub torches: Quantity,
    pub sticks: Quantity,
    pub redstone: Quantity,
}

/// Materials summed over every recipe.
///
/// Reports never share totals with each other; to add up several calculations, merge their
/// totals explicitly.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceTotals {
    pub iron_ingots: Quantity,
    pub gold_ingots: Quantity,
    pub sticks: Quantity,
    pub redstone: Quantity,
}

impl ResourceTotals {
    pub fn merge(self, other: Self) -> RailResult<Self> {
        let add = |a: Quantity, b: Quantity| a.checked_add(b).ok_or(RailError::QuantityOverflow);

        Ok(Self {
            iron_ingots: add(self.iron_ingots, other.iron_ingots)?,
            gold_ingots: add(self.gold_ingots, other.gold_ingots)?,
            sticks: add(self.sticks, other.sticks)?,
            redstone: add(self.redstone, other.redstone)?,
        })
    }

    pub fn get(&self, material: Material) -> Quantity {
        match material {
            Material::IronIngot => self.iron_ingots,
            Material::GoldIngot => self.gold_ingots,
            Material::Stick => self.sticks,
            Material::Redstone => self.redstone,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Material, Quantity)> + '_ {
        Material::ALL
            .into_iter()
            .map(|material| (material, self.get(material)))
    }
}

/// Everything needed to build one stretch of track.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourceReport {
    pub distance: Distance,
    pub normal_rail: NormalRailResources,
    pub powered_rail: PoweredRailResources,
    pub redstone_torch: RedstoneTorchResources,
    pub totals: ResourceTotals,
}

impl ResourceReport {
    /// Per recipe material usage, in the order the console report lists them.
    pub fn breakdown(&self) -> [(RecipeKind, Vec<(Material, Quantity)>); 3] {
        [
            (
                RecipeKind::NormalRail,
                vec![
                    (Material::IronIngot, self.normal_rail.iron_ingots),
                    (Material::Stick, self.normal_rail.sticks),
                ],
            ),
            (
                RecipeKind::PoweredRail,
                vec![
                    (Material::GoldIngot, self.powered_rail.gold_ingots),
                    (Material::Stick, self.powered_rail.sticks),
                    (Material::Redstone, self.powered_rail.redstone),
                ],
            ),
            (
                RecipeKind::RedstoneTorch,
                vec![
                    (Material::Stick, self.redstone_torch.sticks),
                    (Material::Redstone, self.redstone_torch.redstone),
                ],
            ),
        ]
    }

    fn crafted_units(&self, kind: RecipeKind) -> (&'static str, Quantity) {
        match kind {
            RecipeKind::NormalRail => ("Rails", self.normal_rail.rails),
            RecipeKind::PoweredRail => ("Powered Rails", self.powered_rail.rails),
            RecipeKind::RedstoneTorch => ("Torches", self.redstone_torch.torches),
        }
    }
}

fn write_material(f: &mut fmt::Formatter<'_>, material: Material, amount: Quantity) -> fmt::Result {
    writeln!(f, "{material}: {}. ({amount} total)", stack(amount))
}

impl fmt::Display for ResourceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Track length: {} blocks", self.distance)?;

        for (kind, materials) in self.breakdown() {
            let (unit_name, units) = self.crafted_units(kind);
            writeln!(f, "{kind} resources required:")?;
            writeln!(f, "{unit_name}: {units}")?;
            for (material, amount) in materials {
                write_material(f, material, amount)?;
            }
        }

        writeln!(f, "------------")?;
        writeln!(f, "Total resources required:")?;
        for (material, amount) in self.totals.iter() {
            write_material(f, material, amount)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(
        iron: Quantity,
        gold: Quantity,
        sticks: Quantity,
        redstone: Quantity,
    ) -> ResourceTotals {
        ResourceTotals {
            iron_ingots: iron,
            gold_ingots: gold,
            sticks,
            redstone,
        }
    }

    #[test]
    fn merge_adds_every_material() {
        let merged = totals(6, 0, 8, 1).merge(totals(24, 6, 16, 10)).unwrap();
        assert_eq!(merged, totals(30, 6, 24, 11));
    }

    #[test]
    fn merge_accumulates_across_calls() {
        let running = ResourceTotals::default()
            .merge(totals(1, 2, 3, 4))
            .and_then(|running| running.merge(totals(1, 2, 3, 4)))
            .unwrap();
        assert_eq!(running, totals(2, 4, 6, 8));
    }

    #[test]
    fn merge_reports_overflow() {
        let huge = totals(u64::MAX, 0, 0, 0);
        assert!(matches!(huge.merge(huge), Err(RailError::QuantityOverflow)));
        assert_eq!(huge.merge(ResourceTotals::default()).unwrap(), huge);
    }

    #[test]
    fn iter_lists_materials_in_report_order() {
        let listed: Vec<_> = totals(1, 2, 3, 4).iter().collect();
        assert_eq!(
            listed,
            vec![
                (Material::IronIngot, 1),
                (Material::GoldIngot, 2),
                (Material::Stick, 3),
                (Material::Redstone, 4),
            ]
        );
    }

    #[test]
    fn display_contains_every_section() {
        let report = ResourceReport {
            distance: 100,
            normal_rail: NormalRailResources {
                rails: 96,
                iron_ingots: 72,
                sticks: 8,
            },
            totals: totals(72, 0, 8, 0),
            ..Default::default()
        };
        let text = report.to_string();

        assert!(text.starts_with("Track length: 100 blocks\n"));
        assert!(text.contains("Regular rail resources required:\nRails: 96\n"));
        assert!(text.contains("Iron Ingots: 1 stacks and 8. (72 total)"));
        assert!(text.contains("Powered rail resources required:"));
        assert!(text.contains("Redstone torch resources required:"));
        assert!(text.contains("Total resources required:"));
    }
}
