//! Cost calculations for buildings, research, ships and defense.
//!
//! Costs grow exponentially with level. Each item family differs only in its
//! growth factor, except for three special rules (doubling with energy,
//! rounded to hundreds, energy-only) and plain per-unit costs.
//!
//! Throughout this module `level` is the level being purchased: the cost of
//! going from level `L` to `L + 1` is evaluated at `L + 1`. Level 0 is never
//! purchased and costs nothing under every rule.

use crate::models::{CostRule, GrowthFactor, ItemDef, ResourceVector};

fn component(base: i64, factor: f64, scale: f64) -> i64 {
    (base as f64 / factor * scale) as i64
}

/// Cost of a single level under geometric growth.
///
/// Computes `(base / g) * g^level` for each component, truncated toward zero.
///
/// # Example
///
/// ```
/// use oadvisor::costs::cost_at_level;
/// use oadvisor::models::{GrowthFactor, ResourceVector};
///
/// let base = ResourceVector::new(60, 15, 0);
///
/// assert_eq!(cost_at_level(base, GrowthFactor::ONE_POINT_FIVE, 1), ResourceVector::new(60, 15, 0));
/// assert_eq!(cost_at_level(base, GrowthFactor::ONE_POINT_FIVE, 2), ResourceVector::new(90, 22, 0));
/// ```
pub fn cost_at_level(base_cost: ResourceVector, growth: GrowthFactor, level: u32) -> ResourceVector {
    if level == 0 {
        return ResourceVector::ZERO;
    }
    let g = growth.value();
    let scale = g.powi(level as i32);
    ResourceVector::with_energy(
        component(base_cost.metal, g, scale),
        component(base_cost.crystal, g, scale),
        component(base_cost.deuterium, g, scale),
        component(base_cost.energy, g, scale),
    )
}

/// Cost of the level `current_level + offset`.
pub fn next_cost(
    base_cost: ResourceVector,
    growth: GrowthFactor,
    current_level: u32,
    offset: u32,
) -> ResourceVector {
    cost_at_level(base_cost, growth, current_level + offset)
}

/// Total cost of all levels up to and including `level`.
///
/// Uses the closed form of the geometric series, truncated per component.
///
/// # Example
///
/// ```
/// use oadvisor::costs::cumulative_cost;
/// use oadvisor::models::{GrowthFactor, ResourceVector};
///
/// let base = ResourceVector::new(400, 120, 200);
///
/// // 400 + 800 + 1600
/// assert_eq!(cumulative_cost(base, GrowthFactor::TWO, 3).metal, 2800);
/// ```
pub fn cumulative_cost(base_cost: ResourceVector, growth: GrowthFactor, level: u32) -> ResourceVector {
    let g = growth.value();
    // GrowthFactor guarantees g != 1.
    let geo = (1.0 - g.powi(level as i32 + 1)) / (1.0 - g);
    let total = |base: i64| {
        let first = base as f64 / g;
        (first * geo - first) as i64
    };
    ResourceVector::with_energy(
        total(base_cost.metal),
        total(base_cost.crystal),
        total(base_cost.deuterium),
        total(base_cost.energy),
    )
}

/// Cost of a level under the doubling rule: `base / 2 * 2^level`, energy
/// included.
pub fn doubling_cost(base_cost: ResourceVector, level: u32) -> ResourceVector {
    cost_at_level(base_cost, GrowthFactor::TWO, level)
}

/// Cost of a level rounded to the nearest hundred:
/// `floor(0.5 + (base / 100) * g^(level - 1)) * 100`.
pub fn rounded_cost(base_cost: ResourceVector, growth: GrowthFactor, level: u32) -> ResourceVector {
    if level == 0 {
        return ResourceVector::ZERO;
    }
    let scale = growth.value().powi(level as i32 - 1);
    let round = |base: i64| ((0.5 + base as f64 / 100.0 * scale).floor() * 100.0) as i64;
    ResourceVector::with_energy(
        round(base_cost.metal),
        round(base_cost.crystal),
        round(base_cost.deuterium),
        0,
    )
}

/// Energy needed for a level of an energy-only item: `100000 * 3^level`.
pub fn energy_only_cost(level: u32) -> ResourceVector {
    if level == 0 {
        return ResourceVector::ZERO;
    }
    ResourceVector::with_energy(0, 0, 0, 3i64.saturating_pow(level).saturating_mul(100_000))
}

fn energy_only_total(level: u32) -> ResourceVector {
    (1..=level).map(energy_only_cost).sum()
}

impl ItemDef {
    /// Cost of purchasing `level` of this item.
    ///
    /// For unit-priced items (ships, defense) this is the cost of `level`
    /// units.
    pub fn cost_at_level(&self, level: u32) -> ResourceVector {
        match self.rule {
            CostRule::Geometric(growth) => cost_at_level(self.base_cost, growth, level),
            CostRule::Doubling => doubling_cost(self.base_cost, level),
            CostRule::Rounded(growth) => rounded_cost(self.base_cost, growth, level),
            CostRule::EnergyOnly => energy_only_cost(level),
            CostRule::Unit => self.base_cost.scale(i64::from(level)),
        }
    }

    /// Cost of the level `current_level + offset`.
    pub fn next_cost(&self, current_level: u32, offset: u32) -> ResourceVector {
        self.cost_at_level(current_level + offset)
    }

    /// Total cost invested to reach `level`.
    pub fn cumulative_cost(&self, level: u32) -> ResourceVector {
        match self.rule {
            CostRule::Geometric(growth) | CostRule::Rounded(growth) => {
                cumulative_cost(self.base_cost, growth, level)
            }
            CostRule::Doubling => cumulative_cost(self.base_cost, GrowthFactor::TWO, level),
            CostRule::EnergyOnly => energy_only_total(level),
            CostRule::Unit => self.unit_value(u64::from(level)),
        }
    }

    /// Value of `count` units of a ship or defense device.
    pub fn unit_value(&self, count: u64) -> ResourceVector {
        self.base_cost.scale(count as i64)
    }
}
