//! Production calculations for mines, energy buildings and bonus technologies.
//!
//! Every function returns a [`ResourceVector`] of `(metal, crystal, deuterium,
//! energy)`. All four components are populated: a metal mine yields positive
//! metal and negative energy, with crystal and deuterium left at zero.

use crate::error::Result;
use crate::models::{AccountSnapshot, PlanetContext, PlasmaBase, ResourceVector};

/// Whether production is computed at the stored performance settings or at
/// 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerformanceMode {
    /// Use each building's stored performance
    #[default]
    Actual,
    /// Assume every building runs at 100%
    Theoretical,
}

impl PerformanceMode {
    fn apply(self, performance: f64) -> f64 {
        match self {
            Self::Actual => performance,
            Self::Theoretical => 1.0,
        }
    }
}

fn mine_curve(level: u32) -> f64 {
    level as f64 * 1.1f64.powi(level as i32)
}

/// Hourly output of a metal mine.
///
/// # Example
///
/// ```
/// use oadvisor::production::metal_production;
/// use oadvisor::models::ResourceVector;
///
/// assert_eq!(metal_production(10, 1.0, 1), ResourceVector::with_energy(778, 0, 0, -260));
/// ```
pub fn metal_production(level: u32, performance: f64, speed: u32) -> ResourceVector {
    let production = (30.0 * mine_curve(level) * performance * speed as f64).floor();
    let energy = (10.0 * mine_curve(level) * performance).ceil();
    ResourceVector::with_energy(production as i64, 0, 0, -(energy as i64))
}

/// Hourly output of a crystal mine.
pub fn crystal_production(level: u32, performance: f64, speed: u32) -> ResourceVector {
    let production = (20.0 * mine_curve(level) * performance * speed as f64).floor();
    let energy = (10.0 * mine_curve(level) * performance).ceil();
    ResourceVector::with_energy(0, production as i64, 0, -(energy as i64))
}

/// Hourly output of a deuterium synthesizer.
///
/// `temperature` is the planet's effective maximum temperature; colder
/// planets synthesize more.
pub fn deuterium_production(level: u32, temperature: i32, performance: f64, speed: u32) -> ResourceVector {
    let climate = 1.44 - 0.004 * temperature as f64;
    let production = (10.0 * mine_curve(level) * climate * performance * speed as f64).floor();
    let energy = (20.0 * mine_curve(level) * performance).ceil();
    ResourceVector::with_energy(0, 0, production as i64, -(energy as i64))
}

/// Energy output of a solar plant.
pub fn solar_production(level: u32, performance: f64) -> ResourceVector {
    let production = ((20.0 * mine_curve(level)).floor() * performance).round();
    ResourceVector::with_energy(0, 0, 0, production as i64)
}

/// Energy output of a fusion reactor, and the deuterium it burns.
pub fn fusion_production(level: u32, performance: f64, speed: u32, energy_technology: u32) -> ResourceVector {
    let efficiency = 1.05 + energy_technology as f64 * 0.01;
    let production = ((30.0 * level as f64 * efficiency.powi(level as i32)).floor() * performance).round();
    let consumption = (10.0 * mine_curve(level) * performance).ceil() * speed as f64;
    ResourceVector::with_energy(0, 0, -(consumption as i64), production as i64)
}

/// Energy yield of a single solar satellite at `temperature`.
pub fn satellite_yield(temperature: i32) -> i64 {
    ((temperature as f64 + 140.0) / 6.0).floor() as i64
}

/// Energy output of `count` solar satellites.
pub fn satellite_production(count: u64, temperature: i32) -> ResourceVector {
    ResourceVector::with_energy(0, 0, 0, satellite_yield(temperature) * count as i64)
}

/// The three energy sources of a planet, kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergySources {
    /// Solar plant
    pub solar: ResourceVector,
    /// Fusion reactor
    pub fusion: ResourceVector,
    /// Solar satellites
    pub satellites: ResourceVector,
}

impl EnergySources {
    /// Sum of all three sources.
    pub fn total(&self) -> ResourceVector {
        self.solar + self.fusion + self.satellites
    }
}

/// Energy production of a planet's solar plant, fusion reactor and
/// satellites.
pub fn energy_production(ctx: &PlanetContext, mode: PerformanceMode) -> EnergySources {
    EnergySources {
        solar: solar_production(ctx.solar_plant.level, mode.apply(ctx.solar_plant.performance)),
        fusion: fusion_production(
            ctx.fusion_reactor.level,
            mode.apply(ctx.fusion_reactor.performance),
            ctx.speed,
            ctx.energy_technology,
        ),
        satellites: satellite_production(ctx.solar_satellites, ctx.temperature),
    }
}

/// Bonus production granted by plasma technology.
///
/// `metal` and `crystal` are the mines' production without base income.
pub fn plasma_bonus(plasma_level: u32, metal: i64, crystal: i64) -> ResourceVector {
    let metal_bonus = (metal as f64 * 0.01 * plasma_level as f64).floor();
    let crystal_bonus = (crystal as f64 * 0.0066 * plasma_level as f64).floor();
    ResourceVector::new(metal_bonus as i64, crystal_bonus as i64, 0)
}

/// Fixed hourly income every planet receives.
pub fn base_income(speed: u32) -> ResourceVector {
    ResourceVector::new(30 * i64::from(speed), 15 * i64::from(speed), 0)
}

/// Output of the three mines of a planet.
pub fn mine_production(ctx: &PlanetContext, mode: PerformanceMode) -> ResourceVector {
    metal_production(ctx.metal_mine.level, mode.apply(ctx.metal_mine.performance), ctx.speed)
        + crystal_production(ctx.crystal_mine.level, mode.apply(ctx.crystal_mine.performance), ctx.speed)
        + deuterium_production(
            ctx.deuterium_synthesizer.level,
            ctx.temperature,
            mode.apply(ctx.deuterium_synthesizer.performance),
            ctx.speed,
        )
}

/// Total hourly production of a planet.
///
/// Sums the mines, the energy buildings, the plasma bonus (from mine output
/// only) and the base income. The energy component is the planet's signed
/// energy balance.
pub fn planet_production(ctx: &PlanetContext, mode: PerformanceMode) -> ResourceVector {
    let mines = mine_production(ctx, mode);
    let bonus = plasma_bonus(ctx.plasma_technology, mines.metal, mines.crystal);
    mines + energy_production(ctx, mode).total() + bonus + base_income(ctx.speed)
}

/// Signed energy balance of a planet assuming full performance everywhere.
pub fn energy_balance(ctx: &PlanetContext) -> i64 {
    let mines = mine_production(ctx, PerformanceMode::Theoretical);
    mines.energy + energy_production(ctx, PerformanceMode::Theoretical).total().energy
}

/// Total production of every planet of an account at actual performance.
///
/// # Errors
///
/// Fails if any planet lacks a record needed for its production.
pub fn account_production(account: &AccountSnapshot) -> Result<ResourceVector> {
    account
        .planets
        .iter()
        .map(|planet| {
            let ctx = PlanetContext::resolve(planet, account)?;
            Ok(planet_production(&ctx, PerformanceMode::Actual))
        })
        .sum()
}

/// Metal and crystal the plasma bonus applies to, per the chosen base.
///
/// # Errors
///
/// Fails if any planet lacks a record needed for its production.
pub fn plasma_base_production(account: &AccountSnapshot, base: PlasmaBase) -> Result<ResourceVector> {
    match base {
        PlasmaBase::TotalOutput => account_production(account),
        PlasmaBase::MineOutput => account
            .planets
            .iter()
            .map(|planet| {
                let ctx = PlanetContext::resolve(planet, account)?;
                Ok(mine_production(&ctx, PerformanceMode::Actual))
            })
            .sum(),
    }
}

/// Resources per hour a planet can put into construction.
///
/// # Example
///
/// ```
/// use oadvisor::production::capacity;
///
/// assert_eq!(capacity(5, 0, 1), 15000);
/// ```
pub fn capacity(robotics: u32, nanite: u32, speed: u32) -> i64 {
    2500 * i64::from(speed) * (1 + i64::from(robotics)) * 2i64.pow(nanite)
}

/// Hours needed to build something costing `cost` at `capacity`.
pub fn build_time_hours(cost: ResourceVector, capacity: i64) -> f64 {
    if capacity <= 0 {
        return f64::INFINITY;
    }
    cost.resources() as f64 / capacity as f64
}
