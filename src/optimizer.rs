//! Build-queue optimization for the advisor.
//!
//! This module ranks "what to build next". For every mine it evaluates the
//! next few levels, values cost and production gain in metal-standard
//! equivalents, and attaches the side-constraints an upgrade drags along:
//! the energy deficit it opens (as a satellite count), its build time, and
//! whether a robotics/nanite investment would pay for itself first.
//!
//! Entries are never persisted. Every query recomputes them from the current
//! snapshot.

use std::cmp::Ordering;

use tracing::{debug, trace, warn};

use crate::costs;
use crate::data::Catalog;
use crate::error::Result;
use crate::models::{
    AccountSnapshot, EnergyMatrix, EnergyMatrixCell, EnergyMatrixRow, GrowthFactor, ItemDef, ItemId,
    OptimizerConfig, PlanetContext, QueueEntry, ResourceVector, TradeRatio,
};
use crate::production::{
    build_time_hours, capacity, crystal_production, deuterium_production, energy_balance,
    fusion_production, metal_production, plasma_base_production, plasma_bonus, satellite_yield,
};
use crate::trade::mse_unchecked;

/// Score assigned to upgrades that gain nothing, so they sort last.
pub const INFINITE_SCORE: f64 = 1e12;

/// Robotics factory level after which nanite factories become the capacity
/// investment.
pub const ROBOTICS_THRESHOLD: u32 = 10;

/// The single next robotics or nanite step of a planet, precomputed once per
/// query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityStep {
    /// Which factory gets the next level
    pub item: ItemId,
    /// Level the factory would reach
    pub level: u32,
    /// Capacity before the step
    pub current: i64,
    /// Capacity after the step
    pub next: i64,
    /// Cost of the step
    pub cost: ResourceVector,
    /// Cost of the step in MSE
    pub cost_mse: i64,
    /// Hours to build the step at the current capacity
    pub build_time: f64,
}

/// Finds the next capacity investment: robotics until level 10, then nanite.
///
/// # Errors
///
/// Fails if the catalog lacks the factory definitions.
pub fn capacity_step(catalog: &Catalog, ctx: &PlanetContext) -> Result<CapacityStep> {
    let robotics = ctx.robotics_factory;
    let nanite = ctx.nanite_factory;
    let current = capacity(robotics, nanite, ctx.speed);

    let (item, level, next) = if robotics < ROBOTICS_THRESHOLD {
        (ItemId::RoboticsFactory, robotics + 1, capacity(robotics + 1, nanite, ctx.speed))
    } else {
        (ItemId::NaniteFactory, nanite + 1, capacity(robotics, nanite + 1, ctx.speed))
    };
    let cost = catalog.get(item)?.cost_at_level(level);

    Ok(CapacityStep {
        item,
        level,
        current,
        next,
        cost,
        cost_mse: mse_unchecked(cost, &ctx.trade),
        build_time: build_time_hours(cost, current),
    })
}

/// Orders queue entries by `(score, required_satellites, build_time,
/// capacity_upgrade)`, all ascending.
pub fn compare_entries(a: &QueueEntry, b: &QueueEntry) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.required_satellites.cmp(&b.required_satellites))
        .then_with(|| a.build_time.total_cmp(&b.build_time))
        .then_with(|| a.capacity_upgrade.cmp(&b.capacity_upgrade))
}

/// Sorts entries in place by [`compare_entries`].
pub fn sort_queue(queue: &mut [QueueEntry]) {
    queue.sort_by(compare_entries);
}

fn score(cost_mse: i64, gain: i64, item: ItemId, level: u32) -> f64 {
    if gain > 0 {
        cost_mse as f64 / gain as f64
    } else {
        warn!(%item, level, gain, "Upgrade gains nothing, using sentinel score");
        INFINITE_SCORE
    }
}

/// Output of a mine at full performance.
fn mine_output(item: ItemId, level: u32, ctx: &PlanetContext) -> ResourceVector {
    match item {
        ItemId::MetalMine => metal_production(level, 1.0, ctx.speed),
        ItemId::CrystalMine => crystal_production(level, 1.0, ctx.speed),
        _ => deuterium_production(level, ctx.temperature, 1.0, ctx.speed),
    }
}

/// Cost of a lookahead level, optionally under a different growth factor than
/// the catalog's.
fn lookahead_cost(def: &ItemDef, growth: Option<GrowthFactor>, level: u32) -> ResourceVector {
    match growth {
        Some(growth) => costs::cost_at_level(def.base_cost, growth, level),
        None => def.cost_at_level(level),
    }
}

struct EnergyState {
    balance: i64,
    satellite_yield: i64,
}

impl EnergyState {
    fn required_satellites(&self, change: i64) -> u64 {
        let balance = self.balance + change;
        if balance >= 0 {
            return 0;
        }
        // A planet too cold for satellites to yield anything still needs a
        // finite answer.
        let per_satellite = self.satellite_yield.max(1);
        ((-balance) as f64 / per_satellite as f64).ceil() as u64
    }
}

fn mine_entries(
    def: &ItemDef,
    current_level: u32,
    growth: Option<GrowthFactor>,
    ctx: &PlanetContext,
    step: &CapacityStep,
    energy: &EnergyState,
    lookahead: u32,
) -> Vec<QueueEntry> {
    let baseline = mine_output(def.id, current_level, ctx);
    let mut previous_mse = mse_unchecked(baseline, &ctx.trade);
    let mut entries = Vec::with_capacity(lookahead as usize);

    for offset in 1..=lookahead {
        let level = current_level + offset;
        let cost = lookahead_cost(def, growth, level);
        let cost_mse = mse_unchecked(cost, &ctx.trade);

        let output = mine_output(def.id, level, ctx);
        let output_mse = mse_unchecked(output, &ctx.trade);
        let gain = output_mse - previous_mse;
        previous_mse = output_mse;

        let ress = cost.resources() as f64;
        let build_time = ress / step.current as f64;
        let build_time_after_upgrade = ress / step.next as f64;
        let capacity_bonus = (build_time - (step.build_time + build_time_after_upgrade)) * gain as f64;

        let required_energy = output.energy - baseline.energy;

        let entry = QueueEntry {
            score: score(cost_mse, gain, def.id, level),
            required_satellites: energy.required_satellites(required_energy),
            build_time,
            capacity_upgrade: capacity_bonus >= step.cost_mse as f64,
            item: def.id,
            name: def.name.clone(),
            planet: Some(ctx.name.clone()),
            level,
            gain,
            required_energy,
            cost,
            cost_mse,
        };
        trace!(item = %entry.item, level, score = entry.score, "Queue entry");
        entries.push(entry);
    }
    entries
}

/// Ranks the next upgrades of a planet's three mines.
///
/// Produces `config.lookahead` entries per mine, sorted by
/// [`compare_entries`]. Callers truncate to the top-N they want.
///
/// # Errors
///
/// [`crate::error::AdvisorError::DegenerateRatio`] if the trade ratio has a
/// zero rate; catalog lookups fail if a mine or factory is not defined.
pub fn planet_queue(catalog: &Catalog, ctx: &PlanetContext, config: &OptimizerConfig) -> Result<Vec<QueueEntry>> {
    ctx.trade.validate()?;

    let step = capacity_step(catalog, ctx)?;
    let energy = EnergyState {
        balance: energy_balance(ctx),
        satellite_yield: satellite_yield(ctx.temperature),
    };

    let mines = [
        (ItemId::MetalMine, ctx.metal_mine.level, None),
        (ItemId::CrystalMine, ctx.crystal_mine.level, None),
        (
            ItemId::DeuteriumSynthesizer,
            ctx.deuterium_synthesizer.level,
            Some(config.deuterium_growth),
        ),
    ];

    let mut queue = Vec::new();
    for (item, level, growth) in mines {
        let def = catalog.get(item)?;
        queue.extend(mine_entries(def, level, growth, ctx, &step, &energy, config.lookahead));
    }
    sort_queue(&mut queue);

    debug!(
        planet = %ctx.name,
        entries = queue.len(),
        energy_balance = energy.balance,
        capacity = step.current,
        "Computed planet queue"
    );
    Ok(queue)
}

/// Ranks the next plasma technology levels by cost per bonus gained.
///
/// Plasma technology has no build-time or energy dimension, so only the score
/// matters.
///
/// # Errors
///
/// Fails on a degenerate trade ratio, a missing plasma technology record, or
/// any planet missing a production record.
pub fn plasma_queue(catalog: &Catalog, account: &AccountSnapshot, config: &OptimizerConfig) -> Result<Vec<QueueEntry>> {
    account.trade.validate()?;

    let current_level = account.require_research(ItemId::PlasmaTechnology)?.level;
    let production = plasma_base_production(account, config.plasma_base)?;
    let def = catalog.get(ItemId::PlasmaTechnology)?;
    let trade = &account.trade;

    let bonus_mse = |level: u32| {
        mse_unchecked(plasma_bonus(level, production.metal, production.crystal), trade)
    };

    let mut previous_mse = bonus_mse(current_level);
    let mut queue = Vec::with_capacity(config.lookahead as usize);
    for offset in 1..=config.lookahead {
        let level = current_level + offset;
        let cost = def.cost_at_level(level);
        let cost_mse = mse_unchecked(cost, trade);
        let next_mse = bonus_mse(level);
        let gain = next_mse - previous_mse;
        previous_mse = next_mse;

        queue.push(QueueEntry {
            score: score(cost_mse, gain, def.id, level),
            required_satellites: 0,
            build_time: 0.0,
            capacity_upgrade: false,
            item: def.id,
            name: def.name.clone(),
            planet: None,
            level,
            gain,
            required_energy: 0,
            cost,
            cost_mse,
        });
    }
    sort_queue(&mut queue);

    debug!(level = current_level, entries = queue.len(), "Computed plasma queue");
    Ok(queue)
}

/// Merges the top entries of every planet with the plasma queue.
///
/// Keeps `config.planet_queue_limit` entries per planet and
/// `config.account_queue_limit` overall.
///
/// # Errors
///
/// Fails if any planet or the account is missing a required record.
pub fn account_queue(catalog: &Catalog, account: &AccountSnapshot, config: &OptimizerConfig) -> Result<Vec<QueueEntry>> {
    let mut queue = Vec::new();
    for planet in &account.planets {
        let ctx = PlanetContext::resolve(planet, account)?;
        let mut entries = planet_queue(catalog, &ctx, config)?;
        entries.truncate(config.planet_queue_limit);
        queue.extend(entries);
    }
    queue.extend(plasma_queue(catalog, account, config)?);

    sort_queue(&mut queue);
    queue.truncate(config.account_queue_limit);
    Ok(queue)
}

fn average_fusion_level(account: &AccountSnapshot) -> Result<u32> {
    if account.planets.is_empty() {
        return Ok(0);
    }
    let mut total = 0u64;
    for planet in &account.planets {
        let ctx = PlanetContext::resolve(planet, account)?;
        total += u64::from(ctx.fusion_reactor.level);
    }
    let planets = account.planets.len() as u64;
    Ok(total.div_ceil(planets) as u32)
}

fn cumulative_mse(def: &ItemDef, level: u32, trade: &TradeRatio) -> i64 {
    mse_unchecked(def.cumulative_cost(level), trade)
}

/// Compares fusion reactor and energy technology investments.
///
/// Each cell holds the energy output of one fusion/energy-technology
/// combination and the MSE spent to reach it from the current levels.
/// Research is shared by all planets, so its cost is split across them. When
/// `fusion_level` is `None` the ceiling of the average fusion level is used;
/// when `energy_level` is `None` the account's energy technology is used.
///
/// # Errors
///
/// Fails on a degenerate trade ratio or missing records.
pub fn energy_matrix(
    catalog: &Catalog,
    account: &AccountSnapshot,
    fusion_level: Option<u32>,
    energy_level: Option<u32>,
    config: &OptimizerConfig,
) -> Result<EnergyMatrix> {
    account.trade.validate()?;
    let trade = &account.trade;

    let fusion_level = match fusion_level {
        Some(level) => level,
        None => average_fusion_level(account)?,
    };
    let energy_level = match energy_level {
        Some(level) => level,
        None => account.require_research(ItemId::EnergyTechnology)?.level,
    };
    let planets = account.planets.len().max(1) as f64;

    let fusion = catalog.get(ItemId::FusionReactor)?;
    let energy = catalog.get(ItemId::EnergyTechnology)?;
    let fusion_invested = cumulative_mse(fusion, fusion_level, trade);
    let energy_invested = cumulative_mse(energy, energy_level, trade);
    let current = fusion_production(fusion_level, 1.0, 1, energy_level).energy;

    let rows = (0..config.lookahead)
        .map(|i| {
            let f = fusion_level + i;
            let fusion_cost = (cumulative_mse(fusion, f, trade) - fusion_invested) as f64;
            let cells = (0..config.lookahead)
                .map(|j| {
                    let e = energy_level + j;
                    let energy_cost = (cumulative_mse(energy, e, trade) - energy_invested) as f64 / planets;
                    let cost = fusion_cost + energy_cost;
                    let production = fusion_production(f, 1.0, 1, e).energy;
                    let gain = production - current;
                    let ratio = if gain != 0 { cost / gain as f64 } else { 0.0 };
                    EnergyMatrixCell {
                        energy_level: e,
                        production,
                        gain,
                        cost,
                        ratio,
                    }
                })
                .collect();
            EnergyMatrixRow { fusion_level: f, cells }
        })
        .collect();

    Ok(EnergyMatrix {
        fusion_level,
        energy_level,
        rows,
    })
}
