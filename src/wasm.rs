//! WebAssembly bindings for OAdvisor.
//!
//! Every binding takes a JSON string and returns a JSON string envelope of
//! the form `{ "success": bool, "error": string | null, "result": ... }`.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::data::Catalog;
use crate::display::format_duration;
use crate::error::{AdvisorError, Result};
use crate::models::{
    AccountSnapshot, EnergyMatrix, ItemId, OptimizerConfig, PlanetContext, PointsReport, QueueEntry,
    ResourceVector,
};
use crate::optimizer;
use crate::points::account_points;
use crate::production::{account_production, planet_production, PerformanceMode};
use crate::trade::to_mse;

/// JavaScript-friendly response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsResponse<T> {
    pub success: bool,
    pub error: Option<String>,
    pub result: Option<T>,
}

impl<T: Serialize> JsResponse<T> {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn warn_console(message: &str) {
    tracing::warn!(%message, "Request failed");
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
}

fn respond<T: Serialize>(result: Result<T>) -> String {
    match result {
        Ok(value) => JsResponse {
            success: true,
            error: None,
            result: Some(value),
        }
        .to_json(),
        Err(e) => {
            let message = e.to_string();
            warn_console(&message);
            JsResponse::<T> {
                success: false,
                error: Some(message),
                result: None,
            }
            .to_json()
        }
    }
}

fn parse<'a, T: Deserialize<'a>>(input_json: &'a str) -> Result<T> {
    Ok(serde_json::from_str(input_json)?)
}

/// JavaScript-friendly input for queue and overview queries.
#[derive(Debug, Clone, Deserialize)]
pub struct JsAccountInput {
    pub account: AccountSnapshot,
    #[serde(default)]
    pub config: OptimizerConfig,
}

/// JavaScript-friendly input for a single-planet queue.
#[derive(Debug, Clone, Deserialize)]
pub struct JsPlanetInput {
    pub account: AccountSnapshot,
    pub planet: String,
    #[serde(default)]
    pub config: OptimizerConfig,
}

/// JavaScript-friendly queue entry with a formatted build time.
#[derive(Debug, Clone, Serialize)]
pub struct JsQueueEntry {
    #[serde(flatten)]
    pub entry: QueueEntry,
    pub build_time_formatted: String,
}

impl From<QueueEntry> for JsQueueEntry {
    fn from(entry: QueueEntry) -> Self {
        JsQueueEntry {
            build_time_formatted: format_duration(entry.build_time),
            entry,
        }
    }
}

fn js_queue(queue: Vec<QueueEntry>) -> Vec<JsQueueEntry> {
    queue.into_iter().map(JsQueueEntry::from).collect()
}

/// Ranks the next mine upgrades of one planet.
///
/// Input: `{ "account": {...}, "planet": "Homeworld", "config": {...} }`.
/// An unknown planet name is reported as an error.
#[wasm_bindgen]
pub fn optimize_planet(input_json: &str) -> String {
    respond(run_optimize_planet(input_json))
}

fn run_optimize_planet(input_json: &str) -> Result<Vec<JsQueueEntry>> {
    let input: JsPlanetInput = parse(input_json)?;
    let catalog = Catalog::embedded()?;

    let planet = input
        .account
        .planets
        .iter()
        .find(|p| p.name == input.planet)
        .ok_or_else(|| AdvisorError::UnknownPlanet(input.planet.clone()))?;
    let ctx = PlanetContext::resolve(planet, &input.account)?;
    let mut queue = optimizer::planet_queue(&catalog, &ctx, &input.config)?;
    queue.truncate(input.config.planet_queue_limit);
    Ok(js_queue(queue))
}

/// Ranks upgrades across every planet of an account, plasma included.
#[wasm_bindgen]
pub fn optimize_account(input_json: &str) -> String {
    respond(run_optimize_account(input_json))
}

fn run_optimize_account(input_json: &str) -> Result<Vec<JsQueueEntry>> {
    let input: JsAccountInput = parse(input_json)?;
    let catalog = Catalog::embedded()?;
    Ok(js_queue(optimizer::account_queue(&catalog, &input.account, &input.config)?))
}

/// Production of one planet in the overview.
#[derive(Debug, Clone, Serialize)]
pub struct JsPlanetProduction {
    pub name: String,
    pub actual: ResourceVector,
    pub theoretical: ResourceVector,
}

/// Everything the account overview page shows.
#[derive(Debug, Clone, Serialize)]
pub struct JsOverview {
    pub production: ResourceVector,
    pub daily_production: ResourceVector,
    pub production_mse: i64,
    pub planets: Vec<JsPlanetProduction>,
    pub queue: Vec<JsQueueEntry>,
    pub points: PointsReport,
}

/// Production, build queue and points of an account in one call.
#[wasm_bindgen]
pub fn account_overview(input_json: &str) -> String {
    respond(run_account_overview(input_json))
}

fn run_account_overview(input_json: &str) -> Result<JsOverview> {
    let input: JsAccountInput = parse(input_json)?;
    let catalog = Catalog::embedded()?;
    let account = &input.account;

    let planets = account
        .planets
        .iter()
        .map(|planet| {
            let ctx = PlanetContext::resolve(planet, account)?;
            Ok(JsPlanetProduction {
                name: planet.name.clone(),
                actual: planet_production(&ctx, PerformanceMode::Actual),
                theoretical: planet_production(&ctx, PerformanceMode::Theoretical),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let production = account_production(account)?;
    Ok(JsOverview {
        production,
        daily_production: production.daily(),
        production_mse: to_mse(production, &account.trade)?,
        planets,
        queue: js_queue(optimizer::account_queue(&catalog, account, &input.config)?),
        points: account_points(&catalog, account)?,
    })
}

/// Input for an item cost lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct JsCostInput {
    pub item: ItemId,
    pub level: u32,
}

/// Cost of one level and the total invested up to it.
#[derive(Debug, Clone, Serialize)]
pub struct JsCost {
    pub name: String,
    pub level: u32,
    pub cost: ResourceVector,
    pub cumulative: ResourceVector,
}

/// Looks up the cost of an item at a level.
///
/// Input: `{ "item": "metal_mine", "level": 12 }`.
#[wasm_bindgen]
pub fn item_cost(input_json: &str) -> String {
    respond(run_item_cost(input_json))
}

fn run_item_cost(input_json: &str) -> Result<JsCost> {
    let input: JsCostInput = parse(input_json)?;
    let catalog = Catalog::embedded()?;
    let def = catalog.get(input.item)?;
    Ok(JsCost {
        name: def.name.clone(),
        level: input.level,
        cost: def.cost_at_level(input.level),
        cumulative: def.cumulative_cost(input.level),
    })
}

/// Input for the energy matrix tool.
#[derive(Debug, Clone, Deserialize)]
pub struct JsEnergyMatrixInput {
    pub account: AccountSnapshot,
    #[serde(default)]
    pub fusion_level: Option<u32>,
    #[serde(default)]
    pub energy_level: Option<u32>,
    #[serde(default)]
    pub config: OptimizerConfig,
}

/// Compares fusion reactor and energy technology investments.
#[wasm_bindgen]
pub fn energy_matrix(input_json: &str) -> String {
    respond(run_energy_matrix(input_json))
}

fn run_energy_matrix(input_json: &str) -> Result<EnergyMatrix> {
    let input: JsEnergyMatrixInput = parse(input_json)?;
    let catalog = Catalog::embedded()?;
    optimizer::energy_matrix(
        &catalog,
        &input.account,
        input.fusion_level,
        input.energy_level,
        &input.config,
    )
}

/// Get the version of the advisor.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the display names of every catalog item, in catalog order.
#[wasm_bindgen]
pub fn item_names() -> js_sys::Array {
    let names = js_sys::Array::new();
    match Catalog::embedded() {
        Ok(catalog) => {
            for item in catalog.items() {
                names.push(&JsValue::from_str(&item.name));
            }
        }
        Err(e) => warn_console(&e.to_string()),
    }
    names
}
