//! Data models and structures for the advisor.
//!
//! This module contains the value types shared by every calculation: resource
//! vectors, trade ratios, item definitions, the account/planet snapshots handed
//! in by the web layer, and the records the optimizer and points aggregator
//! hand back.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

// ============================================================================
// Resources
// ============================================================================

/// Amounts of metal, crystal and deuterium, plus an energy component.
///
/// All components are signed: production tuples carry consumption as negative
/// values (a mine's energy draw, a fusion reactor's deuterium burn), and a
/// negative energy total is a valid deficit.
///
/// # Example
///
/// ```
/// use oadvisor::models::ResourceVector;
///
/// let a = ResourceVector::new(60, 15, 0);
/// let b = ResourceVector::with_energy(0, 0, 0, -10);
/// let sum = a + b;
///
/// assert_eq!(sum, ResourceVector::with_energy(60, 15, 0, -10));
/// assert_eq!(sum.resources(), 75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceVector {
    /// Metal amount
    pub metal: i64,
    /// Crystal amount
    pub crystal: i64,
    /// Deuterium amount
    pub deuterium: i64,
    /// Energy amount (negative for consumption or deficit)
    #[serde(default)]
    pub energy: i64,
}

impl ResourceVector {
    /// The all-zero vector.
    pub const ZERO: Self = Self::with_energy(0, 0, 0, 0);

    /// Creates a vector with no energy component.
    pub const fn new(metal: i64, crystal: i64, deuterium: i64) -> Self {
        Self::with_energy(metal, crystal, deuterium, 0)
    }

    /// Creates a vector with all four components.
    pub const fn with_energy(metal: i64, crystal: i64, deuterium: i64, energy: i64) -> Self {
        Self {
            metal,
            crystal,
            deuterium,
            energy,
        }
    }

    /// Sum of metal, crystal and deuterium. Energy is not a resource.
    pub fn resources(&self) -> i64 {
        self.metal + self.crystal + self.deuterium
    }

    /// Multiplies every component by `count`.
    pub fn scale(&self, count: i64) -> Self {
        Self::with_energy(
            self.metal * count,
            self.crystal * count,
            self.deuterium * count,
            self.energy * count,
        )
    }

    /// Returns the same vector multiplied to a 24 hour period.
    pub fn daily(&self) -> Self {
        self.scale(24)
    }
}

impl Add for ResourceVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::with_energy(
            self.metal + rhs.metal,
            self.crystal + rhs.crystal,
            self.deuterium + rhs.deuterium,
            self.energy + rhs.energy,
        )
    }
}

impl AddAssign for ResourceVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ResourceVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::with_energy(
            self.metal - rhs.metal,
            self.crystal - rhs.crystal,
            self.deuterium - rhs.deuterium,
            self.energy - rhs.energy,
        )
    }
}

impl Sum for ResourceVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Exchange rates between metal, crystal and deuterium.
///
/// Only the ratios matter. The default is the common 3:2:1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeRatio {
    /// Metal rate
    pub metal: f64,
    /// Crystal rate
    pub crystal: f64,
    /// Deuterium rate
    pub deuterium: f64,
}

impl TradeRatio {
    /// Creates a validated trade ratio.
    ///
    /// # Errors
    ///
    /// [`AdvisorError::DegenerateRatio`] if any component is not a positive
    /// finite number.
    pub fn new(metal: f64, crystal: f64, deuterium: f64) -> Result<Self> {
        let ratio = Self {
            metal,
            crystal,
            deuterium,
        };
        ratio.validate()?;
        Ok(ratio)
    }

    /// Checks that every rate is positive.
    ///
    /// Deserialized ratios bypass [`TradeRatio::new`], so consumers call this
    /// before dividing by a rate.
    pub fn validate(&self) -> Result<()> {
        let components = [
            ("metal", self.metal),
            ("crystal", self.crystal),
            ("deuterium", self.deuterium),
        ];
        for (resource, rate) in components {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(AdvisorError::DegenerateRatio { resource });
            }
        }
        Ok(())
    }
}

impl Default for TradeRatio {
    fn default() -> Self {
        Self {
            metal: 3.0,
            crystal: 2.0,
            deuterium: 1.0,
        }
    }
}

// ============================================================================
// Item definitions
// ============================================================================

/// A per-level cost multiplier.
///
/// Construction rejects factors that make the geometric series singular, so a
/// `GrowthFactor` in hand is always safe to use in cost formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct GrowthFactor(f64);

impl GrowthFactor {
    /// Metal mine, deuterium synthesizer, solar plant.
    pub const ONE_POINT_FIVE: Self = Self(1.5);
    /// Crystal mine.
    pub const ONE_POINT_SIX: Self = Self(1.6);
    /// Astrophysics.
    pub const ONE_POINT_SEVEN_FIVE: Self = Self(1.75);
    /// Fusion reactor.
    pub const ONE_POINT_EIGHT: Self = Self(1.8);
    /// Most stations, storage and research.
    pub const TWO: Self = Self(2.0);
    /// Resource dens.
    pub const TWO_POINT_THREE: Self = Self(2.3);

    /// Validates a raw factor.
    ///
    /// # Errors
    ///
    /// [`AdvisorError::UnsupportedGrowthFactor`] for 1, non-positive or
    /// non-finite values.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 || (value - 1.0).abs() < f64::EPSILON {
            return Err(AdvisorError::UnsupportedGrowthFactor(value));
        }
        Ok(Self(value))
    }

    /// The raw multiplier.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for GrowthFactor {
    type Error = AdvisorError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<GrowthFactor> for f64 {
    fn from(factor: GrowthFactor) -> Self {
        factor.0
    }
}

/// How an item's cost evolves with its level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostRule {
    /// `(base / g) * g^level`, truncated per component.
    Geometric(GrowthFactor),
    /// `base / 2 * 2^level` on all four components, energy included.
    Doubling,
    /// `floor(0.5 + base/100 * g^(level-1)) * 100` per component.
    Rounded(GrowthFactor),
    /// Costs nothing but energy: `100000 * 3^level`.
    EnergyOnly,
    /// Fixed cost per unit (ships and defense).
    Unit,
}

/// Scoring classification of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemGroup {
    /// Mines and energy buildings
    Production,
    /// Every other building
    Infrastructure,
    /// Account-wide technologies
    Research,
    /// Transport and utility ships
    CivilShip,
    /// Combat ships
    MilitaryShip,
    /// Planetary defense devices
    Defense,
}

/// Every item the advisor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemId {
    // Buildings
    MetalMine,
    CrystalMine,
    DeuteriumSynthesizer,
    SolarPlant,
    FusionReactor,
    MetalStorage,
    CrystalStorage,
    DeuteriumTank,
    ShieldedMetalDen,
    UndergroundCrystalDen,
    SeabedDeuteriumDen,
    RoboticsFactory,
    NaniteFactory,
    Shipyard,
    ResearchLab,
    Terraformer,
    AllianceDepot,
    MissileSilo,
    LunarBase,
    SensorPhalanx,
    JumpGate,
    // Research
    EspionageTechnology,
    ComputerTechnology,
    WeaponsTechnology,
    ShieldingTechnology,
    ArmourTechnology,
    EnergyTechnology,
    HyperspaceTechnology,
    CombustionDrive,
    ImpulseDrive,
    HyperspaceDrive,
    LaserTechnology,
    IonTechnology,
    PlasmaTechnology,
    IntergalacticResearchNetwork,
    Astrophysics,
    GravitonTechnology,
    // Ships
    LightFighter,
    HeavyFighter,
    Cruiser,
    Battleship,
    Battlecruiser,
    Bomber,
    Destroyer,
    Deathstar,
    SmallCargo,
    LargeCargo,
    ColonyShip,
    Recycler,
    EspionageProbe,
    SolarSatellite,
    // Defense
    RocketLauncher,
    LightLaser,
    HeavyLaser,
    GaussCannon,
    IonCannon,
    PlasmaTurret,
    SmallShieldDome,
    LargeShieldDome,
    AntiBallisticMissile,
    InterplanetaryMissile,
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A single catalog entry: what an item is called, how it scores and what it
/// costs.
///
/// # Example
///
/// ```
/// use oadvisor::models::{CostRule, GrowthFactor, ItemDef, ItemGroup, ItemId, ResourceVector};
///
/// let mine = ItemDef {
///     id: ItemId::MetalMine,
///     name: "Metal Mine".to_string(),
///     group: ItemGroup::Production,
///     base_cost: ResourceVector::new(60, 15, 0),
///     rule: CostRule::Geometric(GrowthFactor::ONE_POINT_FIVE),
/// };
///
/// assert_eq!(mine.cost_at_level(1), ResourceVector::new(60, 15, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDef {
    /// Identity of the item
    pub id: ItemId,
    /// Display name (e.g., "Metal Mine")
    pub name: String,
    /// Scoring classification
    pub group: ItemGroup,
    /// Cost of the first level, or of one unit
    pub base_cost: ResourceVector,
    /// Cost growth rule
    pub rule: CostRule,
}

// ============================================================================
// Snapshots
// ============================================================================

fn default_performance() -> f64 {
    1.0
}

fn default_speed() -> u32 {
    1
}

/// The stored level of a building or research.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    /// Which item
    pub item: ItemId,
    /// Current level
    pub level: u32,
    /// Production performance setting (only meaningful for mines and plants)
    #[serde(default = "default_performance")]
    pub performance: f64,
}

impl LevelRecord {
    /// A record at full performance.
    pub fn new(item: ItemId, level: u32) -> Self {
        Self {
            item,
            level,
            performance: 1.0,
        }
    }
}

/// The stored count of a ship or defense device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRecord {
    /// Which item
    pub item: ItemId,
    /// Number of units
    pub count: u64,
}

impl CountRecord {
    pub fn new(item: ItemId, count: u64) -> Self {
        Self { item, count }
    }
}

/// Everything stored about a moon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoonSnapshot {
    /// Moon name
    pub name: String,
    /// Building levels on the moon
    #[serde(default)]
    pub buildings: Vec<LevelRecord>,
    /// Defense on the moon
    #[serde(default)]
    pub defense: Vec<CountRecord>,
}

/// Everything stored about a planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetSnapshot {
    /// Planet name
    pub name: String,
    /// Effective maximum temperature
    pub temperature: i32,
    /// Building levels
    #[serde(default)]
    pub buildings: Vec<LevelRecord>,
    /// Planet-bound ships (solar satellites)
    #[serde(default)]
    pub ships: Vec<CountRecord>,
    /// Defense devices
    #[serde(default)]
    pub defense: Vec<CountRecord>,
    /// The planet's moon, if any
    #[serde(default)]
    pub moon: Option<MoonSnapshot>,
}

impl PlanetSnapshot {
    /// Looks up a building record.
    pub fn building(&self, item: ItemId) -> Option<&LevelRecord> {
        self.buildings.iter().find(|b| b.item == item)
    }

    /// Looks up a planet-bound ship count.
    pub fn ship_count(&self, item: ItemId) -> Option<u64> {
        self.ships.iter().find(|s| s.item == item).map(|s| s.count)
    }

    fn require_building(&self, item: ItemId) -> Result<&LevelRecord> {
        self.building(item)
            .ok_or_else(|| AdvisorError::MissingPrerequisite {
                item,
                scope: self.name.clone(),
            })
    }
}

/// A consistent snapshot of one account as handed in by the caller.
///
/// # Example
///
/// ```
/// use oadvisor::models::AccountSnapshot;
///
/// let json = r#"{ "speed": 2, "planets": [] }"#;
/// let account: AccountSnapshot = serde_json::from_str(json).unwrap();
///
/// assert_eq!(account.speed, 2);
/// assert_eq!(account.trade.metal, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Universe speed
    #[serde(default = "default_speed")]
    pub speed: u32,
    /// Trade ratios used for metal-standard valuation
    #[serde(default)]
    pub trade: TradeRatio,
    /// Research levels
    #[serde(default)]
    pub research: Vec<LevelRecord>,
    /// Account-wide ships (everything except solar satellites)
    #[serde(default)]
    pub ships: Vec<CountRecord>,
    /// All planets
    #[serde(default)]
    pub planets: Vec<PlanetSnapshot>,
}

impl AccountSnapshot {
    /// Looks up a research record.
    pub fn research(&self, item: ItemId) -> Option<&LevelRecord> {
        self.research.iter().find(|r| r.item == item)
    }

    /// Looks up a research record, failing if it is absent.
    pub fn require_research(&self, item: ItemId) -> Result<&LevelRecord> {
        self.research(item)
            .ok_or_else(|| AdvisorError::MissingPrerequisite {
                item,
                scope: "account".to_string(),
            })
    }
}

/// Level and performance of a single production building.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingState {
    /// Current level
    pub level: u32,
    /// Performance setting (1.0 = 100%)
    pub performance: f64,
}

impl From<&LevelRecord> for BuildingState {
    fn from(record: &LevelRecord) -> Self {
        Self {
            level: record.level,
            performance: record.performance,
        }
    }
}

/// The resolved inputs for one planet's production and queue calculations.
///
/// Built from snapshots with [`PlanetContext::resolve`], which refuses to
/// proceed when any required record is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetContext {
    /// Planet name
    pub name: String,
    /// Metal mine
    pub metal_mine: BuildingState,
    /// Crystal mine
    pub crystal_mine: BuildingState,
    /// Deuterium synthesizer
    pub deuterium_synthesizer: BuildingState,
    /// Solar plant
    pub solar_plant: BuildingState,
    /// Fusion reactor
    pub fusion_reactor: BuildingState,
    /// Number of solar satellites
    pub solar_satellites: u64,
    /// Robotics factory level
    pub robotics_factory: u32,
    /// Nanite factory level
    pub nanite_factory: u32,
    /// Effective maximum temperature
    pub temperature: i32,
    /// Energy technology level (account-wide)
    pub energy_technology: u32,
    /// Plasma technology level (account-wide)
    pub plasma_technology: u32,
    /// Universe speed
    pub speed: u32,
    /// Account trade ratios
    pub trade: TradeRatio,
}

impl PlanetContext {
    /// Extracts the levels needed for production and queue calculations.
    ///
    /// # Errors
    ///
    /// [`AdvisorError::MissingPrerequisite`] naming the first absent record.
    pub fn resolve(planet: &PlanetSnapshot, account: &AccountSnapshot) -> Result<Self> {
        let solar_satellites = planet.ship_count(ItemId::SolarSatellite).ok_or_else(|| {
            AdvisorError::MissingPrerequisite {
                item: ItemId::SolarSatellite,
                scope: planet.name.clone(),
            }
        })?;

        Ok(Self {
            name: planet.name.clone(),
            metal_mine: planet.require_building(ItemId::MetalMine)?.into(),
            crystal_mine: planet.require_building(ItemId::CrystalMine)?.into(),
            deuterium_synthesizer: planet
                .require_building(ItemId::DeuteriumSynthesizer)?
                .into(),
            solar_plant: planet.require_building(ItemId::SolarPlant)?.into(),
            fusion_reactor: planet.require_building(ItemId::FusionReactor)?.into(),
            solar_satellites,
            robotics_factory: planet.require_building(ItemId::RoboticsFactory)?.level,
            nanite_factory: planet.require_building(ItemId::NaniteFactory)?.level,
            temperature: planet.temperature,
            energy_technology: account.require_research(ItemId::EnergyTechnology)?.level,
            plasma_technology: account.require_research(ItemId::PlasmaTechnology)?.level,
            speed: account.speed,
            trade: account.trade,
        })
    }
}

// ============================================================================
// Optimizer configuration and output
// ============================================================================

/// Which production the plasma bonus is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlasmaBase {
    /// Mine output only, without base income or existing bonus
    #[default]
    MineOutput,
    /// Full planet output including base income and the current bonus
    TotalOutput,
}

fn default_lookahead() -> u32 {
    5
}

fn default_deuterium_growth() -> GrowthFactor {
    GrowthFactor::ONE_POINT_FIVE
}

fn default_planet_queue_limit() -> usize {
    5
}

fn default_account_queue_limit() -> usize {
    20
}

/// Tunables for the build-queue optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// How many levels ahead each item is evaluated
    #[serde(default = "default_lookahead")]
    pub lookahead: u32,
    /// Cost growth used for the deuterium synthesizer lookahead
    #[serde(default = "default_deuterium_growth")]
    pub deuterium_growth: GrowthFactor,
    /// Production the plasma queue values its bonus against
    #[serde(default)]
    pub plasma_base: PlasmaBase,
    /// Entries kept per planet when building the account queue
    #[serde(default = "default_planet_queue_limit")]
    pub planet_queue_limit: usize,
    /// Entries kept in the merged account queue
    #[serde(default = "default_account_queue_limit")]
    pub account_queue_limit: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            lookahead: default_lookahead(),
            deuterium_growth: default_deuterium_growth(),
            plasma_base: PlasmaBase::default(),
            planet_queue_limit: default_planet_queue_limit(),
            account_queue_limit: default_account_queue_limit(),
        }
    }
}

/// One candidate upgrade, scored for ranking.
///
/// Entries are produced fresh on every query and sort ascending by
/// `(score, required_satellites, build_time, capacity_upgrade)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueueEntry {
    /// Cost in MSE per unit of hourly MSE gained (lower is better)
    pub score: f64,
    /// Solar satellites needed to cover the resulting energy deficit
    pub required_satellites: u64,
    /// Hours to build at the current capacity
    pub build_time: f64,
    /// Whether a robotics/nanite upgrade first pays for itself
    pub capacity_upgrade: bool,
    /// The item to upgrade
    pub item: ItemId,
    /// Display name of the item
    pub name: String,
    /// Planet the upgrade belongs to (None for research)
    pub planet: Option<String>,
    /// Level reached by this upgrade
    pub level: u32,
    /// Hourly production gained, in MSE
    pub gain: i64,
    /// Change in planet energy caused by this upgrade
    pub required_energy: i64,
    /// Cost of this level
    pub cost: ResourceVector,
    /// Cost of this level in MSE
    pub cost_mse: i64,
}

/// One fusion/energy-technology combination in the energy matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyMatrixCell {
    /// Energy technology level
    pub energy_level: u32,
    /// Fusion energy output at this combination
    pub production: i64,
    /// Output gained over the current combination
    pub gain: i64,
    /// MSE spent to reach this combination, per planet
    pub cost: f64,
    /// Cost per unit of energy gained (0 when nothing is gained)
    pub ratio: f64,
}

/// A row of the energy matrix at one fusion reactor level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyMatrixRow {
    /// Fusion reactor level
    pub fusion_level: u32,
    /// Combinations with increasing energy technology
    pub cells: Vec<EnergyMatrixCell>,
}

/// Fusion reactor versus energy technology investment grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyMatrix {
    /// Current (or requested) fusion level
    pub fusion_level: u32,
    /// Current (or requested) energy technology level
    pub energy_level: u32,
    /// Rows with increasing fusion level
    pub rows: Vec<EnergyMatrixRow>,
}

// ============================================================================
// Points
// ============================================================================

/// A points total with its share of the account total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Share {
    /// Points in this category
    pub points: i64,
    /// Percentage of the account total (0 when the total is 0)
    pub percent: f64,
}

/// Point values of a single planet and its moon.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PlanetPoints {
    /// Planet name
    pub name: String,
    /// Sum of every category below
    pub total: i64,
    /// Mines and energy buildings
    pub production: i64,
    /// All other buildings
    pub other: i64,
    /// Defense devices on the planet
    pub defense: i64,
    /// Buildings on the moon
    pub moon_buildings: i64,
    /// Defense devices on the moon
    pub moon_defense: i64,
}

/// Ship point values split by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ShipPoints {
    /// All ships
    pub total: i64,
    /// Civil ships (cargo, recyclers, probes, satellites, ...)
    pub civil: i64,
    /// Combat ships
    pub military: i64,
}

/// The in-game highscore split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameScore {
    /// Buildings, defense and half of the civil fleet
    pub economy: f64,
    /// Combat fleet, defense and half of the civil fleet
    pub military: f64,
    /// Research
    pub research: i64,
}

/// A planet's points with its share of the account total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetShare {
    /// Per-category points
    pub points: PlanetPoints,
    /// Percentage of the account total
    pub percent: f64,
}

/// Full points breakdown of an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsReport {
    /// Sum of all categories
    pub total: i64,
    /// Production buildings
    pub production: Share,
    /// Other buildings
    pub other: Share,
    /// Planet and moon defense
    pub defense: Share,
    /// Moon buildings
    pub moons: Share,
    /// Research
    pub research: Share,
    /// Ships
    pub ships: Share,
    /// Ship split
    pub ship_points: ShipPoints,
    /// Planets ordered by points, highest first
    pub planets: Vec<PlanetShare>,
    /// Highscore split
    pub game_score: GameScore,
}

// ============================================================================
// CSV Row Structures
// ============================================================================

/// Cost rule column of a catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Geometric growth (needs `growth`)
    Geometric,
    /// Doubling with energy
    Doubling,
    /// Rounded to hundreds (needs `growth`)
    Rounded,
    /// Energy-only cost
    EnergyOnly,
    /// Fixed per-unit cost
    Unit,
}

/// CSV row structure for catalog files.
#[derive(Debug, Deserialize)]
pub struct ItemRow {
    /// Item identity
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Scoring classification
    pub group: ItemGroup,
    /// Base metal cost
    pub metal: i64,
    /// Base crystal cost
    pub crystal: i64,
    /// Base deuterium cost
    pub deuterium: i64,
    /// Base energy cost
    pub energy: i64,
    /// Cost rule
    pub rule: RuleKind,
    /// Growth factor for geometric and rounded rules
    pub growth: Option<f64>,
}
