//! Points aggregation, mirroring the game's own scoring.
//!
//! An item's point value is the metal + crystal + deuterium invested in it:
//! the cumulative cost for leveled items, `count * unit cost` for ships and
//! defense. Energy costs carry no points.

use tracing::debug;

use crate::data::Catalog;
use crate::error::Result;
use crate::models::{
    AccountSnapshot, CountRecord, GameScore, ItemGroup, LevelRecord, PlanetPoints, PlanetShare,
    PlanetSnapshot, PointsReport, Share, ShipPoints,
};

/// `points / total * 100`, or 0 when the total is 0.
///
/// # Example
///
/// ```
/// use oadvisor::points::percentage;
///
/// assert_eq!(percentage(25, 100), 25.0);
/// assert_eq!(percentage(25, 0), 0.0);
/// ```
pub fn percentage(points: i64, total: i64) -> f64 {
    if total == 0 {
        0.0
    } else {
        points as f64 / total as f64 * 100.0
    }
}

fn share(points: i64, total: i64) -> Share {
    Share {
        points,
        percent: percentage(points, total),
    }
}

fn leveled_value(catalog: &Catalog, record: &LevelRecord) -> Result<(ItemGroup, i64)> {
    let def = catalog.get(record.item)?;
    Ok((def.group, def.cumulative_cost(record.level).resources()))
}

fn counted_value(catalog: &Catalog, record: &CountRecord) -> Result<(ItemGroup, i64)> {
    let def = catalog.get(record.item)?;
    Ok((def.group, def.unit_value(record.count).resources()))
}

fn sum_counted(catalog: &Catalog, records: &[CountRecord]) -> Result<i64> {
    records
        .iter()
        .map(|r| counted_value(catalog, r).map(|(_, value)| value))
        .sum()
}

/// Point values of one planet and its moon.
///
/// Buildings split into production (mines and energy buildings) and other.
/// Records that are absent simply contribute nothing.
///
/// # Errors
///
/// [`crate::error::AdvisorError::UnknownItem`] if a record names an item the
/// catalog does not define.
pub fn planet_points(catalog: &Catalog, planet: &PlanetSnapshot) -> Result<PlanetPoints> {
    let mut points = PlanetPoints {
        name: planet.name.clone(),
        ..PlanetPoints::default()
    };

    for record in &planet.buildings {
        match leveled_value(catalog, record)? {
            (ItemGroup::Production, value) => points.production += value,
            (_, value) => points.other += value,
        }
    }
    points.defense = sum_counted(catalog, &planet.defense)?;

    if let Some(moon) = &planet.moon {
        for record in &moon.buildings {
            points.moon_buildings += leveled_value(catalog, record)?.1;
        }
        points.moon_defense = sum_counted(catalog, &moon.defense)?;
    }

    points.total = points.production + points.other + points.defense + points.moon_buildings + points.moon_defense;
    Ok(points)
}

/// Point value of all research.
pub fn research_points(catalog: &Catalog, account: &AccountSnapshot) -> Result<i64> {
    account
        .research
        .iter()
        .map(|r| leveled_value(catalog, r).map(|(_, value)| value))
        .sum()
}

/// Point value of the fleet, split into civil and military ships.
///
/// Planet-bound ships (solar satellites) count as civil.
pub fn ship_points(catalog: &Catalog, account: &AccountSnapshot) -> Result<ShipPoints> {
    let planet_ships = account.planets.iter().flat_map(|p| p.ships.iter());

    let mut points = ShipPoints::default();
    for record in account.ships.iter().chain(planet_ships) {
        match counted_value(catalog, record)? {
            (ItemGroup::MilitaryShip, value) => points.military += value,
            (_, value) => points.civil += value,
        }
    }
    points.total = points.civil + points.military;
    Ok(points)
}

/// Full points breakdown of an account.
///
/// Total = production + other + defense + moons + research + ships. Every
/// percentage is 0 when the total is 0.
///
/// # Errors
///
/// Fails if a record names an item the catalog does not define.
pub fn account_points(catalog: &Catalog, account: &AccountSnapshot) -> Result<PointsReport> {
    let planets = account
        .planets
        .iter()
        .map(|p| planet_points(catalog, p))
        .collect::<Result<Vec<_>>>()?;

    let production: i64 = planets.iter().map(|p| p.production).sum();
    let other: i64 = planets.iter().map(|p| p.other).sum();
    let defense: i64 = planets.iter().map(|p| p.defense + p.moon_defense).sum();
    let moons: i64 = planets.iter().map(|p| p.moon_buildings).sum();
    let research = research_points(catalog, account)?;
    let ships = ship_points(catalog, account)?;

    let total = production + other + defense + moons + research + ships.total;

    let mut planet_shares: Vec<PlanetShare> = planets
        .into_iter()
        .map(|points| PlanetShare {
            percent: percentage(points.total, total),
            points,
        })
        .collect();
    planet_shares.sort_by(|a, b| b.points.total.cmp(&a.points.total));

    let half_civil = ships.civil as f64 / 2.0;
    let game_score = GameScore {
        economy: (production + other + defense) as f64 + half_civil,
        military: (ships.military + defense) as f64 + half_civil,
        research,
    };

    debug!(total, planets = planet_shares.len(), "Computed account points");

    Ok(PointsReport {
        total,
        production: share(production, total),
        other: share(other, total),
        defense: share(defense, total),
        moons: share(moons, total),
        research: share(research, total),
        ships: share(ships.total, total),
        ship_points: ships,
        planets: planet_shares,
        game_score,
    })
}
