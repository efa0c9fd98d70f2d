//! Tests for points aggregation.

mod common;

use oadvisor::data::Catalog;
use oadvisor::models::{
    AccountSnapshot, CountRecord, ItemId, LevelRecord, MoonSnapshot, PlanetSnapshot, TradeRatio,
};
use oadvisor::points::{account_points, percentage, planet_points, research_points, ship_points};

fn catalog() -> Catalog {
    Catalog::embedded().expect("embedded catalog should load")
}

/// Metal mine 2 (187), robotics 1 (720), 10 rocket launchers (20000), a moon
/// with a lunar base (80000) and 2 light lasers (4000), one satellite (2500).
fn outpost() -> PlanetSnapshot {
    PlanetSnapshot {
        name: "Outpost".to_string(),
        temperature: 20,
        buildings: vec![
            LevelRecord::new(ItemId::MetalMine, 2),
            LevelRecord::new(ItemId::RoboticsFactory, 1),
        ],
        ships: vec![CountRecord::new(ItemId::SolarSatellite, 1)],
        defense: vec![CountRecord::new(ItemId::RocketLauncher, 10)],
        moon: Some(MoonSnapshot {
            name: "Moon".to_string(),
            buildings: vec![LevelRecord::new(ItemId::LunarBase, 1)],
            defense: vec![CountRecord::new(ItemId::LightLaser, 2)],
        }),
    }
}

fn outpost_account() -> AccountSnapshot {
    AccountSnapshot {
        speed: 1,
        trade: TradeRatio::default(),
        research: vec![LevelRecord::new(ItemId::EnergyTechnology, 1)],
        ships: vec![
            CountRecord::new(ItemId::LightFighter, 1),
            CountRecord::new(ItemId::SmallCargo, 2),
        ],
        planets: vec![outpost()],
    }
}

#[test]
fn test_percentage_of_zero_total() {
    assert_eq!(percentage(0, 0), 0.0);
    assert_eq!(percentage(500, 0), 0.0);
    assert_eq!(percentage(1, 4), 25.0);
}

#[test]
fn test_planet_points_by_category() {
    let points = planet_points(&catalog(), &outpost()).unwrap();

    assert_eq!(points.name, "Outpost");
    assert_eq!(points.production, 187);
    assert_eq!(points.other, 720);
    assert_eq!(points.defense, 20000);
    assert_eq!(points.moon_buildings, 80000);
    assert_eq!(points.moon_defense, 4000);
    assert_eq!(points.total, 187 + 720 + 20000 + 80000 + 4000);
}

#[test]
fn test_research_and_ship_points() {
    let catalog = catalog();
    let account = outpost_account();

    assert_eq!(research_points(&catalog, &account).unwrap(), 1200);

    let ships = ship_points(&catalog, &account).unwrap();
    assert_eq!(ships.military, 4000);
    assert_eq!(ships.civil, 8000 + 2500);
    assert_eq!(ships.total, 14500);
}

#[test]
fn test_account_points_totals() {
    let report = account_points(&catalog(), &outpost_account()).unwrap();

    assert_eq!(report.total, 120_607);
    assert_eq!(report.production.points, 187);
    assert_eq!(report.other.points, 720);
    assert_eq!(report.defense.points, 24000);
    assert_eq!(report.moons.points, 80000);
    assert_eq!(report.research.points, 1200);
    assert_eq!(report.ships.points, 14500);

    let sum = report.production.points
        + report.other.points
        + report.defense.points
        + report.moons.points
        + report.research.points
        + report.ships.points;
    assert_eq!(sum, report.total);

    let percent_sum = report.production.percent
        + report.other.percent
        + report.defense.percent
        + report.moons.percent
        + report.research.percent
        + report.ships.percent;
    assert!((percent_sum - 100.0).abs() < 1e-9);
}

#[test]
fn test_game_score_split() {
    let report = account_points(&catalog(), &outpost_account()).unwrap();

    assert_eq!(report.game_score.economy, (187 + 720 + 24000) as f64 + 5250.0);
    assert_eq!(report.game_score.military, (4000 + 24000) as f64 + 5250.0);
    assert_eq!(report.game_score.research, 1200);
}

#[test]
fn test_empty_account_has_zero_percentages() {
    let mut account = common::account(Vec::new());
    account.research.clear();

    let report = account_points(&catalog(), &account).unwrap();
    assert_eq!(report.total, 0);
    for share in [
        report.production,
        report.other,
        report.defense,
        report.moons,
        report.research,
        report.ships,
    ] {
        assert_eq!(share.points, 0);
        assert_eq!(share.percent, 0.0);
    }
    assert!(report.planets.is_empty());
}

#[test]
fn test_missing_records_count_as_nothing() {
    let bare = PlanetSnapshot {
        name: "Bare".to_string(),
        temperature: 0,
        buildings: Vec::new(),
        ships: Vec::new(),
        defense: Vec::new(),
        moon: None,
    };
    let points = planet_points(&catalog(), &bare).unwrap();
    assert_eq!(points.total, 0);
}

#[test]
fn test_planets_ranked_by_points() {
    let mut account = outpost_account();
    account.planets.insert(0, common::homeworld());

    let report = account_points(&catalog(), &account).unwrap();
    assert_eq!(report.planets.len(), 2);
    assert_eq!(report.planets[0].points.name, "Outpost");
    assert_eq!(report.planets[1].points.name, "Homeworld");
    assert!(report.planets[0].percent > report.planets[1].percent);

    let expected = percentage(report.planets[0].points.total, report.total);
    assert_eq!(report.planets[0].percent, expected);
}
