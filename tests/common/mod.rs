//! Shared snapshot fixtures for integration tests.

#![allow(dead_code)]

use oadvisor::models::{
    AccountSnapshot, CountRecord, ItemId, LevelRecord, PlanetSnapshot, TradeRatio,
};

/// A planet with every record the optimizer needs.
///
/// Metal 10, crystal 8, deuterium 6, solar 10, no fusion, no satellites,
/// robotics 2. Mines draw 645 energy against 518 solar, a balance of -127.
pub fn homeworld() -> PlanetSnapshot {
    planet("Homeworld", 40, [10, 8, 6, 10, 0], 2, 0, 0)
}

/// A planet with the given `[metal, crystal, deuterium, solar, fusion]`
/// levels.
pub fn planet(
    name: &str,
    temperature: i32,
    levels: [u32; 5],
    robotics: u32,
    nanite: u32,
    satellites: u64,
) -> PlanetSnapshot {
    let [metal, crystal, deuterium, solar, fusion] = levels;
    PlanetSnapshot {
        name: name.to_string(),
        temperature,
        buildings: vec![
            LevelRecord::new(ItemId::MetalMine, metal),
            LevelRecord::new(ItemId::CrystalMine, crystal),
            LevelRecord::new(ItemId::DeuteriumSynthesizer, deuterium),
            LevelRecord::new(ItemId::SolarPlant, solar),
            LevelRecord::new(ItemId::FusionReactor, fusion),
            LevelRecord::new(ItemId::RoboticsFactory, robotics),
            LevelRecord::new(ItemId::NaniteFactory, nanite),
        ],
        ships: vec![CountRecord::new(ItemId::SolarSatellite, satellites)],
        defense: Vec::new(),
        moon: None,
    }
}

/// An account holding the given planets with energy technology 3 and plasma
/// technology 0.
pub fn account(planets: Vec<PlanetSnapshot>) -> AccountSnapshot {
    AccountSnapshot {
        speed: 1,
        trade: TradeRatio::default(),
        research: vec![
            LevelRecord::new(ItemId::EnergyTechnology, 3),
            LevelRecord::new(ItemId::PlasmaTechnology, 0),
        ],
        ships: Vec::new(),
        planets,
    }
}

/// Removes a building record from a planet.
pub fn without_building(mut planet: PlanetSnapshot, item: ItemId) -> PlanetSnapshot {
    planet.buildings.retain(|b| b.item != item);
    planet
}
