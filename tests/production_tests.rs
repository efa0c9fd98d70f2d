//! Tests for production, energy and capacity calculations.

mod common;

use oadvisor::error::AdvisorError;
use oadvisor::models::{ItemId, PlanetContext, PlasmaBase, ResourceVector};
use oadvisor::production::{
    account_production, base_income, build_time_hours, capacity, crystal_production,
    deuterium_production, energy_balance, energy_production, fusion_production, metal_production,
    mine_production, planet_production, plasma_base_production, plasma_bonus, satellite_production,
    satellite_yield, solar_production, PerformanceMode,
};
use proptest::prelude::*;

#[test]
fn test_metal_mine_level_ten() {
    assert_eq!(metal_production(10, 1.0, 1), ResourceVector::with_energy(778, 0, 0, -260));
}

#[test]
fn test_crystal_mine_level_ten() {
    assert_eq!(crystal_production(10, 1.0, 1), ResourceVector::with_energy(0, 518, 0, -260));
}

#[test]
fn test_deuterium_synthesizer_depends_on_temperature() {
    assert_eq!(
        deuterium_production(10, 40, 1.0, 1),
        ResourceVector::with_energy(0, 0, 331, -519)
    );
    let cold = deuterium_production(10, -100, 1.0, 1);
    let hot = deuterium_production(10, 100, 1.0, 1);
    assert!(cold.deuterium > hot.deuterium);
    assert_eq!(cold.energy, hot.energy);
}

#[test]
fn test_speed_scales_resources_not_energy() {
    let fast = metal_production(10, 1.0, 2);
    assert_eq!(fast.metal, 1556);
    assert_eq!(fast.energy, -260);
}

#[test]
fn test_performance_reduces_output() {
    assert_eq!(metal_production(10, 0.5, 1), ResourceVector::with_energy(389, 0, 0, -130));
}

#[test]
fn test_level_zero_produces_nothing() {
    assert_eq!(metal_production(0, 1.0, 1), ResourceVector::ZERO);
    assert_eq!(solar_production(0, 1.0), ResourceVector::ZERO);
    assert_eq!(fusion_production(0, 1.0, 1, 12), ResourceVector::ZERO);
}

#[test]
fn test_solar_plant() {
    assert_eq!(solar_production(10, 1.0), ResourceVector::with_energy(0, 0, 0, 518));
}

#[test]
fn test_fusion_reactor_burns_deuterium() {
    // 30 * 5 * 1.08^5 = 220.4, consumption ceil(10 * 5 * 1.1^5) = 81
    assert_eq!(
        fusion_production(5, 1.0, 1, 3),
        ResourceVector::with_energy(0, 0, -81, 220)
    );
    assert_eq!(fusion_production(5, 1.0, 2, 3).deuterium, -162);
}

#[test]
fn test_satellites() {
    assert_eq!(satellite_yield(40), 30);
    assert_eq!(satellite_yield(-140), 0);
    assert_eq!(satellite_production(10, 40), ResourceVector::with_energy(0, 0, 0, 300));
}

#[test]
fn test_plasma_bonus() {
    assert_eq!(plasma_bonus(10, 1000, 1000), ResourceVector::new(100, 66, 0));
    assert_eq!(plasma_bonus(0, 1000, 1000), ResourceVector::ZERO);
}

#[test]
fn test_base_income() {
    assert_eq!(base_income(1), ResourceVector::new(30, 15, 0));
    assert_eq!(base_income(2), ResourceVector::new(60, 30, 0));
}

#[test]
fn test_capacity() {
    assert_eq!(capacity(5, 0, 1), 15000);
    assert_eq!(capacity(10, 1, 1), 55000);
    assert_eq!(capacity(0, 0, 2), 5000);
}

#[test]
fn test_build_time() {
    assert_eq!(build_time_hours(ResourceVector::new(10000, 5000, 0), 15000), 1.0);
    assert!(build_time_hours(ResourceVector::new(1, 0, 0), 0).is_infinite());
}

#[test]
fn test_planet_production_sums_every_source() {
    let account = common::account(vec![common::homeworld()]);
    let ctx = PlanetContext::resolve(&account.planets[0], &account).unwrap();

    // Mines 778/342/136 drawing 645 energy, solar 518, base income 30/15.
    assert_eq!(
        planet_production(&ctx, PerformanceMode::Actual),
        ResourceVector::with_energy(808, 357, 136, -127)
    );
    assert_eq!(energy_balance(&ctx), -127);
    assert_eq!(mine_production(&ctx, PerformanceMode::Actual).resources(), 778 + 342 + 136);
}

#[test]
fn test_theoretical_mode_ignores_performance() {
    let mut planet = common::homeworld();
    for building in &mut planet.buildings {
        if building.item == ItemId::MetalMine {
            building.performance = 0.5;
        }
    }
    let account = common::account(vec![planet]);
    let ctx = PlanetContext::resolve(&account.planets[0], &account).unwrap();

    let actual = planet_production(&ctx, PerformanceMode::Actual);
    let theoretical = planet_production(&ctx, PerformanceMode::Theoretical);
    assert_eq!(actual.metal, 389 + 30);
    assert_eq!(theoretical.metal, 778 + 30);
    assert!(actual.energy > theoretical.energy);
}

#[test]
fn test_energy_sources_are_reported_separately() {
    let planet = common::planet("Colony", 40, [0, 0, 0, 10, 5], 0, 0, 10);
    let account = common::account(vec![planet]);
    let ctx = PlanetContext::resolve(&account.planets[0], &account).unwrap();

    let sources = energy_production(&ctx, PerformanceMode::Actual);
    assert_eq!(sources.solar.energy, 518);
    assert_eq!(sources.fusion.energy, 220);
    assert_eq!(sources.satellites.energy, 300);
    assert_eq!(sources.total().energy, 1038);
}

#[test]
fn test_plasma_bonus_counts_in_planet_production() {
    let mut account = common::account(vec![common::homeworld()]);
    account.research[1].level = 10;
    let ctx = PlanetContext::resolve(&account.planets[0], &account).unwrap();

    // 778 * 0.1 = 77.8, 342 * 0.066 = 22.57
    let production = planet_production(&ctx, PerformanceMode::Actual);
    assert_eq!(production.metal, 808 + 77);
    assert_eq!(production.crystal, 357 + 22);
}

#[test]
fn test_account_production_sums_planets() {
    let account = common::account(vec![common::homeworld(), common::homeworld()]);
    assert_eq!(
        account_production(&account).unwrap(),
        ResourceVector::with_energy(1616, 714, 272, -254)
    );
}

#[test]
fn test_plasma_base_production() {
    let account = common::account(vec![common::homeworld()]);
    let mines = plasma_base_production(&account, PlasmaBase::MineOutput).unwrap();
    let total = plasma_base_production(&account, PlasmaBase::TotalOutput).unwrap();
    assert_eq!(mines.metal, 778);
    assert_eq!(total.metal, 808);
}

#[test]
fn test_missing_record_is_an_error() {
    let planet = common::without_building(common::homeworld(), ItemId::FusionReactor);
    let account = common::account(vec![planet]);

    match account_production(&account) {
        Err(AdvisorError::MissingPrerequisite { item, scope }) => {
            assert_eq!(item, ItemId::FusionReactor);
            assert_eq!(scope, "Homeworld");
        }
        other => panic!("expected a missing prerequisite, got {:?}", other),
    }
}

#[test]
fn test_missing_research_is_an_error() {
    let mut account = common::account(vec![common::homeworld()]);
    account.research.clear();

    let err = PlanetContext::resolve(&account.planets[0], &account).unwrap_err();
    assert!(matches!(
        err,
        AdvisorError::MissingPrerequisite {
            item: ItemId::EnergyTechnology,
            ..
        }
    ));
}

proptest! {
    #[test]
    fn prop_mine_output_grows_with_level(level in 0u32..40, temperature in -130i32..200) {
        prop_assert!(metal_production(level + 1, 1.0, 1).metal > metal_production(level, 1.0, 1).metal);
        prop_assert!(crystal_production(level + 1, 1.0, 1).crystal > crystal_production(level, 1.0, 1).crystal);
        prop_assert!(
            deuterium_production(level + 1, temperature, 1.0, 1).deuterium
                >= deuterium_production(level, temperature, 1.0, 1).deuterium
        );
        prop_assert!(metal_production(level + 1, 1.0, 1).energy <= metal_production(level, 1.0, 1).energy);
    }

    #[test]
    fn prop_production_is_pure(level in 0u32..40, temperature in -130i32..200, performance in 0.0f64..1.0) {
        prop_assert_eq!(
            deuterium_production(level, temperature, performance, 1),
            deuterium_production(level, temperature, performance, 1)
        );
        prop_assert_eq!(fusion_production(level, performance, 1, 5), fusion_production(level, performance, 1, 5));
    }
}
