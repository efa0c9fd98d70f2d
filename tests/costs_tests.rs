//! Tests for upgrade and cumulative cost calculations.

use oadvisor::costs::{cost_at_level, cumulative_cost, energy_only_cost, next_cost, rounded_cost};
use oadvisor::data::Catalog;
use oadvisor::error::AdvisorError;
use oadvisor::models::{GrowthFactor, ItemId, ResourceVector};
use proptest::prelude::*;

fn catalog() -> Catalog {
    Catalog::embedded().expect("embedded catalog should load")
}

#[test]
fn test_metal_mine_first_level_costs_base() {
    let base = ResourceVector::new(60, 15, 0);
    assert_eq!(
        cost_at_level(base, GrowthFactor::ONE_POINT_FIVE, 1),
        ResourceVector::new(60, 15, 0)
    );
    assert_eq!(
        next_cost(base, GrowthFactor::ONE_POINT_FIVE, 0, 1),
        ResourceVector::new(60, 15, 0)
    );
}

#[test]
fn test_metal_mine_second_level() {
    let base = ResourceVector::new(60, 15, 0);
    // 40 * 1.5^2 = 90, 10 * 1.5^2 = 22.5
    assert_eq!(
        next_cost(base, GrowthFactor::ONE_POINT_FIVE, 1, 1),
        ResourceVector::new(90, 22, 0)
    );
    let mine = catalog().get(ItemId::MetalMine).unwrap().clone();
    assert_eq!(mine.next_cost(0, 2), ResourceVector::new(90, 22, 0));
}

#[test]
fn test_level_zero_costs_nothing() {
    let catalog = catalog();
    for item in catalog.items() {
        assert_eq!(
            item.cost_at_level(0),
            ResourceVector::ZERO,
            "{} should cost nothing at level 0",
            item.name
        );
        assert_eq!(item.cumulative_cost(0), ResourceVector::ZERO);
    }
}

#[test]
fn test_cumulative_metal_mine() {
    let mine = catalog().get(ItemId::MetalMine).unwrap().clone();
    // 60 + 90 metal, 15 + 22.5 crystal
    assert_eq!(mine.cumulative_cost(2), ResourceVector::new(150, 37, 0));
}

#[test]
fn test_cumulative_research_uses_factor_two() {
    let energy = catalog().get(ItemId::EnergyTechnology).unwrap().clone();
    assert_eq!(energy.cost_at_level(3), ResourceVector::new(0, 3200, 1600));
    assert_eq!(energy.cumulative_cost(3), ResourceVector::new(0, 5600, 2800));
}

#[test]
fn test_terraformer_doubles_with_energy() {
    let terraformer = catalog().get(ItemId::Terraformer).unwrap().clone();
    assert_eq!(
        terraformer.cost_at_level(1),
        ResourceVector::with_energy(0, 50000, 100000, 1000)
    );
    assert_eq!(
        terraformer.cost_at_level(2),
        ResourceVector::with_energy(0, 100000, 200000, 2000)
    );
}

#[test]
fn test_astrophysics_rounds_to_hundreds() {
    let astro = catalog().get(ItemId::Astrophysics).unwrap().clone();
    assert_eq!(astro.cost_at_level(1), ResourceVector::new(4000, 8000, 4000));
    assert_eq!(astro.cost_at_level(2), ResourceVector::new(7000, 14000, 7000));
    // 40 * 1.75^2 = 122.5 rounds up, 80 * 1.75^2 = 245 stays
    assert_eq!(astro.cost_at_level(3), ResourceVector::new(12300, 24500, 12300));
}

#[test]
fn test_rounded_cost_ignores_energy() {
    let base = ResourceVector::with_energy(4000, 8000, 4000, 500);
    assert_eq!(
        rounded_cost(base, GrowthFactor::ONE_POINT_SEVEN_FIVE, 1).energy,
        0
    );
}

#[test]
fn test_graviton_costs_only_energy() {
    let graviton = catalog().get(ItemId::GravitonTechnology).unwrap().clone();
    assert_eq!(graviton.cost_at_level(1), ResourceVector::with_energy(0, 0, 0, 300_000));
    assert_eq!(graviton.cost_at_level(2), energy_only_cost(2));
    assert_eq!(energy_only_cost(2).energy, 900_000);

    let total = graviton.cumulative_cost(2);
    assert_eq!(total.energy, 1_200_000);
    assert_eq!(total.resources(), 0);
}

#[test]
fn test_unit_items_scale_with_count() {
    let fighter = catalog().get(ItemId::LightFighter).unwrap().clone();
    assert_eq!(fighter.unit_value(3), ResourceVector::new(9000, 3000, 0));
    assert_eq!(fighter.cost_at_level(3), fighter.unit_value(3));
    assert_eq!(fighter.unit_value(0), ResourceVector::ZERO);
}

#[test]
fn test_growth_factor_one_is_rejected() {
    assert!(matches!(
        GrowthFactor::new(1.0),
        Err(AdvisorError::UnsupportedGrowthFactor(_))
    ));
    assert!(GrowthFactor::new(0.0).is_err());
    assert!(GrowthFactor::new(-2.0).is_err());
    assert!(GrowthFactor::new(f64::NAN).is_err());
    assert!(GrowthFactor::new(1.8).is_ok());
}

#[test]
fn test_growth_factor_deserializes_with_validation() {
    let ok: GrowthFactor = serde_json::from_str("1.8").unwrap();
    assert_eq!(ok.value(), 1.8);
    assert!(serde_json::from_str::<GrowthFactor>("1.0").is_err());
}

fn growth_factors() -> impl Strategy<Value = GrowthFactor> {
    prop_oneof![
        Just(GrowthFactor::ONE_POINT_FIVE),
        Just(GrowthFactor::ONE_POINT_SIX),
        Just(GrowthFactor::ONE_POINT_SEVEN_FIVE),
        Just(GrowthFactor::ONE_POINT_EIGHT),
        Just(GrowthFactor::TWO),
        Just(GrowthFactor::TWO_POINT_THREE),
    ]
}

proptest! {
    #[test]
    fn prop_cost_increases_with_level(
        growth in growth_factors(),
        metal in 100i64..10_000,
        crystal in 0i64..10_000,
        level in 1u32..25,
    ) {
        let base = ResourceVector::new(metal, crystal, 0);
        let now = cost_at_level(base, growth, level);
        let next = cost_at_level(base, growth, level + 1);
        prop_assert!(next.metal > now.metal);
        prop_assert!(next.crystal >= now.crystal);
    }

    #[test]
    fn prop_cumulative_matches_sum_of_levels(
        growth in growth_factors(),
        metal in 0i64..10_000,
        crystal in 0i64..10_000,
        deuterium in 0i64..10_000,
        level in 0u32..20,
    ) {
        let base = ResourceVector::new(metal, crystal, deuterium);
        let total = cumulative_cost(base, growth, level);
        let summed: ResourceVector = (0..=level).map(|i| cost_at_level(base, growth, i)).sum();

        // Each truncated term loses less than one unit.
        let tolerance = i64::from(level) + 1;
        prop_assert!((total.metal - summed.metal).abs() <= tolerance);
        prop_assert!((total.crystal - summed.crystal).abs() <= tolerance);
        prop_assert!((total.deuterium - summed.deuterium).abs() <= tolerance);
    }

    #[test]
    fn prop_cost_functions_are_pure(
        growth in growth_factors(),
        metal in 0i64..100_000,
        level in 0u32..30,
    ) {
        let base = ResourceVector::new(metal, metal / 2, metal / 4);
        prop_assert_eq!(cost_at_level(base, growth, level), cost_at_level(base, growth, level));
        prop_assert_eq!(cumulative_cost(base, growth, level), cumulative_cost(base, growth, level));
    }
}
