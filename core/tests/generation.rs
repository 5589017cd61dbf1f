//! Fact-table generation tests.

use esg_core::{
    config::DashboardConfig,
    generator,
    rng::{RngBank, StreamSlot},
    schema::SchemaVersion,
    types::Phase,
};
use std::collections::HashSet;

fn gen(config: &DashboardConfig, seed: u64) -> generator::FactTable {
    let bank = RngBank::new(seed);
    let mut rng = bank.for_stream(StreamSlot::Generator);
    generator::generate(config, &mut rng).unwrap()
}

#[test]
fn row_count_is_cartesian_product() {
    let config = DashboardConfig::default();
    let table = gen(&config, 42);

    assert_eq!(table.rows.len(), 5 * 3 * 3 * 3,
        "Expected 135 rows for the default dimensions, got {}", table.rows.len());
    assert_eq!(table.rows.len(), config.expected_row_count());
}

#[test]
fn every_metric_lies_within_declared_bounds() {
    let config = DashboardConfig::default();
    let table = gen(&config, 7);

    for row in &table.rows {
        assert_eq!(row.metrics.len(), table.schema.len(),
            "Row is missing metric fields");
        for (def, value) in table.schema.metrics.iter().zip(&row.metrics) {
            assert!(def.distribution.contains(value),
                "Metric '{}' out of bounds: {value:?}", def.name);
        }
    }
}

#[test]
fn dimension_tuple_is_unique_per_row() {
    let table = gen(&DashboardConfig::default(), 99);

    let mut seen = HashSet::new();
    for row in &table.rows {
        let key = (row.year, row.subsidiary.clone(), row.asset.clone(), row.phase);
        assert!(seen.insert(key),
            "Duplicate (year, subsidiary, asset, phase) tuple: {} {} {} {:?}",
            row.year, row.subsidiary, row.asset, row.phase);
    }
}

#[test]
fn row_order_follows_nested_dimension_order() {
    let config = DashboardConfig::default();
    let table = gen(&config, 1);

    // First rows cycle the innermost dimension (phase) first.
    assert_eq!(table.rows[0].year, 2019);
    assert_eq!(table.rows[0].phase, Phase::Building);
    assert_eq!(table.rows[1].phase, Phase::Construction);
    assert_eq!(table.rows[2].phase, Phase::PostConstruction);
    assert_eq!(table.rows[3].asset, "Asset 2",
        "Asset should advance after the phase cycle completes");

    // Year is the outermost dimension.
    let per_year = table.rows.len() / config.years.len();
    assert!(table.rows[..per_year].iter().all(|r| r.year == 2019));
    assert!(table.rows[per_year..2 * per_year].iter().all(|r| r.year == 2020));
}

#[test]
fn small_scenario_yields_eight_rows() {
    // years={2019,2020}, subsidiaries={A,B}, assets={X}, phases 2 of 3.
    let config = DashboardConfig {
        years: vec![2019, 2020],
        subsidiaries: vec!["A".to_string(), "B".to_string()],
        assets: vec!["X".to_string()],
        phases: vec![Phase::Building, Phase::Construction],
        schema_version: SchemaVersion::V1,
    };
    let table = gen(&config, 5);

    assert_eq!(table.rows.len(), 8,
        "2×2×1×2 should yield 8 rows, got {}", table.rows.len());
}

#[test]
fn empty_dimension_refuses_to_generate() {
    let config = DashboardConfig {
        assets: Vec::new(),
        ..DashboardConfig::default()
    };
    let bank = RngBank::new(3);
    let mut rng = bank.for_stream(StreamSlot::Generator);

    let err = generator::generate(&config, &mut rng).unwrap_err();
    assert!(err.to_string().contains("assets"),
        "Expected an empty-dimension error naming 'assets', got: {err}");
}

#[test]
fn schema_variants_change_row_width() {
    let v1 = gen(&DashboardConfig::default(), 11);
    let v2 = gen(&DashboardConfig {
        schema_version: SchemaVersion::V2,
        ..DashboardConfig::default()
    }, 11);
    let v3 = gen(&DashboardConfig {
        schema_version: SchemaVersion::V3,
        ..DashboardConfig::default()
    }, 11);

    assert_eq!(v1.schema.len(), 9);
    assert_eq!(v2.schema.len(), 8, "V2 drops two metrics and adds one");
    assert_eq!(v3.schema.len(), 11, "V3 extends V1 by two metrics");
    for table in [&v1, &v2, &v3] {
        assert!(table.rows.iter().all(|r| r.metrics.len() == table.schema.len()));
    }
}
