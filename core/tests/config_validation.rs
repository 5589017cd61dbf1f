//! Configuration validation tests — errors are fatal before generation.

use esg_core::{
    config::DashboardConfig,
    error::DashboardError,
    schema::{Distribution, MetricDef, MetricSchema},
};

#[test]
fn default_config_validates() {
    DashboardConfig::default().validate().unwrap();
}

#[test]
fn every_empty_dimension_is_reported_by_name() {
    let base = DashboardConfig::default;

    let cases = [
        (DashboardConfig { years: Vec::new(), ..base() }, "years"),
        (DashboardConfig { subsidiaries: Vec::new(), ..base() }, "subsidiaries"),
        (DashboardConfig { assets: Vec::new(), ..base() }, "assets"),
        (DashboardConfig { phases: Vec::new(), ..base() }, "phases"),
    ];

    for (config, name) in cases {
        match config.validate() {
            Err(DashboardError::EmptyDimension { name: reported }) => {
                assert_eq!(reported, name);
            }
            other => panic!("Expected EmptyDimension for {name}, got {other:?}"),
        }
    }
}

#[test]
fn duplicate_metric_names_are_rejected() {
    let schema = MetricSchema {
        metrics: vec![
            MetricDef {
                name: "Energy Usage (kWh/m²)".to_string(),
                distribution: Distribution::UniformInt { lo: 100, hi: 500 },
            },
            MetricDef {
                name: "Energy Usage (kWh/m²)".to_string(),
                distribution: Distribution::UniformInt { lo: 0, hi: 10 },
            },
        ],
    };

    match schema.validate() {
        Err(DashboardError::DuplicateMetric { name }) => {
            assert!(name.contains("Energy Usage"));
        }
        other => panic!("Expected DuplicateMetric, got {other:?}"),
    }
}

#[test]
fn inverted_bounds_are_rejected() {
    let schema = MetricSchema {
        metrics: vec![MetricDef {
            name: "ROI (%)".to_string(),
            distribution: Distribution::UniformReal { lo: 15.0, hi: 5.0 },
        }],
    };

    match schema.validate() {
        Err(DashboardError::InvalidBounds { metric, lo, hi }) => {
            assert_eq!(metric, "ROI (%)");
            assert!(lo > hi);
        }
        other => panic!("Expected InvalidBounds, got {other:?}"),
    }
}

#[test]
fn all_shipped_schema_versions_validate() {
    use esg_core::schema::SchemaVersion;

    for version in [SchemaVersion::V1, SchemaVersion::V2, SchemaVersion::V3] {
        let config = DashboardConfig {
            schema_version: version,
            ..DashboardConfig::default()
        };
        config.validate().unwrap_or_else(|e| {
            panic!("Shipped variant {version:?} failed validation: {e}")
        });
    }
}

#[test]
fn config_round_trips_through_json() {
    let config = DashboardConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: DashboardConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
