use cohortsim_core::config::*;
use cohortsim_core::errors::{ConfigError, ConfigurationError, SimError};
use cohortsim_core::models::RetentionPoint;

const AB_SCENARIO: &str = r#"
[simulation]
horizon_days = 30
arppu = 5.0

[[sources]]
name = "original"
installs = [{ days = 19, installs = 20000 }, { days = 11, installs = 12000 }]

[[sources]]
name = "new"
installs = [{ days = 19, installs = 0 }, { days = 11, installs = 8000 }]

[[variants]]
name = "A"
base_purchase_rate = 0.0305
ecpm = 9.80
ad_impressions_per_dau = 2.3

[variants.retention.original]
kind = "point_table"
points = [
    { day = 1, fraction = 1.0 },
    { day = 2, fraction = 0.53 },
    { day = 4, fraction = 0.27 },
    { day = 8, fraction = 0.17 },
    { day = 15, fraction = 0.06 },
]

[variants.retention.new]
kind = "exponential"
r0 = 0.58
k = 0.12

[sale]
start_day = 15
end_day = 24
boost = 0.01
"#;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = SimulationConfig::from_toml("").unwrap();

    assert_eq!(config.simulation.horizon_days, 30);
    assert_eq!(config.simulation.arppu, 5.0);
    assert_eq!(config.simulation.report_days, vec![15, 30]);
    assert!(!config.simulation.parallel);
    assert_eq!(config.observability.log_level, "info");
    assert!(config.sources.is_empty());
    assert!(config.variants.is_empty());
    assert!(config.sale.is_none());
}

#[test]
fn config_parses_full_scenario() {
    let config = SimulationConfig::from_toml(AB_SCENARIO).unwrap();
    config.validate().unwrap();

    assert_eq!(config.sources.len(), 2);
    let variant = &config.variants[0];
    assert_eq!(variant.name, "A");
    assert_eq!(variant.ecpm, 9.80);

    match &variant.retention["original"] {
        RetentionSpec::PointTable { points } => {
            assert_eq!(points.len(), 5);
            assert_eq!(points[1], RetentionPoint::new(2, 0.53));
        }
        other => panic!("expected point table, got {other:?}"),
    }
    assert_eq!(
        variant.retention["new"],
        RetentionSpec::Exponential { r0: 0.58, k: 0.12 }
    );

    let sale = config.sale.unwrap();
    assert_eq!((sale.start_day, sale.end_day), (15, 24));
    assert_eq!(sale.len_days(), 10);
}

#[test]
fn config_partial_toml_keeps_defaults() {
    let config = SimulationConfig::from_toml(
        r#"
[simulation]
horizon_days = 60
"#,
    )
    .unwrap();
    assert_eq!(config.simulation.horizon_days, 60);
    assert_eq!(config.simulation.arppu, 5.0);
    assert_eq!(config.simulation.report_days, vec![15, 30]);
}

#[test]
fn source_segments_expand_to_horizon() {
    let config = SimulationConfig::from_toml(AB_SCENARIO).unwrap();
    let original = config.sources[0].expand(30);
    assert_eq!(original.len(), 30);
    assert!(original[..19].iter().all(|&n| n == 20_000));
    assert!(original[19..].iter().all(|&n| n == 12_000));

    // Shorter horizon truncates, longer horizon pads with zeros.
    assert_eq!(config.sources[1].expand(5), vec![0; 5]);
    let padded = config.sources[0].expand(35);
    assert_eq!(padded.len(), 35);
    assert_eq!(padded[30..], [0; 5]);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = SimulationConfig::from_toml("[simulation\nhorizon_days = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn negative_ecpm_fails_validation() {
    let toml = AB_SCENARIO.replace("ecpm = 9.80", "ecpm = -1.0");
    let config = SimulationConfig::from_toml(&toml).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        SimError::Configuration(ConfigurationError::InvalidParameter { .. })
    ));
    assert!(err.to_string().contains("A.ecpm"));
}

#[test]
fn unknown_source_reference_fails_validation() {
    let toml = AB_SCENARIO.replace("[variants.retention.new]", "[variants.retention.organic]");
    let config = SimulationConfig::from_toml(&toml).unwrap();
    let err = config.validate().unwrap_err();
    match err {
        SimError::Configuration(ConfigurationError::UnknownSource {
            variant,
            source_name,
        }) => {
            assert_eq!(variant, "A");
            assert_eq!(source_name, "organic");
        }
        other => panic!("expected UnknownSource, got {other:?}"),
    }
}

#[test]
fn missing_retention_for_source_fails_validation() {
    let toml = AB_SCENARIO.replace(
        "[variants.retention.new]\nkind = \"exponential\"\nr0 = 0.58\nk = 0.12\n",
        "",
    );
    let config = SimulationConfig::from_toml(&toml).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        SimError::Config(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn zero_horizon_fails_validation() {
    let config = SimulationConfig::from_toml("[simulation]\nhorizon_days = 0\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("simulation.horizon_days"));
}

#[test]
fn inverted_sale_window_fails_validation() {
    let toml = AB_SCENARIO.replace("end_day = 24", "end_day = 10");
    let config = SimulationConfig::from_toml(&toml).unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        SimError::Configuration(ConfigurationError::InvalidSaleWindow {
            start_day: 15,
            end_day: 10
        })
    ));
}

#[test]
fn load_reports_missing_file() {
    let err = SimulationConfig::load(std::path::Path::new("/nonexistent/cohortsim.toml"))
        .unwrap_err();
    assert!(matches!(
        err,
        SimError::Config(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn config_serde_roundtrip() {
    let config = SimulationConfig::from_toml(AB_SCENARIO).unwrap();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = SimulationConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.variants, config.variants);
    assert_eq!(roundtripped.sources, config.sources);
    assert_eq!(roundtripped.sale, config.sale);
}
