use faultline_core::config::*;
use faultline_core::errors::{ConfigError, FaultlineError};
use faultline_core::models::{Dimension, LabId};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = FaultlineConfig::from_toml("").unwrap();

    assert_eq!(config.scoring.validity_window_days, 180);
    assert_eq!(config.scoring.min_total, 0.0);
    assert_eq!(config.scoring.max_total, 10.0);
    for dimension in Dimension::ALL {
        assert_eq!(config.scoring.dimension_caps.cap(dimension), 2.0);
    }

    assert_eq!(config.trend.threshold, 0.2);
    assert_eq!(config.trend.lookback, TrendLookback::PreviousRun);

    assert_eq!(config.data.events_path, "docs/data/events.json");
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);

    let ids: Vec<&str> = config.labs.ids().map(LabId::as_str).collect();
    assert_eq!(ids, ["openai", "anthropic", "deepmind", "xai", "meta"]);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[scoring]
validity_window_days = 90

[scoring.dimension_caps]
compute_chips = 5.0

[trend]
lookback = { days = 30 }
"#;
    let config = FaultlineConfig::from_toml(toml).unwrap();
    assert_eq!(config.scoring.validity_window_days, 90);
    assert_eq!(config.scoring.dimension_caps.compute_chips, 5.0);
    // Non-overridden fields keep defaults
    assert_eq!(config.scoring.dimension_caps.cloud, 2.0);
    assert_eq!(config.trend.lookback, TrendLookback::Days(30));
    assert_eq!(config.trend.threshold, 0.2);
}

#[test]
fn trailing_mean_lookback_parses() {
    let config = FaultlineConfig::from_toml("[trend]\nlookback = { trailing_mean = 3 }\n").unwrap();
    assert_eq!(config.trend.lookback, TrendLookback::TrailingMean(3));
}

#[test]
fn custom_lab_set_replaces_defaults() {
    let toml = r#"
[[labs]]
id = "mistral"
name = "Mistral AI"
founded = "2023-04-01"

[[labs]]
id = "cohere"
name = "Cohere"
"#;
    let config = FaultlineConfig::from_toml(toml).unwrap();
    assert_eq!(config.labs.len(), 2);
    let mistral = config.labs.get(&LabId::new("mistral")).unwrap();
    assert_eq!(mistral.founded.unwrap().to_string(), "2023-04-01");
    assert!(config.labs.get(&LabId::new("cohere")).unwrap().founded.is_none());
}

#[test]
fn config_serde_roundtrip() {
    let config = FaultlineConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = FaultlineConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn invalid_values_are_rejected() {
    let cases = [
        "[scoring]\nvalidity_window_days = 0\n",
        "[scoring]\nmin_total = 11.0\n",
        "[scoring.dimension_caps]\ncloud = -1.0\n",
        "[trend]\nthreshold = -0.1\n",
        "[trend]\nlookback = { days = 0 }\n",
        "[scoring]\nvalidity_window_days = 100000000\n",
        "[trend]\nlookback = { days = 4000000000 }\n",
        "[[labs]]\nid = \"a\"\nname = \"A\"\n[[labs]]\nid = \"a\"\nname = \"A again\"\n",
    ];
    for case in cases {
        let err = FaultlineConfig::from_toml(case).unwrap_err();
        assert!(
            matches!(err, FaultlineError::ConfigError(ConfigError::InvalidValue { .. })),
            "expected InvalidValue for {case:?}, got {err:?}"
        );
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = FaultlineConfig::from_toml("[scoring\n").unwrap_err();
    assert!(matches!(
        err,
        FaultlineError::ConfigError(ConfigError::ParseError { .. })
    ));
}

#[test]
fn window_and_lookback_upper_bounds_are_inclusive() {
    let max = defaults::MAX_WINDOW_DAYS;
    let at_max = format!(
        "[scoring]\nvalidity_window_days = {max}\n[trend]\nlookback = {{ days = {max} }}\n"
    );
    let config = FaultlineConfig::from_toml(&at_max).unwrap();
    assert_eq!(config.scoring.validity_window_days, max);

    let over = format!("[scoring]\nvalidity_window_days = {}\n", max + 1);
    assert!(FaultlineConfig::from_toml(&over).is_err());
}
