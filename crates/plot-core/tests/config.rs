// File: crates/plot-core/tests/config.rs
// Purpose: JSON configuration defaults and validation when building a plotter.

use plot_core::{PlotConfig, PlotError, Plotter};

#[test]
fn empty_json_yields_defaults() {
    let cfg = PlotConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, PlotConfig::default());
    assert_eq!((cfg.width, cfg.height), (600, 400));
    assert_eq!(cfg.function_str, "sin(x)");
}

#[test]
fn camel_case_keys_override_defaults() {
    let cfg = PlotConfig::from_json_str(r#"{ "xMin": -5, "yMax": 2.5, "functionStr": "Math.sin(x)", "theme": "dark" }"#)
        .unwrap();
    assert_eq!(cfg.x_min, -5.0);
    assert_eq!(cfg.x_max, 10.0);
    assert_eq!(cfg.y_max, 2.5);
    assert_eq!(cfg.theme().name, "dark");

    let p = Plotter::new(cfg).unwrap();
    assert_eq!(p.committed().source(), "Math.sin(x)");
}

#[test]
fn malformed_json_is_a_config_error() {
    assert!(matches!(PlotConfig::from_json_str("{ width: 3 }"), Err(PlotError::Config(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(PlotConfig::from_path("does/not/exist.json"), Err(PlotError::Io(_))));
}

#[test]
fn invalid_settings_are_rejected_at_build() {
    let bad_fn = PlotConfig { function_str: "sin(".into(), ..PlotConfig::default() };
    assert!(matches!(Plotter::new(bad_fn), Err(PlotError::InvalidFunction(_))));

    let bad_range = PlotConfig { x_min: 3.0, x_max: -3.0, ..PlotConfig::default() };
    assert!(matches!(Plotter::new(bad_range), Err(PlotError::Viewport(_))));

    let bad_canvas = PlotConfig { height: 0, ..PlotConfig::default() };
    assert!(matches!(Plotter::new(bad_canvas), Err(PlotError::InvalidCanvas { width: 600, height: 0 })));
}

#[test]
fn config_round_trips_through_json() {
    let cfg = PlotConfig { width: 320, function_str: "x^2".into(), ..PlotConfig::default() };
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"functionStr\":\"x^2\""));
    assert_eq!(PlotConfig::from_json_str(&json).unwrap(), cfg);
}
