// File: crates/pulse-core/tests/config_json.rs
// Purpose: Saved session choices load into ChartConfig with defaults for missing keys.

use pulse_core::{ChartConfig, DynamicLabelSize, LabelPosition};

#[test]
fn partial_session_json_keeps_defaults() {
    let json = r#"{
        "viewRange": 20,
        "rollingAverage": 4,
        "useRollingAverage": true,
        "dynamicLabelSize": "ushaped",
        "labelPosition": "side",
        "XAxisInverseStatic": true
    }"#;
    let cfg: ChartConfig = serde_json::from_str(json).expect("parse config");
    assert_eq!(cfg.view_range, 20);
    assert_eq!(cfg.rolling_average_window, 4);
    assert!(cfg.use_rolling_average);
    assert!(cfg.x_axis_inverse_static);
    assert_eq!(cfg.dynamic_label_size, DynamicLabelSize::UShaped);
    assert_eq!(cfg.label_position, LabelPosition::Side);
    assert_eq!(cfg.width, 700);
    assert!(cfg.show_threshold);
}

#[test]
fn empty_object_is_default() {
    let cfg: ChartConfig = serde_json::from_str("{}").expect("parse config");
    assert_eq!(cfg, ChartConfig::default());
}

#[test]
fn serializes_camel_case() {
    let json = serde_json::to_value(ChartConfig::default()).expect("to json");
    assert_eq!(json["viewRange"], 10);
    assert_eq!(json["rollingAverageWindow"], 5);
    assert_eq!(json["labelPosition"], "follow");
    assert_eq!(json["dynamicLabelSize"], "none");
}

#[test]
fn unknown_label_position_is_rejected() {
    let err = serde_json::from_str::<ChartConfig>(r#"{"labelPosition": "floating"}"#);
    assert!(err.is_err());
}
