use super::*;

#[test]
fn blank_input_yields_defaults() {
    let cfg = DashboardConfig::from_json("  \n").unwrap();
    assert_eq!(cfg, DashboardConfig::default());
}

#[test]
fn defaults_match_stock_dashboard() {
    let cfg = DashboardConfig::default();
    assert_eq!(cfg.storage_key, "theme");
    assert_eq!(cfg.refresh_interval_ms, 30_000);
    assert_eq!(cfg.theme_transition_ms, 300);
    assert_eq!(cfg.entry_stagger_ms, 100);
    assert_eq!(cfg.toast, ToastTiming { enter_delay_ms: 100, visible_ms: 3_000, exit_ms: 300 });
    assert_eq!(cfg.labels.switch_to_light, "Modo Claro");
    assert_eq!(cfg.labels.switch_to_dark, "Modo Escuro");
    assert!(!cfg.debug);
}

#[test]
fn partial_object_keeps_remaining_defaults() {
    let cfg = DashboardConfig::from_json(r#"{"refresh_interval_ms": 5000, "labels": {"store": "Store"}}"#).unwrap();
    assert_eq!(cfg.refresh_interval_ms, 5_000);
    assert_eq!(cfg.labels.store, "Store");
    assert_eq!(cfg.labels.price, "Preço");
    assert_eq!(cfg.storage_key, DEFAULT_STORAGE_KEY);
    assert_eq!(cfg.toast, ToastTiming::default());
}

#[test]
fn nested_toast_override() {
    let cfg = DashboardConfig::from_json(r#"{"toast": {"visible_ms": 5000}, "debug": true}"#).unwrap();
    assert_eq!(cfg.toast.visible_ms, 5_000);
    assert_eq!(cfg.toast.enter_delay_ms, DEFAULT_TOAST_ENTER_DELAY_MS);
    assert_eq!(cfg.toast.lifetime_ms(), 5_300);
    assert!(cfg.debug);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = DashboardConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_refresh_interval_is_rejected() {
    let err = DashboardConfig::from_json(r#"{"refresh_interval_ms": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("refresh_interval_ms")));
}

#[test]
fn empty_storage_key_is_rejected() {
    let err = DashboardConfig::from_json(r#"{"storage_key": " "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn enter_delay_must_precede_exit() {
    let err = DashboardConfig::from_json(r#"{"toast": {"enter_delay_ms": 4000}}"#).unwrap_err();
    assert!(err.to_string().contains("enter_delay_ms"));
}

#[test]
fn lifetime_saturates() {
    let timing = ToastTiming { enter_delay_ms: 0, visible_ms: u32::MAX, exit_ms: 10 };
    assert_eq!(timing.lifetime_ms(), u32::MAX);
}
