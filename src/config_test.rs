use super::*;

#[test]
fn defaults_match_shipped_page() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.min_input_chars, 10);
    assert_eq!(cfg.submit_delay_ms, 600);
    assert_eq!(cfg.invalid_border, "#dc2626");
    assert_eq!(cfg.valid_border, "var(--primary)");
    assert_eq!(cfg.idle_label, "Analisar");
    assert_eq!(cfg.loading_label, "Processando...");
    assert_eq!(cfg.upload_placeholder, "Selecionar arquivo");
    assert_eq!(cfg.reveal_transition, "all 0.35s ease");
    assert_eq!(cfg.reveal_offset_px, 8);
    assert!(cfg.validate().is_ok());
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn from_json_overrides_only_given_fields() {
    let cfg = PageConfig::from_json(r#"{ "submit_delay_ms": 250, "idle_label": "Analyze" }"#).unwrap();
    assert_eq!(cfg.submit_delay_ms, 250);
    assert_eq!(cfg.idle_label, "Analyze");
    assert_eq!(cfg.loading_label, "Processando...");
    assert_eq!(cfg.min_input_chars, 10);
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = PageConfig::from_json(r#"{ "submit_delay": 250 }"#).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn from_json_rejects_malformed_payload() {
    assert!(PageConfig::from_json("not json").is_err());
}

#[test]
fn validate_rejects_zero_delay() {
    let err = PageConfig::from_json(r#"{ "submit_delay_ms": 0 }"#).unwrap_err();
    assert!(err.to_string().contains("submit_delay_ms"));
}

#[test]
fn validate_rejects_blank_labels() {
    let err = PageConfig::from_json(r#"{ "loading_label": "   " }"#).unwrap_err();
    assert!(err.to_string().contains("loading_label"));
}
