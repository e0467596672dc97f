use super::*;

#[test]
fn not_found_display_names_selector() {
    let err = HookError::not_found("#bind-to-bounty");
    assert_eq!(err.to_string(), "element not found: #bind-to-bounty");
    assert!(matches!(err, HookError::ElementNotFound { .. }));
}

#[test]
fn state_read_display_includes_reason() {
    let err = HookError::state_read("#repository_name", "not an input");
    assert_eq!(err.to_string(), "failed to read #repository_name: not an input");
    assert!(matches!(err, HookError::StateRead { .. }));
}

#[test]
fn config_error_converts_from_serde_json() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: HookError = parse.into();
    assert!(matches!(err, HookError::Config(_)));
    assert!(err.to_string().starts_with("invalid page config:"));
}

#[test]
fn invalid_checkbox_id_display_quotes_id() {
    let err = HookError::InvalidCheckboxId("opt\"in".to_owned());
    assert_eq!(
        err.to_string(),
        r#"invalid checkbox id "opt\"in": expected letters, digits, '-' or '_'"#
    );
}
