use super::*;

// =============================================================================
// from_values
// =============================================================================

#[test]
fn from_values_uses_defaults_when_unset() {
    let cfg = AppConfig::from_values(None, None, None).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.api_base_url, "http://localhost:8080");
    assert_eq!(cfg.status_timeout_ms, DEFAULT_STATUS_TIMEOUT_MS);
    assert_eq!(cfg.app_name, "Vibed Traveller");
}

#[test]
fn from_values_treats_empty_strings_as_unset() {
    let cfg = AppConfig::from_values(Some(""), Some("  "), Some("")).unwrap();
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn from_values_trims_trailing_slashes_from_api_url() {
    let cfg = AppConfig::from_values(Some("https://api.example.test//"), None, None).unwrap();
    assert_eq!(cfg.api_base_url, "https://api.example.test");
}

#[test]
fn from_values_keeps_path_prefix_on_api_url() {
    let cfg = AppConfig::from_values(Some("https://example.test/backend/"), None, None).unwrap();
    assert_eq!(cfg.api_base_url, "https://example.test/backend");
}

#[test]
fn from_values_rejects_unparsable_api_url() {
    let err = AppConfig::from_values(Some("not a url"), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidApiUrl { ref value, .. } if value == "not a url"));
}

#[test]
fn from_values_rejects_non_http_scheme() {
    let err = AppConfig::from_values(Some("ftp://example.test"), None, None).unwrap_err();
    assert!(err.to_string().contains("unsupported scheme 'ftp'"));
}

#[test]
fn from_values_parses_environment_case_insensitively() {
    let dev = AppConfig::from_values(None, Some("Development"), None).unwrap();
    assert_eq!(dev.environment, Environment::Development);
    let prod = AppConfig::from_values(None, Some("PROD"), None).unwrap();
    assert_eq!(prod.environment, Environment::Production);
}

#[test]
fn from_values_rejects_unknown_environment() {
    let err = AppConfig::from_values(None, Some("staging"), None).unwrap_err();
    assert_eq!(err, ConfigError::UnknownEnvironment("staging".to_owned()));
}

#[test]
fn from_values_parses_timeout() {
    let cfg = AppConfig::from_values(None, None, Some("2500")).unwrap();
    assert_eq!(cfg.status_timeout_ms, 2500);
}

#[test]
fn from_values_rejects_zero_or_garbage_timeout() {
    for raw in ["0", "-5", "soon"] {
        let err = AppConfig::from_values(None, None, Some(raw)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidTimeout(raw.to_owned()), "raw={raw:?}");
    }
}

// =============================================================================
// environment_info
// =============================================================================

#[test]
fn environment_info_development_flags_are_exclusive() {
    let cfg = AppConfig::from_values(None, Some("development"), None).unwrap();
    let info = cfg.environment_info();
    assert!(info.is_development);
    assert!(!info.is_production);
    assert_eq!(info.mode, Environment::Development);
    assert!(info.description.starts_with("Development mode"));
    assert!(cfg.is_development());
}

#[test]
fn environment_info_production_flags_are_exclusive() {
    let cfg = AppConfig::from_values(None, Some("production"), None).unwrap();
    let info = cfg.environment_info();
    assert!(!info.is_development);
    assert!(info.is_production);
    assert_eq!(info.mode.as_str(), "production");
    assert!(info.description.contains("baked in at build time"));
    assert!(!cfg.is_development());
}

#[test]
fn environment_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Environment::Production).unwrap(), "\"production\"");
}
