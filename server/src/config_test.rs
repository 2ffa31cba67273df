use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.site_dir, PathBuf::from("dist"));
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn overrides_are_applied() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8081"),
        ("SITE_DIR", "/srv/traveller"),
        ("LOG_LEVEL", "debug,tower_http=trace"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.site_dir, PathBuf::from("/srv/traveller"));
    assert_eq!(cfg.log_level, "debug,tower_http=trace");
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:8081");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("LOG_LEVEL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["http", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(raw.to_owned()));
    }
}
