use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = PortalConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
}

#[test]
fn overrides_are_parsed() {
    let cfg = PortalConfig::from_lookup(lookup(&[
        ("PORT", "8081"),
        ("BACKEND_URL", "https://api.escuela.test/"),
        ("PROXY_TIMEOUT_SECS", " 12 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.backend_url, "https://api.escuela.test");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(12));
}

#[test]
fn blank_backend_url_falls_back_to_default() {
    let cfg = PortalConfig::from_lookup(lookup(&[("BACKEND_URL", "  ")])).unwrap();
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn invalid_port_errors() {
    let err = PortalConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    assert!(err.to_string().contains("invalid PORT"));
}

#[test]
fn backend_url_requires_http_scheme() {
    for bad in ["localhost:8080", "ftp://files.test", "not a url"] {
        let err = PortalConfig::from_lookup(lookup(&[("BACKEND_URL", bad)])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "BACKEND_URL", .. }), "accepted {bad:?}");
    }
}

#[test]
fn zero_timeout_errors() {
    let err = PortalConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PROXY_TIMEOUT_SECS", .. }));
}
