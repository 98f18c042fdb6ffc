use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.identity_api_url, None);
    assert_eq!(
        cfg.identity_timeouts,
        IdentityTimeouts {
            request_secs: DEFAULT_IDENTITY_TIMEOUT_SECS,
            connect_secs: DEFAULT_IDENTITY_CONNECT_TIMEOUT_SECS
        }
    );
}

#[test]
fn parses_overrides_and_trims_base_url() {
    let cfg = Config::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("IDENTITY_API_URL", "https://identity.example.test/v1/"),
        ("IDENTITY_TIMEOUT_SECS", "30"),
        ("IDENTITY_CONNECT_TIMEOUT_SECS", " 2 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.identity_api_url.as_deref(), Some("https://identity.example.test/v1"));
    assert_eq!(cfg.identity_timeouts, IdentityTimeouts { request_secs: 30, connect_secs: 2 });
}

#[test]
fn blank_base_url_counts_as_unset() {
    let cfg = Config::from_lookup(lookup(&[("IDENTITY_API_URL", "  ")])).unwrap();
    assert_eq!(cfg.identity_api_url, None);
}

#[test]
fn invalid_number_names_the_variable() {
    let err = Config::from_lookup(lookup(&[("IDENTITY_TIMEOUT_SECS", "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "IDENTITY_TIMEOUT_SECS", value: "soon".to_owned() });

    let err = Config::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn from_env_reads_process_environment() {
    let key = "IDENTITY_CONNECT_TIMEOUT_SECS";
    unsafe { std::env::set_var(key, "9") };
    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.identity_timeouts.connect_secs, 9);
    unsafe { std::env::remove_var(key) };
}
