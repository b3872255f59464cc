use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "BHANDARA_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_path.to_str(), Some("./data/bhandaras.json"));
    assert_eq!(cfg.registration_recipient, "rajuyadav@gmail.com");
    assert_eq!(cfg.geolocate_url, "http://ip-api.com/json/");
    assert_eq!(cfg.geolocate_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "bhandara/0.1 (location-discovery)");
    assert_eq!(cfg.rate_limit_per_minute, 120);
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("BHANDARA_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BHANDARA_BIND_ADDR"),
        "expected InvalidEnvVar(BHANDARA_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_catalog_path_override() {
    let mut map = HashMap::new();
    map.insert("BHANDARA_CATALOG_PATH", "/srv/bhandara/catalog.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.catalog_path.to_str(), Some("/srv/bhandara/catalog.yaml"));
}

#[test]
fn build_app_config_rejects_recipient_without_at_sign() {
    let mut map = HashMap::new();
    map.insert("BHANDARA_REGISTRATION_RECIPIENT", "not-an-address");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BHANDARA_REGISTRATION_RECIPIENT"),
        "expected InvalidEnvVar(BHANDARA_REGISTRATION_RECIPIENT), got: {result:?}"
    );
}

#[test]
fn build_app_config_geolocate_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("BHANDARA_GEOLOCATE_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BHANDARA_GEOLOCATE_TIMEOUT_SECS"),
        "expected InvalidEnvVar(BHANDARA_GEOLOCATE_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rate_limit_override() {
    let mut map = HashMap::new();
    map.insert("BHANDARA_RATE_LIMIT_PER_MINUTE", "30");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.rate_limit_per_minute, 30);
}

#[test]
fn build_app_config_rate_limit_zero_rejected() {
    let mut map = HashMap::new();
    map.insert("BHANDARA_RATE_LIMIT_PER_MINUTE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BHANDARA_RATE_LIMIT_PER_MINUTE"),
        "expected InvalidEnvVar(BHANDARA_RATE_LIMIT_PER_MINUTE), got: {result:?}"
    );
}
