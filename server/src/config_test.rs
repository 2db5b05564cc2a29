use super::*;
use std::collections::HashMap;

fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
    let env: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn empty_environment_uses_defaults() {
    let config = config_from(&[]);
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.db_max_connections, 5);
    assert_eq!(config.waitlist_source, "coming-soon-page");
    assert!(config.database_url.is_none());
}

#[test]
fn reads_every_setting() {
    let config = config_from(&[
        ("PORT", "8080"),
        ("DATABASE_URL", "postgres://localhost/fillflow"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("SITE_DIR", "/srv/site"),
        ("CORS_ALLOW_ORIGIN", "https://fillflow.example"),
        ("WAITLIST_SOURCE", "landing"),
    ]);
    assert_eq!(config.port, 8080);
    assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/fillflow"));
    assert_eq!(config.db_max_connections, 12);
    assert_eq!(config.site_dir, Some(PathBuf::from("/srv/site")));
    assert_eq!(config.cors_allow_origin.as_deref(), Some("https://fillflow.example"));
    assert_eq!(config.waitlist_source, "landing");
}

#[test]
fn invalid_numbers_fall_back_to_defaults() {
    let config = config_from(&[("PORT", "http"), ("DB_MAX_CONNECTIONS", "-1")]);
    assert_eq!(config.port, 3000);
    assert_eq!(config.db_max_connections, 5);
}

#[test]
fn blank_values_and_wildcard_origin_count_as_unset() {
    let config = config_from(&[("DATABASE_URL", "  "), ("CORS_ALLOW_ORIGIN", "*"), ("WAITLIST_SOURCE", "")]);
    assert!(config.database_url.is_none());
    assert!(config.cors_allow_origin.is_none());
    assert_eq!(config.waitlist_source, "coming-soon-page");
}
