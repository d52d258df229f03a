use sitegate_domain::config::ConfigError;
use sitegate_domain::Config;

#[test]
fn test_default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.server.web_port, 8085);
    assert_eq!(config.usage.daily_limit_ms, 300_000);
    assert_eq!(config.legacy.sites.len(), 3);
    assert!(config.scheduler.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config = Config::from_toml_str(
        r#"
        [usage]
        daily_limit_ms = 600000
        timezone = "Europe/Lisbon"

        [legacy]
        sites = ["reddit.com"]
        "#,
    )
    .unwrap();

    assert_eq!(config.usage.daily_limit_ms, 600_000);
    assert_eq!(config.legacy.sites, vec!["reddit.com".to_string()]);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.database.path, "./sitegate.db");
    assert!(config.validate().is_ok());
    assert!(config.usage.time_zone().unwrap().is_some());
}

#[test]
fn test_rejects_zero_daily_limit() {
    let config = Config::from_toml_str("[usage]\ndaily_limit_ms = 0\n").unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_rejects_unknown_timezone() {
    let config = Config::from_toml_str("[usage]\ntimezone = \"Mars/Olympus\"\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_invalid_legacy_host() {
    let config = Config::from_toml_str("[legacy]\nsites = [\"x.com/path\"]\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_rejects_malformed_toml() {
    assert!(matches!(
        Config::from_toml_str("[usage\n"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_save_round_trip() {
    let path = std::env::temp_dir().join(format!("sitegate-config-{}.toml", std::process::id()));
    let path = path.to_str().unwrap().to_string();

    let mut config = Config::default();
    config.usage.daily_limit_ms = 120_000;
    config.save(&path).unwrap();

    let loaded = Config::load(Some(&path), Default::default()).unwrap();
    assert_eq!(loaded.usage.daily_limit_ms, 120_000);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_optional_server_and_database_settings() {
    let config = Config::from_toml_str(
        r#"
        [server]
        api_key = "s3cret"

        [database]
        wal_checkpoint_interval_secs = 0
        "#,
    )
    .unwrap();

    assert_eq!(config.server.api_key.as_deref(), Some("s3cret"));
    assert_eq!(config.server.web_port, 8085);
    assert_eq!(config.database.wal_checkpoint_interval_secs, 0);
    assert_eq!(config.database.busy_timeout_secs, 30);
    assert!(Config::default().server.api_key.is_none());
}
