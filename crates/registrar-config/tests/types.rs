use registrar_config::*;

use proptest::prelude::*;

#[test]
fn test_app_config_default() {
    let config = AppConfig::default();
    assert_eq!(config.server.bind_address(), "127.0.0.1:8000");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Compact);
    assert_eq!(config.auth.bcrypt_cost, 12);
    assert!(config.auth.bootstrap_admin.is_none());
    assert!(!config.demo.seed);
}

#[test]
fn test_config_validation() {
    let manager = ConfigManager::new();
    let mut config = AppConfig::default();
    assert!(manager.validate_config(&config).is_ok());

    config.logging.level = "loud".to_string();
    assert!(manager.validate_config(&config).is_err());

    config.logging.level = "DEBUG".to_string();
    assert!(manager.validate_config(&config).is_ok());

    config.auth.bcrypt_cost = 3;
    assert!(matches!(
        manager.validate_config(&config),
        Err(ConfigError::Invalid {
            key: "auth.bcrypt_cost",
            ..
        })
    ));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let mut manager = ConfigManager::with_path(dir.path().join("absent.toml"))
        .with_env_prefix("REGISTRAR_TEST_MISSING");

    assert_eq!(manager.load_config().unwrap(), AppConfig::default());
}

#[test]
fn test_malformed_file_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = \"not a port\"\n").unwrap();

    let mut manager = ConfigManager::with_path(path).with_env_prefix("REGISTRAR_TEST_MALFORMED");
    assert!(matches!(manager.load_config(), Err(ConfigError::Load(_))));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[server]\nport = 9100\n\n[logging]\nformat = \"json\"\n",
    )
    .unwrap();

    let mut manager =
        ConfigManager::with_path(path).with_env_prefix("REGISTRAR_TEST_PARTIAL");
    let config = manager.load_config().unwrap();

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_bootstrap_admin_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[auth]\nbootstrap_admin = \"registrar\"\n").unwrap();

    let mut manager = ConfigManager::with_path(path).with_env_prefix("REGISTRAR_TEST_BOOTSTRAP");
    let mut config = manager.load_config().unwrap();
    assert_eq!(config.auth.bootstrap_admin.as_deref(), Some("registrar"));
    assert_eq!(config.auth.bcrypt_cost, 12);
    assert!(manager.validate_config(&config).is_ok());

    config.auth.bootstrap_admin = Some("  ".to_string());
    assert!(matches!(
        manager.validate_config(&config),
        Err(ConfigError::Invalid {
            key: "auth.bootstrap_admin",
            ..
        })
    ));
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let mut manager = ConfigManager::with_path(path.clone()).with_env_prefix("REGISTRAR_TEST_SAVE");

    let mut config = AppConfig::default();
    config.server.host = "0.0.0.0".to_string();
    config.demo.seed = true;
    manager.save_config(&config).unwrap();

    assert!(path.exists());
    assert_eq!(manager.load_config().unwrap(), config);
}

#[test]
fn test_environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nport = 9100\n").unwrap();

    std::env::set_var("REGISTRAR_TEST_ENV_SERVER__PORT", "9200");
    let mut manager = ConfigManager::with_path(path).with_env_prefix("REGISTRAR_TEST_ENV");
    let config = manager.load_config().unwrap();
    std::env::remove_var("REGISTRAR_TEST_ENV_SERVER__PORT");

    assert_eq!(config.server.port, 9200);
}

proptest! {
    #[test]
    fn prop_bcrypt_cost_bounds(cost in 0u32..64) {
        let mut config = AppConfig::default();
        config.auth.bcrypt_cost = cost;
        let valid = ConfigManager::new().validate_config(&config).is_ok();
        prop_assert_eq!(valid, (4..=31).contains(&cost));
    }
}
