mod common;

use common::temp_config;
use portfolio_cms::config::{Config, ConfigError, DeletePolicy};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, "http://localhost:3000/api");
    assert_eq!(config.api.timeout_seconds, 30);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.resources.delete_policy, DeletePolicy::Idempotent);
}

#[test]
fn full_file_is_parsed() {
    let (_dir, path) = temp_config(
        r#"
[api]
base_url = "https://nhan.dev/api"
timeout_seconds = 10
api_key = "token"

[auth]
admin_email = "admin@nhan.dev"

[resources]
delete_policy = "strict"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api.base_url, "https://nhan.dev/api");
    assert_eq!(config.api.timeout_seconds, 10);
    assert_eq!(config.api.connect_timeout_seconds, 5);
    assert_eq!(config.api.api_key.as_deref(), Some("token"));
    assert_eq!(config.auth.admin_email.as_deref(), Some("admin@nhan.dev"));
    assert_eq!(config.resources.delete_policy, DeletePolicy::Strict);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config("[auth]\nadmin_email = \"me@example.com\"\n");

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.api, Config::default().api);
    assert_eq!(config.auth.admin_email.as_deref(), Some("me@example.com"));
}

#[test]
fn malformed_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\nbase_url = ");

    let err = Config::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn unknown_delete_policy_is_parse_error() {
    let (_dir, path) = temp_config("[resources]\ndelete_policy = \"sometimes\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn invalid_values_fail_validation() {
    let (_dir, path) = temp_config("[api]\nbase_url = \"ftp://nhan.dev\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));

    let (_dir, path) = temp_config("[api]\ntimeout_seconds = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));

    let (_dir, path) = temp_config("[auth]\nadmin_email = \"not-an-email\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
