use std::time::Duration;

use clap::Parser;
use serial_test::serial;

use crate::clickup::DEFAULT_BASE_URL;
use crate::config::*;

fn clear_env() {
    // SAFETY: tests touching the environment run serially.
    unsafe {
        std::env::remove_var(TOKEN_ENV);
        std::env::remove_var("CLICKUP_API_URL");
        std::env::remove_var("CLICKUP_TIMEOUT_SECS");
    }
}

#[test]
#[serial]
fn test_missing_token_is_missing_credential() {
    clear_env();
    let cli = Cli::parse_from(["clickup-operator"]);

    assert_eq!(cli.client_config(), Err(ConfigError::MissingCredential));
}

#[test]
#[serial]
fn test_blank_token_is_missing_credential() {
    clear_env();
    let cli = Cli::parse_from(["clickup-operator", "--token", "   "]);

    assert_eq!(cli.client_config(), Err(ConfigError::MissingCredential));
}

#[test]
#[serial]
fn test_token_from_environment() {
    clear_env();
    unsafe {
        std::env::set_var(TOKEN_ENV, "pk_env_token");
    }

    let cli = Cli::parse_from(["clickup-operator"]);
    let config = cli.client_config().expect("token should be picked up");

    assert_eq!(config.token, "pk_env_token");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    clear_env();
}

#[test]
#[serial]
fn test_defaults() {
    clear_env();
    let cli = Cli::parse_from(["clickup-operator", "--token", "pk_1"]);

    assert_eq!(cli.transport, Transport::Stdio);
    assert_eq!(cli.port, 3737);

    let config = cli.client_config().unwrap();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.pool_size, 4);
}

#[test]
#[serial]
fn test_explicit_flags_override_defaults() {
    clear_env();
    let cli = Cli::parse_from([
        "clickup-operator",
        "--token",
        "pk_1",
        "--base-url",
        "http://127.0.0.1:9999/api/v2",
        "--timeout-secs",
        "5",
        "--transport",
        "http",
    ]);

    assert_eq!(cli.transport, Transport::Http);
    let config = cli.client_config().unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:9999/api/v2");
    assert_eq!(config.timeout, Duration::from_secs(5));
}

#[test]
#[serial]
fn test_zero_timeout_is_rejected() {
    clear_env();
    let cli = Cli::parse_from(["clickup-operator", "--token", "pk_1", "--timeout-secs", "0"]);

    assert!(matches!(
        cli.client_config(),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
fn test_client_config_builder() {
    let config = ClientConfig::new("pk_x").with_base_url("http://localhost:1/api/v2");
    assert_eq!(config.token, "pk_x");
    assert_eq!(config.base_url, "http://localhost:1/api/v2");
}
