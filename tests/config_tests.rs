use std::io::Write;
use std::time::Duration;

use simple_router::logging::{LogConfig, LogFormat};
use simple_router::{Params, Router, RouterConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_config_from_file() {
    let file = write_config(
        r#"
slow_match_us = 0x10

[logging]
level = "warn"
format = "pretty"
target_filter = "simple_router=trace"
include_location = true
"#,
    );
    let config = RouterConfig::from_file(file.path()).unwrap();
    assert_eq!(config.slow_match_us, 16);
    assert_eq!(config.slow_match_threshold(), Duration::from_micros(16));
    assert_eq!(
        config.logging,
        LogConfig {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
            target_filter: Some("simple_router=trace".to_string()),
            include_location: true,
        }
    );
    assert_eq!(config.logging.directives(), "warn,simple_router=trace");
}

#[test]
fn test_config_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("router.toml");
    let err = RouterConfig::from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("router.toml"));
}

#[test]
fn test_config_invalid_file() {
    let file = write_config("[logging]\nformat = \"xml\"\n");
    let err = RouterConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("invalid router configuration"));
}

#[test]
fn test_router_with_config() {
    let config = RouterConfig::from_toml_str("slow_match_us = 0").unwrap();
    let mut router: Router = Router::with_config(config.clone());
    router.get("/x", |_: &Params| "x".to_string()).unwrap();

    assert_eq!(router.config(), &config);
    // every match is "slow" at a zero threshold; dispatch is unaffected
    assert_eq!(router.dispatch("GET", "/x"), "x");
}

#[test]
fn test_default_router_config() {
    let router: Router = Router::default();
    assert_eq!(router.config(), &RouterConfig::default());
    assert_eq!(router.config().slow_match_us, 1000);
}

// The only test in this binary that touches ROUTER_* variables.
#[test]
fn test_config_from_env() {
    std::env::set_var("ROUTER_SLOW_MATCH_US", "0x1f4");
    std::env::set_var("ROUTER_LOG_LEVEL", "debug");
    std::env::set_var("ROUTER_LOG_FORMAT", "Pretty");
    std::env::set_var("ROUTER_LOG_TARGET_FILTER", "simple_router=trace");
    std::env::set_var("ROUTER_LOG_INCLUDE_LOCATION", "true");

    let config = RouterConfig::from_env();
    assert_eq!(config.slow_match_us, 500);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert_eq!(
        config.logging.target_filter.as_deref(),
        Some("simple_router=trace")
    );
    assert!(config.logging.include_location);

    std::env::set_var("ROUTER_SLOW_MATCH_US", "250");
    assert_eq!(RouterConfig::from_env().slow_match_us, 250);

    std::env::set_var("ROUTER_SLOW_MATCH_US", "not-a-number");
    std::env::set_var("ROUTER_LOG_INCLUDE_LOCATION", "maybe");
    let config = RouterConfig::from_env();
    assert_eq!(config.slow_match_us, 1000);
    assert!(!config.logging.include_location);

    for var in [
        "ROUTER_SLOW_MATCH_US",
        "ROUTER_LOG_LEVEL",
        "ROUTER_LOG_FORMAT",
        "ROUTER_LOG_TARGET_FILTER",
        "ROUTER_LOG_INCLUDE_LOCATION",
    ] {
        std::env::remove_var(var);
    }
    assert_eq!(RouterConfig::from_env(), RouterConfig::default());
    assert_eq!(LogConfig::from_env(), LogConfig::default());
}

#[test]
fn test_router_config_carries_logging_settings() {
    let config = RouterConfig::from_toml_str(
        "[logging]\nlevel = \"warn\"\ntarget_filter = \"simple_router=debug\"\n",
    )
    .unwrap();
    let router: Router = Router::with_config(config);
    let logging = &router.config().logging;
    assert_eq!(logging.directives(), "warn,simple_router=debug");
    assert!(logging.env_filter().is_ok());
}
