// ABOUTME: Integration tests for environment-driven server and logging configuration
// ABOUTME: Serialized with serial_test because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::config::{Environment, ServerConfig};
use fittrack::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const SERVER_VARS: [&str; 4] = [
    "FITTRACK_HOST",
    "HTTP_PORT",
    "CORS_ALLOWED_ORIGINS",
    "ENVIRONMENT",
];

fn clear_server_vars() {
    for key in SERVER_VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_server_config_defaults() {
    clear_server_vars();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.environment, Environment::Development);
    assert!(config.allows_any_origin());
    assert_eq!(config.bind_address(), "127.0.0.1:8081");
}

#[test]
#[serial]
fn test_server_config_from_env() {
    clear_server_vars();
    env::set_var("FITTRACK_HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "9090");
    env::set_var("ENVIRONMENT", "production");
    env::set_var(
        "CORS_ALLOWED_ORIGINS",
        "https://app.fittrack.example,https://admin.fittrack.example",
    );

    let config = ServerConfig::from_env().unwrap();
    clear_server_vars();

    assert_eq!(config.bind_address(), "0.0.0.0:9090");
    assert!(config.environment.is_production());
    assert_eq!(config.cors_origins.len(), 2);
    assert!(!config.allows_any_origin());
    assert!(config.summary().contains("production"));
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_server_vars();
    env::set_var("HTTP_PORT", "not-a-port");
    let result = ServerConfig::from_env();
    clear_server_vars();

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("HTTP_PORT"));
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "fittrack-test");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert_eq!(config.service_name, "fittrack-test");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}
