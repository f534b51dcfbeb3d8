// ABOUTME: Integration tests for environment-driven configuration loading
// ABOUTME: Runs serially because every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use genui_tools::config::GenUiConfig;
use genui_tools::errors::ErrorCode;
use genui_tools::logging::LogFormat;
use serial_test::serial;

const VARS: [&str; 5] = [
    "GENUI_UI_CHANNEL",
    "GENUI_EVENT_BUFFER_SIZE",
    "GENUI_INTEGRITY_CHECKS",
    "LOG_FORMAT",
    "SERVICE_NAME",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();

    let config = GenUiConfig::from_env().unwrap();

    assert_eq!(config.ui_channel, "custom_ui_yield");
    assert_eq!(config.event_buffer_size, 64);
    assert!(config.integrity_checks);
    assert_eq!(config.logging.service_name, "genui-tools");
    assert_eq!(config.channel().as_str(), "custom_ui_yield");
}

#[test]
#[serial]
fn test_overrides_from_env() {
    clear_env();
    env::set_var("GENUI_UI_CHANNEL", "kitchen_ui");
    env::set_var("GENUI_EVENT_BUFFER_SIZE", " 128 ");
    env::set_var("GENUI_INTEGRITY_CHECKS", "off");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "genui-test");

    let config = GenUiConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.ui_channel, "kitchen_ui");
    assert_eq!(config.event_buffer_size, 128);
    assert!(!config.integrity_checks);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.service_name, "genui-test");
}

#[test]
#[serial]
fn test_boolean_spellings() {
    clear_env();
    for (raw, expected) in [("1", true), ("YES", true), ("on", true), ("0", false), ("No", false)] {
        env::set_var("GENUI_INTEGRITY_CHECKS", raw);
        assert_eq!(GenUiConfig::from_env().unwrap().integrity_checks, expected, "{raw}");
    }
    clear_env();
}

#[test]
#[serial]
fn test_unparsable_values_rejected() {
    clear_env();

    env::set_var("GENUI_EVENT_BUFFER_SIZE", "lots");
    let err = GenUiConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("GENUI_EVENT_BUFFER_SIZE"));
    env::remove_var("GENUI_EVENT_BUFFER_SIZE");

    env::set_var("GENUI_INTEGRITY_CHECKS", "maybe");
    let err = GenUiConfig::from_env().unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    clear_env();
}

#[test]
#[serial]
fn test_zero_buffer_and_blank_channel_rejected() {
    clear_env();

    env::set_var("GENUI_EVENT_BUFFER_SIZE", "0");
    assert_eq!(
        GenUiConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    clear_env();

    let config = GenUiConfig {
        ui_channel: "   ".to_owned(),
        ..GenUiConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(GenUiConfig::default().validate().is_ok());
}
