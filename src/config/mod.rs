// ABOUTME: Runtime configuration for the generative UI tools loaded from the environment
// ABOUTME: Event channel name, per-conversation buffer size, integrity stage toggle, logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! | Variable                  | Default           |
//! |---------------------------|-------------------|
//! | `GENUI_UI_CHANNEL`        | `custom_ui_yield` |
//! | `GENUI_EVENT_BUFFER_SIZE` | `64`              |
//! | `GENUI_INTEGRITY_CHECKS`  | `true`            |
//!
//! Logging variables are documented on [`LoggingConfig`].

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use crate::ui::UiChannel;

/// Generative UI tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenUiConfig {
    /// Event channel identifier injected into every tool
    pub ui_channel: String,
    /// Capacity of each conversation's broadcast stream
    pub event_buffer_size: usize,
    /// Run the post-validation integrity stage
    pub integrity_checks: bool,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for GenUiConfig {
    fn default() -> Self {
        Self {
            ui_channel: defaults::UI_CHANNEL.to_owned(),
            event_buffer_size: defaults::EVENT_BUFFER_SIZE,
            integrity_checks: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl GenUiConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a variable cannot be parsed or the result fails validation
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            ui_channel: env_var_or("GENUI_UI_CHANNEL", defaults::UI_CHANNEL),
            event_buffer_size: parse_env("GENUI_EVENT_BUFFER_SIZE", defaults::EVENT_BUFFER_SIZE)?,
            integrity_checks: parse_bool_env("GENUI_INTEGRITY_CHECKS", true)?,
            logging: LoggingConfig::from_env(),
        };
        config.validate()?;

        debug!(
            ui_channel = %config.ui_channel,
            event_buffer_size = config.event_buffer_size,
            integrity_checks = config.integrity_checks,
            "Loaded generative UI configuration"
        );
        Ok(config)
    }

    /// Check invariants
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` for an empty channel name or a zero buffer size
    pub fn validate(&self) -> AppResult<()> {
        if self.ui_channel.trim().is_empty() {
            return Err(AppError::config("GENUI_UI_CHANNEL must not be empty"));
        }
        if self.event_buffer_size == 0 {
            return Err(AppError::config(
                "GENUI_EVENT_BUFFER_SIZE must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Event channel identifier
    #[must_use]
    pub fn channel(&self) -> UiChannel {
        UiChannel::new(self.ui_channel.clone())
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("{key}='{raw}' is invalid: {e}"))),
        Err(_) => Ok(default),
    }
}

fn parse_bool_env(key: &str, default: bool) -> AppResult<bool> {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(AppError::config(format!(
                "{key}='{raw}' is not a boolean"
            ))),
        },
        Err(_) => Ok(default),
    }
}
