// ABOUTME: Main library entry point for the generative UI tools
// ABOUTME: Schema validation, staged UI event protocol, and the tool registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Generative UI Tools
//!
//! Tools an agent runtime can call to show rich UI in a conversation. A tool
//! takes a structured payload (a recipe or an achievement collection),
//! validates it, and streams render instructions to the client: first a
//! loading placeholder (`append`), then the final view (`update`). The
//! caller receives a terminal `{status, message}` result.
//!
//! ## Architecture
//!
//! - **schema**: Declarative entity schemas, validation, and JSON Schema output
//! - **ui**: Render instructions, event sinks, typestate render slots, and the conversation hub
//! - **tools**: Tool trait, staged invocation driver, built-in tools, and the registry
//! - **config**: Environment configuration
//! - **logging**: `tracing` setup and structured log helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use genui_tools::config::GenUiConfig;
//! use genui_tools::tools::{ToolExecutionContext, ToolRegistry};
//! use genui_tools::ui::UiEventHub;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GenUiConfig::from_env()?;
//! let registry = ToolRegistry::with_builtin_tools(&config);
//! let hub = UiEventHub::new(config.event_buffer_size);
//!
//! let mut events = hub.register_conversation("turn-1").await;
//! let context = ToolExecutionContext::new("turn-1", Arc::new(hub.clone()));
//! let terminal = registry
//!     .invoke("achievement", serde_json::json!({"title": "Spring", "badges": []}), &context)
//!     .await?;
//!
//! while let Ok(event) = events.try_recv() {
//!     println!("{}", serde_json::to_string(&event)?);
//! }
//! println!("{terminal}");
//! # Ok(())
//! # }
//! ```

/// Error types shared with the core crate
pub use genui_core::errors;

/// Domain entities
pub use genui_core::models;

/// Shared constants
pub use genui_core::constants;

/// Environment configuration
pub mod config;

/// Logging configuration and structured log helpers
pub mod logging;

/// Entity schemas and validation
pub mod schema;

/// Tool trait, staged driver, built-in tools, and registry
pub mod tools;

/// Staged-update UI event protocol
pub mod ui;
