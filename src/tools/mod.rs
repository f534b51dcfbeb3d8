// ABOUTME: Generative UI tool entries, the staged invocation driver, and the registry
// ABOUTME: Registry entries pair a schema with a handler under a stable routing key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! - [`GenerativeUiTool`]: uniform invocation interface
//! - [`StagedUiTool`]: validate, placeholder, integrity, final update
//! - [`ToolRegistry`]: name to tool mapping exposed to the agent runtime

/// Per-invocation context
pub mod context;
/// Built-in tools
pub mod implementations;
/// Tool registry
pub mod registry;
/// Terminal result type
pub mod result;
/// Generic staged-update tool
pub mod staged;
/// Tool trait and capability flags
pub mod traits;

pub use context::ToolExecutionContext;
pub use registry::ToolRegistry;
pub use result::TerminalResult;
pub use staged::{StagedUiTool, UiEntity};
pub use traits::{GenerativeUiTool, ToolCapabilities};

#[cfg(feature = "tools-achievement")]
pub use implementations::achievement::AchievementTool;
#[cfg(feature = "tools-recipe")]
pub use implementations::recipe::RecipeTool;
