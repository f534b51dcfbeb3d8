// ABOUTME: Defines the GenerativeUiTool trait and ToolCapabilities for registry entries.
// ABOUTME: Tools implement this trait to be registered and invoked via the ToolRegistry.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Generative UI Tool Trait and Capabilities
//!
//! Every registry entry exposes:
//! - Tool metadata (name, description, input schema)
//! - Capability flags for filtering
//! - Async invocation that emits render instructions and returns a terminal result

use async_trait::async_trait;
use bitflags::bitflags;
use serde_json::Value;

use crate::errors::ToolError;
use crate::schema::JsonSchema;

use super::context::ToolExecutionContext;
use super::result::TerminalResult;

bitflags! {
    /// Capabilities that tools declare for filtering and discovery.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ToolCapabilities: u8 {
        /// Tool emits render instructions on the UI channel
        const RENDERS_UI = 0b0000_0001;
        /// Tool renders recipes
        const RECIPES = 0b0000_0010;
        /// Tool renders achievements
        const ACHIEVEMENTS = 0b0000_0100;
        /// Tool runs a cross-field integrity stage before its final update
        const INTEGRITY_CHECKED = 0b0000_1000;
    }
}

impl ToolCapabilities {
    /// Get a description of all enabled capabilities for logging
    #[must_use]
    pub fn describe(&self) -> String {
        let parts: Vec<&str> = [
            (Self::RENDERS_UI, "renders_ui"),
            (Self::RECIPES, "recipes"),
            (Self::ACHIEVEMENTS, "achievements"),
            (Self::INTEGRITY_CHECKED, "integrity_checked"),
        ]
        .into_iter()
        .filter(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
        .collect();

        if parts.is_empty() {
            "none".to_owned()
        } else {
            parts.join(", ")
        }
    }
}

/// The trait every generative UI tool implements.
///
/// # Design Notes
///
/// - Tools are `Send + Sync` so one instance serves concurrent invocations
/// - `invoke` must reject invalid input before emitting any instruction
/// - A successful `invoke` has emitted one `append` then one `update`
#[async_trait]
pub trait GenerativeUiTool: Send + Sync {
    /// Stable routing key used by the agent runtime (e.g. `recipe`)
    fn name(&self) -> &'static str;

    /// Guidance for the agent runtime on when to select this tool
    fn description(&self) -> &'static str;

    /// JSON Schema for the accepted input
    fn input_schema(&self) -> JsonSchema;

    /// Capability flags for filtering
    fn capabilities(&self) -> ToolCapabilities;

    /// Validate `input`, emit the staged render instructions, and report the outcome
    ///
    /// # Errors
    ///
    /// Returns `ToolError` for validation, dispatch, integrity, or any other failure
    async fn invoke(
        &self,
        input: Value,
        context: &ToolExecutionContext,
    ) -> Result<TerminalResult, ToolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_lists_enabled_flags() {
        let caps = ToolCapabilities::RENDERS_UI | ToolCapabilities::INTEGRITY_CHECKED;
        assert_eq!(caps.describe(), "renders_ui, integrity_checked");
        assert_eq!(ToolCapabilities::empty().describe(), "none");
    }
}
