// ABOUTME: Central registry mapping stable tool names to generative UI tools.
// ABOUTME: Provides discovery, capability filtering, and panic-safe invocation by name.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! Central registry for generative UI tools, providing:
//! - Tool registration and lookup by routing key
//! - Capability-based filtering
//! - Feature-flag-based registration of the built-in tools
//! - Descriptor generation for the agent runtime
//!
//! The registry is built once at startup and then used immutably. All
//! registered tools are `Arc`-wrapped so invocations can run concurrently.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::config::GenUiConfig;
use crate::errors::ToolError;
use crate::schema::ToolSchema;

use super::context::ToolExecutionContext;
use super::result::TerminalResult;
use super::traits::{GenerativeUiTool, ToolCapabilities};

/// Central registry for generative UI tools.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn GenerativeUiTool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in tool enabled by feature flags,
    /// configured from `config`
    #[must_use]
    pub fn with_builtin_tools(config: &GenUiConfig) -> Self {
        let mut registry = Self::new();
        registry.register_builtin_tools(config);
        registry
    }

    /// Register a tool
    ///
    /// # Errors
    ///
    /// Returns `ToolError::AlreadyRegistered` if a tool with the same name exists
    pub fn register(&mut self, tool: Arc<dyn GenerativeUiTool>) -> Result<(), ToolError> {
        let name = tool.name();

        if self.tools.contains_key(name) {
            warn!("Tool '{}' is already registered, rejecting", name);
            return Err(ToolError::already_registered(name));
        }

        debug!(
            "Registering tool '{}' with capabilities: {}",
            name,
            tool.capabilities().describe()
        );
        self.tools.insert(name.to_owned(), tool);
        Ok(())
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn GenerativeUiTool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all tool names, sorted
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Descriptors for every tool, sorted by name
    #[must_use]
    pub fn descriptors(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .values()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema(),
            })
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Filter tools by capabilities
    #[must_use]
    pub fn filter_by_capabilities(
        &self,
        required: ToolCapabilities,
    ) -> Vec<&Arc<dyn GenerativeUiTool>> {
        self.tools
            .values()
            .filter(|tool| tool.capabilities().contains(required))
            .collect()
    }

    /// Invoke a tool by name and return its serialized terminal result
    ///
    /// A panic inside the tool is caught and reported as `ToolError::Invocation`.
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the tool is unknown or the invocation fails
    pub async fn invoke(
        &self,
        name: &str,
        input: Value,
        context: &ToolExecutionContext,
    ) -> Result<String, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;
        let result = Self::invoke_tool(tool.as_ref(), input, context).await?;
        result
            .to_wire()
            .map_err(|e| ToolError::invocation(name, e))
    }

    /// Invoke a tool by name and return the typed terminal result
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the tool is unknown or the invocation fails
    pub async fn invoke_typed(
        &self,
        name: &str,
        input: Value,
        context: &ToolExecutionContext,
    ) -> Result<TerminalResult, ToolError> {
        let tool = self.get(name).ok_or_else(|| ToolError::not_found(name))?;
        Self::invoke_tool(tool.as_ref(), input, context).await
    }

    async fn invoke_tool(
        tool: &dyn GenerativeUiTool,
        input: Value,
        context: &ToolExecutionContext,
    ) -> Result<TerminalResult, ToolError> {
        match AssertUnwindSafe(tool.invoke(input, context))
            .catch_unwind()
            .await
        {
            Ok(outcome) => outcome,
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                error!(tool = tool.name(), reason = %reason, "Tool panicked during invocation");
                Err(ToolError::invocation(
                    tool.name(),
                    format!("tool panicked: {reason}"),
                ))
            }
        }
    }

    /// Register all built-in tools based on feature flags
    pub fn register_builtin_tools(&mut self, config: &GenUiConfig) {
        info!("Registering built-in tools...");

        #[cfg(feature = "tools-recipe")]
        self.register_recipe_tool(config);

        #[cfg(feature = "tools-achievement")]
        self.register_achievement_tool(config);

        info!(
            "Registered {} built-in tools on channel '{}'",
            self.len(),
            config.ui_channel
        );
    }

    #[cfg(feature = "tools-recipe")]
    fn register_recipe_tool(&mut self, config: &GenUiConfig) {
        use super::implementations::recipe::RecipeTool;

        let tool = RecipeTool::new(config.channel()).with_integrity_checks(config.integrity_checks);
        if let Err(e) = self.register(Arc::new(tool)) {
            warn!("Skipping recipe tool: {}", e);
        }
    }

    #[cfg(feature = "tools-achievement")]
    fn register_achievement_tool(&mut self, config: &GenUiConfig) {
        use super::implementations::achievement::AchievementTool;

        let tool =
            AchievementTool::new(config.channel()).with_integrity_checks(config.integrity_checks);
        if let Err(e) = self.register(Arc::new(tool)) {
            warn!("Skipping achievement tool: {}", e);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_owned())
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tool_count", &self.tools.len())
            .field("tools", &self.tool_names())
            .finish()
    }
}
