// ABOUTME: Tool-specific error types for registry lookup and staged invocation
// ABOUTME: Wraps validation, dispatch, and integrity failures with the tool name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Error Types
//!
//! `ToolError` is what an invocation surfaces to the agent runtime. Nothing is
//! retried here; the caller decides whether to re-invoke.

use std::error::Error as StdError;

use super::{AppError, DispatchError, ErrorCode, IntegrityError, ValidationError};

/// Errors specific to tool registration and invocation.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Tool was not found in the registry
    #[error("Tool '{tool_name}' not found")]
    NotFound {
        /// Name of the requested tool
        tool_name: String,
    },

    /// Tool is already registered
    #[error("Tool '{tool_name}' is already registered")]
    AlreadyRegistered {
        /// Name of the already-registered tool
        tool_name: String,
    },

    /// Input failed schema validation; no instruction was emitted
    #[error("Tool '{tool_name}' rejected its input: {source}")]
    Validation {
        /// Name of the tool
        tool_name: String,
        /// Field-level violations
        #[source]
        source: ValidationError,
    },

    /// The event channel refused an instruction
    #[error("Tool '{tool_name}' could not dispatch a render instruction: {source}")]
    Dispatch {
        /// Name of the tool
        tool_name: String,
        /// Underlying channel failure
        #[source]
        source: DispatchError,
    },

    /// Payload broke a cross-field invariant after the placeholder was emitted
    #[error("Tool '{tool_name}' produced inconsistent data: {source}")]
    DataIntegrity {
        /// Name of the tool
        tool_name: String,
        /// Broken invariant
        #[source]
        source: IntegrityError,
    },

    /// Any other failure during handler execution
    #[error("Tool '{tool_name}' execution failed: {source}")]
    Invocation {
        /// Name of the tool
        tool_name: String,
        /// Original cause
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ToolError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(tool_name: impl Into<String>) -> Self {
        Self::NotFound {
            tool_name: tool_name.into(),
        }
    }

    /// Create an "already registered" error
    #[must_use]
    pub fn already_registered(tool_name: impl Into<String>) -> Self {
        Self::AlreadyRegistered {
            tool_name: tool_name.into(),
        }
    }

    /// Wrap a validation failure
    #[must_use]
    pub fn validation(tool_name: impl Into<String>, source: ValidationError) -> Self {
        Self::Validation {
            tool_name: tool_name.into(),
            source,
        }
    }

    /// Wrap a dispatch failure
    #[must_use]
    pub fn dispatch(tool_name: impl Into<String>, source: DispatchError) -> Self {
        Self::Dispatch {
            tool_name: tool_name.into(),
            source,
        }
    }

    /// Wrap an integrity failure
    #[must_use]
    pub fn data_integrity(tool_name: impl Into<String>, source: IntegrityError) -> Self {
        Self::DataIntegrity {
            tool_name: tool_name.into(),
            source,
        }
    }

    /// Wrap any other cause
    #[must_use]
    pub fn invocation(
        tool_name: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self::Invocation {
            tool_name: tool_name.into(),
            source: source.into(),
        }
    }

    /// Get the tool name associated with this error
    #[must_use]
    pub fn tool_name(&self) -> &str {
        match self {
            Self::NotFound { tool_name }
            | Self::AlreadyRegistered { tool_name }
            | Self::Validation { tool_name, .. }
            | Self::Dispatch { tool_name, .. }
            | Self::DataIntegrity { tool_name, .. }
            | Self::Invocation { tool_name, .. } => tool_name,
        }
    }

    /// Whether the failure happened before any render instruction could be emitted
    #[must_use]
    pub const fn is_pre_render(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::AlreadyRegistered { .. } | Self::Validation { .. }
        )
    }
}

impl From<ToolError> for AppError {
    fn from(error: ToolError) -> Self {
        match error {
            ToolError::NotFound { tool_name } => Self::not_found(format!("tool '{tool_name}'")),
            ToolError::AlreadyRegistered { tool_name } => Self::new(
                ErrorCode::ResourceAlreadyExists,
                format!("Tool '{tool_name}' is already registered"),
            ),
            ToolError::Validation { tool_name, source } => {
                let mut app: Self = source.into();
                app.message = format!("Tool '{tool_name}': {}", app.message);
                app
            }
            ToolError::Dispatch { tool_name, source } => {
                let mut app: Self = source.into();
                app.message = format!("Tool '{tool_name}': {}", app.message);
                app
            }
            ToolError::DataIntegrity { tool_name, source } => {
                let mut app: Self = source.into();
                app.message = format!("Tool '{tool_name}': {}", app.message);
                app
            }
            ToolError::Invocation { tool_name, source } => Self {
                code: ErrorCode::InternalError,
                message: format!("Tool '{tool_name}' execution failed: {source}"),
                details: serde_json::Value::Null,
                source: Some(source),
            },
        }
    }
}
