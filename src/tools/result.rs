// ABOUTME: Defines TerminalResult, the status payload an invocation reports to its caller.
// ABOUTME: Serialized as {"status":"success","message":...}; never sent to the renderer.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::status;

/// Final outcome of an invocation as reported to the agent runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalResult {
    /// Always `success`; failures surface as `ToolError`
    pub status: String,
    /// Short human-readable summary
    pub message: String,
}

impl TerminalResult {
    /// Create a success result
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: status::SUCCESS.to_owned(),
            message: message.into(),
        }
    }

    /// Whether the invocation succeeded
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == status::SUCCESS
    }

    /// Serialized terminal value
    ///
    /// # Errors
    ///
    /// Returns the serialization error if the result cannot be encoded
    pub fn to_wire(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
