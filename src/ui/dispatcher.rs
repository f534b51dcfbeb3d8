// ABOUTME: Event sink abstraction that handlers emit render instructions through
// ABOUTME: Implemented by the conversation hub and by test doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use async_trait::async_trait;

use crate::errors::DispatchError;

use super::instruction::UiEvent;

/// Event channel identifier. One value is shared by every tool of a process.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UiChannel(String);

impl UiChannel {
    /// Wrap a channel name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Channel name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UiChannel {
    fn default() -> Self {
        Self::new(crate::constants::defaults::UI_CHANNEL)
    }
}

impl fmt::Display for UiChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Destination for render instructions.
///
/// `dispatch` resolves once the event has been accepted for delivery. Events
/// for one invocation must be delivered in the order they were dispatched.
#[async_trait]
pub trait UiEventSink: Send + Sync {
    /// Accept one event
    ///
    /// # Errors
    ///
    /// Returns `DispatchError` if the addressed conversation cannot take the event
    async fn dispatch(&self, event: UiEvent) -> Result<(), DispatchError>;
}
