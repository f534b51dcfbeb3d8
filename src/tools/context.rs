// ABOUTME: Defines ToolExecutionContext, the per-invocation handle a tool emits through.
// ABOUTME: Carries the invocation id, conversation handle, and the event sink.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Execution Context
//!
//! The context identifies the conversation turn a tool call belongs to. The
//! tool never interprets the conversation handle; it only forwards it on
//! every event so the sink can route it.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use crate::ui::UiEventSink;

/// Context provided to every tool invocation.
///
/// Each invocation gets its own context; cloning shares the sink but keeps
/// the same invocation id, so build a fresh context per call.
#[derive(Clone)]
pub struct ToolExecutionContext {
    /// Identifier of this invocation, stamped on every emitted event
    pub invocation_id: Uuid,
    /// Opaque conversation handle
    pub conversation: String,
    /// Where render instructions go
    pub sink: Arc<dyn UiEventSink>,
}

impl ToolExecutionContext {
    /// Create a context for a new invocation in `conversation`
    #[must_use]
    pub fn new(conversation: impl Into<String>, sink: Arc<dyn UiEventSink>) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            conversation: conversation.into(),
            sink,
        }
    }

    /// Sink as a trait object reference
    #[must_use]
    pub fn sink(&self) -> &dyn UiEventSink {
        self.sink.as_ref()
    }
}

impl fmt::Debug for ToolExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolExecutionContext")
            .field("invocation_id", &self.invocation_id)
            .field("conversation", &self.conversation)
            .field("sink", &"<dyn UiEventSink>")
            .finish()
    }
}
