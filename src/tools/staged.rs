// ABOUTME: Generic staged-update tool: validate, append placeholder, check integrity, update
// ABOUTME: Each renderable entity plugs in through the UiEntity trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Staged UI Tool
//!
//! One invocation runs these stages in order:
//!
//! 1. Schema validation. Failure emits nothing.
//! 2. `append` of the loading placeholder.
//! 3. Integrity check of cross-field invariants (when enabled). Failure
//!    leaves the placeholder stale and emits no `update`.
//! 4. `update` with the validated entity.
//! 5. Success terminal result.

use std::marker::PhantomData;
use std::time::Instant;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info_span, warn, Instrument};

use crate::errors::{IntegrityError, ToolError};
use crate::logging::AppLogger;
use crate::schema::{EntitySchema, JsonSchema};
use crate::ui::{LoadingView, RenderPayload, RenderSlot, SlotAddress, UiChannel};

use super::context::ToolExecutionContext;
use super::result::TerminalResult;
use super::traits::{GenerativeUiTool, ToolCapabilities};

/// A domain entity that a staged tool can render.
pub trait UiEntity: DeserializeOwned + Send + Sync + 'static {
    /// Tool routing key
    const TOOL_NAME: &'static str;
    /// Tool description for the agent runtime
    const TOOL_DESCRIPTION: &'static str;
    /// Placeholder shown while the entity is prepared
    const LOADING_VIEW: LoadingView;

    /// Capability flags of the tool
    fn capabilities() -> ToolCapabilities;

    /// Structural schema
    fn schema() -> EntitySchema;

    /// Cross-field invariants not expressible in the schema
    ///
    /// # Errors
    ///
    /// Returns `IntegrityError` naming the first broken invariant
    fn check_integrity(&self) -> Result<(), IntegrityError> {
        Ok(())
    }

    /// Terminal message reported on success
    fn success_message(&self) -> String;

    /// Final render payload
    fn into_payload(self) -> RenderPayload;
}

/// Registry entry driving the staged-update protocol for entity `E`.
pub struct StagedUiTool<E> {
    schema: EntitySchema,
    channel: UiChannel,
    integrity_checks: bool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: UiEntity> StagedUiTool<E> {
    /// Create a tool publishing on `channel`
    #[must_use]
    pub fn new(channel: UiChannel) -> Self {
        Self {
            schema: E::schema(),
            channel,
            integrity_checks: true,
            _entity: PhantomData,
        }
    }

    /// Enable or disable the integrity stage
    #[must_use]
    pub const fn with_integrity_checks(mut self, enabled: bool) -> Self {
        self.integrity_checks = enabled;
        self
    }

    /// Channel this tool publishes on
    #[must_use]
    pub const fn channel(&self) -> &UiChannel {
        &self.channel
    }

    async fn run(
        &self,
        input: Value,
        context: &ToolExecutionContext,
    ) -> Result<TerminalResult, ToolError> {
        let entity: E = self
            .schema
            .parse(input)
            .map_err(|e| ToolError::validation(E::TOOL_NAME, e))?;
        debug!("Input passed schema validation");

        let address = SlotAddress {
            channel: self.channel.clone(),
            conversation: context.conversation.clone(),
            invocation_id: context.invocation_id,
        };
        let slot = RenderSlot::new(context.sink(), address)
            .append(RenderPayload::loading(E::LOADING_VIEW))
            .await
            .map_err(|e| ToolError::dispatch(E::TOOL_NAME, e))?;

        if self.integrity_checks {
            entity
                .check_integrity()
                .map_err(|e| ToolError::data_integrity(E::TOOL_NAME, e))?;
        }

        let message = entity.success_message();
        let slot_id = slot
            .update(entity.into_payload())
            .await
            .map_err(|e| ToolError::dispatch(E::TOOL_NAME, e))?;
        debug!(slot_id = %slot_id, "Render slot completed");

        Ok(TerminalResult::success(message))
    }
}

#[async_trait]
impl<E: UiEntity> GenerativeUiTool for StagedUiTool<E> {
    fn name(&self) -> &'static str {
        E::TOOL_NAME
    }

    fn description(&self) -> &'static str {
        E::TOOL_DESCRIPTION
    }

    fn input_schema(&self) -> JsonSchema {
        self.schema.json_schema()
    }

    fn capabilities(&self) -> ToolCapabilities {
        let capabilities = E::capabilities();
        if self.integrity_checks {
            capabilities
        } else {
            capabilities - ToolCapabilities::INTEGRITY_CHECKED
        }
    }

    async fn invoke(
        &self,
        input: Value,
        context: &ToolExecutionContext,
    ) -> Result<TerminalResult, ToolError> {
        let span = info_span!(
            "tool_invocation",
            tool = E::TOOL_NAME,
            invocation_id = %context.invocation_id,
            conversation = %context.conversation,
        );
        let start = Instant::now();
        let outcome = self.run(input, context).instrument(span).await;
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        AppLogger::log_tool_invocation(
            E::TOOL_NAME,
            context.invocation_id,
            outcome.is_ok(),
            duration_ms,
        );
        if let Err(e) = &outcome {
            warn!(
                tool = E::TOOL_NAME,
                invocation_id = %context.invocation_id,
                pre_render = e.is_pre_render(),
                error = %e,
                "Tool invocation failed"
            );
        }
        outcome
    }
}
