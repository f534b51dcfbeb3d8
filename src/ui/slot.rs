// ABOUTME: Typestate render slot enforcing one append followed by at most one update
// ABOUTME: Emitting out of order, or twice, is a compile error rather than a runtime check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::marker::PhantomData;

use uuid::Uuid;

use crate::errors::DispatchError;
use crate::logging::AppLogger;

use super::dispatcher::{UiChannel, UiEventSink};
use super::instruction::{MutationKind, RenderPayload, UiEvent, UiInstruction};

// ============================================================================
// State Marker Types
// ============================================================================

/// No instruction emitted yet
/// Valid transitions: -> Open (via append)
#[derive(Debug)]
pub struct Pending;

/// Placeholder emitted; the slot awaits its final payload
/// Valid transitions: consumed by update
#[derive(Debug)]
pub struct Open;

// ============================================================================
// Slot
// ============================================================================

/// Where a slot's instructions are addressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAddress {
    /// Event channel identifier
    pub channel: UiChannel,
    /// Conversation handle
    pub conversation: String,
    /// Owning invocation
    pub invocation_id: Uuid,
}

/// The single render slot of one invocation.
///
/// `append` is only callable on a fresh slot and `update` consumes the slot,
/// so an invocation can emit neither a second placeholder nor a second update.
/// Dropping an `Open` slot emits nothing further.
pub struct RenderSlot<'a, S> {
    sink: &'a dyn UiEventSink,
    address: SlotAddress,
    slot_id: Uuid,
    sequence: u32,
    _state: PhantomData<S>,
}

impl<S> RenderSlot<'_, S> {
    /// Slot identifier carried by every instruction of this slot
    #[must_use]
    pub const fn slot_id(&self) -> Uuid {
        self.slot_id
    }

    /// Instructions emitted so far
    #[must_use]
    pub const fn emitted(&self) -> u32 {
        self.sequence
    }

    async fn emit(
        &mut self,
        kind: MutationKind,
        value: RenderPayload,
    ) -> Result<(), DispatchError> {
        let event = UiEvent {
            name: self.address.channel.as_str().to_owned(),
            conversation: self.address.conversation.clone(),
            invocation_id: self.address.invocation_id,
            slot_id: self.slot_id,
            sequence: self.sequence,
            data: UiInstruction::new(kind, value),
        };
        self.sink.dispatch(event).await?;
        AppLogger::log_render_instruction(self.address.channel.as_str(), self.slot_id, kind);
        self.sequence += 1;
        Ok(())
    }
}

impl<'a> RenderSlot<'a, Pending> {
    /// Reserve a slot that will emit through `sink`
    #[must_use]
    pub fn new(sink: &'a dyn UiEventSink, address: SlotAddress) -> Self {
        Self {
            sink,
            address,
            slot_id: Uuid::new_v4(),
            sequence: 0,
            _state: PhantomData,
        }
    }

    /// Emit the placeholder, creating the slot on the renderer side
    ///
    /// # Errors
    ///
    /// Returns `DispatchError` if the sink refuses the instruction
    pub async fn append(
        mut self,
        placeholder: RenderPayload,
    ) -> Result<RenderSlot<'a, Open>, DispatchError> {
        self.emit(MutationKind::Append, placeholder).await?;
        Ok(RenderSlot {
            sink: self.sink,
            address: self.address,
            slot_id: self.slot_id,
            sequence: self.sequence,
            _state: PhantomData,
        })
    }
}

impl RenderSlot<'_, Open> {
    /// Replace the placeholder with the final payload, closing the slot
    ///
    /// # Errors
    ///
    /// Returns `DispatchError` if the sink refuses the instruction
    pub async fn update(mut self, payload: RenderPayload) -> Result<Uuid, DispatchError> {
        self.emit(MutationKind::Update, payload).await?;
        Ok(self.slot_id)
    }
}
