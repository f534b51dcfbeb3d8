// ABOUTME: Staged-update UI protocol: instructions, event sinks, render slots, and the hub
// ABOUTME: Handlers emit append(placeholder) then update(final) through a UiEventSink
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Event Dispatcher
//!
//! A tool invocation owns one [`RenderSlot`]. The slot emits exactly one
//! `append` carrying a loading placeholder and then, once the payload is
//! ready, one `update` carrying the validated entity. Both travel through a
//! [`UiEventSink`] on the process-wide [`UiChannel`].

/// Event sink trait and channel identifier
pub mod dispatcher;
/// Per-conversation broadcast hub
pub mod hub;
/// Instruction and envelope types
pub mod instruction;
/// Typestate render slot
pub mod slot;

pub use dispatcher::{UiChannel, UiEventSink};
pub use hub::{ConversationMetadata, UiEventHub};
pub use instruction::{LoadingView, MutationKind, RenderPayload, UiEvent, UiInstruction, UiOutput};
pub use slot::{Open, Pending, RenderSlot, SlotAddress};
