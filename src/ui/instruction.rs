// ABOUTME: Render instruction types emitted on the UI event channel
// ABOUTME: Mutation kind, placeholder marker, renderable payload, and the event envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AchievementCollection, RecipeDocument};

/// How an instruction changes the render slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    /// Create the slot
    Append,
    /// Replace the slot's contents in place
    Update,
}

impl MutationKind {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Append => "append",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loading view shown while the final payload is prepared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadingView {
    /// Recipe card skeleton
    #[serde(rename = "recipe_loading")]
    Recipe,
    /// Badge grid skeleton
    #[serde(rename = "achievement_loading")]
    Achievement,
}

impl LoadingView {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recipe => crate::constants::views::RECIPE_LOADING,
            Self::Achievement => crate::constants::views::ACHIEVEMENT_LOADING,
        }
    }
}

/// Value carried by a render instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderPayload {
    /// Placeholder with no domain data
    Loading {
        /// Which loading view to show
        view: LoadingView,
    },
    /// Validated recipe
    Recipe {
        /// Recipe document
        data: RecipeDocument,
    },
    /// Validated achievement collection
    Achievement {
        /// Achievement collection
        data: AchievementCollection,
    },
}

impl RenderPayload {
    /// Placeholder for the given loading view
    #[must_use]
    pub const fn loading(view: LoadingView) -> Self {
        Self::Loading { view }
    }

    /// Whether this is a placeholder
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// `{ value, type }` pair of a render instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiOutput {
    /// Payload to render
    pub value: RenderPayload,
    /// Append or update
    #[serde(rename = "type")]
    pub kind: MutationKind,
}

/// Render instruction body, `{ output: { value, type } }` on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiInstruction {
    /// Payload and mutation kind
    pub output: UiOutput,
}

impl UiInstruction {
    /// Build an instruction
    #[must_use]
    pub const fn new(kind: MutationKind, value: RenderPayload) -> Self {
        Self {
            output: UiOutput { value, kind },
        }
    }

    /// Mutation kind
    #[must_use]
    pub const fn kind(&self) -> MutationKind {
        self.output.kind
    }

    /// Carried payload
    #[must_use]
    pub const fn payload(&self) -> &RenderPayload {
        &self.output.value
    }
}

/// Envelope delivered to renderers subscribed to a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiEvent {
    /// Event channel identifier shared by every tool
    pub name: String,
    /// Conversation handle the instruction is addressed to
    pub conversation: String,
    /// Invocation that produced the instruction
    pub invocation_id: Uuid,
    /// Render slot the instruction targets
    pub slot_id: Uuid,
    /// Position within the invocation, starting at 0
    pub sequence: u32,
    /// Instruction body
    pub data: UiInstruction,
}

impl UiEvent {
    /// Mutation kind of the carried instruction
    #[must_use]
    pub const fn kind(&self) -> MutationKind {
        self.data.kind()
    }
}
