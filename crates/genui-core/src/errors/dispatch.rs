// ABOUTME: Event channel dispatch errors for staged render instructions
// ABOUTME: Raised when a conversation stream cannot accept an instruction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};

/// The event channel could not accept a render instruction.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// No stream is registered for the conversation, or it was closed
    #[error("conversation '{conversation}' has no open event stream")]
    ConversationClosed {
        /// Opaque conversation handle from the invocation context
        conversation: String,
    },

    /// The stream exists but nobody is listening
    #[error("conversation '{conversation}' has no subscribers on channel '{channel}'")]
    NoSubscribers {
        /// Opaque conversation handle from the invocation context
        conversation: String,
        /// Event channel the instruction was addressed to
        channel: String,
    },

    /// The instruction could not be encoded for the wire
    #[error("failed to encode render instruction")]
    Serialization {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl DispatchError {
    /// Create a "conversation closed" error
    #[must_use]
    pub fn conversation_closed(conversation: impl Into<String>) -> Self {
        Self::ConversationClosed {
            conversation: conversation.into(),
        }
    }

    /// Create a "no subscribers" error
    #[must_use]
    pub fn no_subscribers(conversation: impl Into<String>, channel: impl Into<String>) -> Self {
        Self::NoSubscribers {
            conversation: conversation.into(),
            channel: channel.into(),
        }
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization { source }
    }
}

impl From<DispatchError> for AppError {
    fn from(error: DispatchError) -> Self {
        let code = match error {
            DispatchError::Serialization { .. } => ErrorCode::SerializationError,
            DispatchError::ConversationClosed { .. } | DispatchError::NoSubscribers { .. } => {
                ErrorCode::ResourceUnavailable
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_failure_maps_to_serialization_code() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = DispatchError::from(json_error);
        assert!(matches!(error, DispatchError::Serialization { .. }));

        let app = AppError::from(error);
        assert_eq!(app.code, ErrorCode::SerializationError);
        assert!(app.source.is_some());
    }

    #[test]
    fn test_stream_failures_are_unavailable() {
        let closed = AppError::from(DispatchError::conversation_closed("turn-1"));
        assert_eq!(closed.code, ErrorCode::ResourceUnavailable);
        assert!(closed.message.contains("turn-1"));

        let idle = AppError::from(DispatchError::no_subscribers("turn-1", "custom_ui_yield"));
        assert_eq!(idle.code, ErrorCode::ResourceUnavailable);
        assert!(idle.message.contains("custom_ui_yield"));
    }
}
