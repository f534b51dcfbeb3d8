// ABOUTME: Data integrity errors for cross-field invariants checked after validation
// ABOUTME: Raised while preparing the final render, after the placeholder went out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};

/// A structurally valid payload broke a cross-field invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} integrity check failed at '{field}': {reason}")]
pub struct IntegrityError {
    /// Entity being prepared for the final render
    pub entity: &'static str,
    /// Path of the offending field (e.g. `badges[1].progress`)
    pub field: String,
    /// Which invariant was broken
    pub reason: String,
}

impl IntegrityError {
    /// Create an integrity error
    #[must_use]
    pub fn new(entity: &'static str, field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            entity,
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<IntegrityError> for AppError {
    fn from(error: IntegrityError) -> Self {
        let details = serde_json::json!({
            "entity": error.entity,
            "field": error.field,
        });
        Self::new(ErrorCode::ValueOutOfRange, error.to_string()).with_details(details)
    }
}
