// ABOUTME: Schema validation error types listing each violated field and constraint
// ABOUTME: Raised before any render instruction is emitted for an invocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AppError, ErrorCode};

/// The constraint a single field broke.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field is absent
    MissingField,
    /// Field is present with the wrong JSON type
    TypeMismatch {
        /// JSON type the schema expects
        expected: String,
        /// JSON type that was supplied
        found: String,
    },
    /// Number has a fractional part where an integer is required
    NotAnInteger,
    /// String is not an absolute URL
    MalformedUrl {
        /// Parser diagnostic
        reason: String,
    },
    /// String is not an ISO-8601 date or RFC 3339 timestamp
    MalformedDate,
    /// String is outside the enumerated set
    NotInEnum {
        /// Accepted values
        allowed: Vec<String>,
    },
    /// Passed the structural checks but the typed decoder still refused it
    Undecodable {
        /// Decoder diagnostic
        reason: String,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "required field is missing"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::NotAnInteger => write!(f, "expected an integer"),
            Self::MalformedUrl { reason } => write!(f, "malformed URL ({reason})"),
            Self::MalformedDate => write!(f, "expected an ISO-8601 date"),
            Self::NotInEnum { allowed } => {
                write!(f, "expected one of [{}]", allowed.join(", "))
            }
            Self::Undecodable { reason } => write!(f, "could not decode ({reason})"),
        }
    }
}

/// One field-level violation, addressed by JSON path (e.g. `badges[2].level`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Path of the offending field; empty for the document root
    pub path: String,
    /// What was wrong with it
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl Violation {
    /// Create a violation at the given path
    #[must_use]
    pub fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "<root>: {}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

/// Input did not conform to an entity schema.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{entity} failed validation: {}", summarize(.violations))]
pub struct ValidationError {
    /// Entity the input was validated against
    pub entity: &'static str,
    /// Every violation found, in document order
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Create a validation error for an entity
    #[must_use]
    pub const fn new(entity: &'static str, violations: Vec<Violation>) -> Self {
        Self { entity, violations }
    }

    /// Whether any violation is reported at `path`
    #[must_use]
    pub fn has_violation_at(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    /// Most specific error code for this failure
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self.violations.first().map(|v| &v.kind) {
            Some(ViolationKind::MissingField) => ErrorCode::MissingRequiredField,
            Some(ViolationKind::MalformedUrl { .. } | ViolationKind::MalformedDate) => {
                ErrorCode::InvalidFormat
            }
            _ => ErrorCode::InvalidInput,
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let details = serde_json::json!({
            "entity": error.entity,
            "violations": error.violations,
        });
        Self::new(error.code(), error.to_string()).with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_violation() {
        let error = ValidationError::new(
            "recipe",
            vec![
                Violation::new("imageUrl", ViolationKind::MissingField),
                Violation::new(
                    "calories",
                    ViolationKind::TypeMismatch {
                        expected: "number".to_owned(),
                        found: "string".to_owned(),
                    },
                ),
            ],
        );

        let message = error.to_string();
        assert!(message.starts_with("recipe failed validation"));
        assert!(message.contains("imageUrl: required field is missing"));
        assert!(message.contains("calories: expected number, found string"));
    }

    #[test]
    fn test_code_follows_first_violation() {
        let missing = ValidationError::new(
            "recipe",
            vec![Violation::new("title", ViolationKind::MissingField)],
        );
        assert_eq!(missing.code(), ErrorCode::MissingRequiredField);

        let url = ValidationError::new(
            "recipe",
            vec![Violation::new(
                "imageUrl",
                ViolationKind::MalformedUrl {
                    reason: "relative URL without a base".to_owned(),
                },
            )],
        );
        assert_eq!(url.code(), ErrorCode::InvalidFormat);
    }

    #[test]
    fn test_violation_serializes_flat() {
        let violation = Violation::new(
            "badges[0].level",
            ViolationKind::NotInEnum {
                allowed: vec!["bronze".to_owned(), "gold".to_owned()],
            },
        );
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["path"], "badges[0].level");
        assert_eq!(json["kind"], "not_in_enum");
        assert_eq!(json["allowed"][1], "gold");
    }
}
