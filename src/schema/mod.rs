// ABOUTME: Declarative entity schemas that validate tool input and publish JSON Schema
// ABOUTME: One definition drives both rejection of malformed input and the tools/list shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Schema Validator
//!
//! Each entity is described once as an [`EntitySchema`]. Validation walks the
//! raw JSON input and collects every violation (missing field, type mismatch,
//! malformed URL or date, value outside an enum) with its JSON path, then
//! decodes the input into the typed entity. Validation is pure.
//!
//! The same description renders to a [`JsonSchema`] for the agent runtime.

/// Recipe and achievement schema definitions
pub mod entities;
/// JSON Schema wire types
pub mod json_schema;

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use url::Url;

use crate::errors::{ValidationError, Violation, ViolationKind};

pub use entities::{achievement_schema, recipe_schema, ACHIEVEMENT_ENTITY, RECIPE_ENTITY};
pub use json_schema::{JsonSchema, PropertySchema, ToolSchema};

/// Shape of one value in an entity document
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// Any string
    String,
    /// Absolute URL string
    Url,
    /// ISO-8601 calendar date or RFC 3339 timestamp string
    Date,
    /// Any JSON number
    Number,
    /// JSON number without a fractional part (`3` and `3.0` both qualify)
    Integer,
    /// String drawn from a closed set
    Enum(Vec<&'static str>),
    /// Homogeneous array
    Array(Box<SchemaNode>),
    /// Nested object
    Object(ObjectSchema),
}

/// One named field of an object
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    /// Wire name
    pub name: &'static str,
    /// Value shape
    pub node: SchemaNode,
    /// Whether the field must be present
    pub required: bool,
    /// Guidance published to the agent runtime
    pub description: &'static str,
}

impl FieldSchema {
    /// Required field
    #[must_use]
    pub const fn required(name: &'static str, node: SchemaNode, description: &'static str) -> Self {
        Self {
            name,
            node,
            required: true,
            description,
        }
    }

    /// Optional field
    #[must_use]
    pub const fn optional(name: &'static str, node: SchemaNode, description: &'static str) -> Self {
        Self {
            name,
            node,
            required: false,
            description,
        }
    }
}

/// Ordered set of fields. Unknown input fields are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectSchema {
    /// Fields in declaration order
    pub fields: Vec<FieldSchema>,
}

impl ObjectSchema {
    /// Build from fields
    #[must_use]
    pub const fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    fn required_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.to_owned())
            .collect()
    }

    fn property_map(&self) -> BTreeMap<String, PropertySchema> {
        self.fields
            .iter()
            .map(|field| {
                let mut property = field.node.to_property();
                property.description = Some(field.description.to_owned());
                (field.name.to_owned(), property)
            })
            .collect()
    }

    fn validate_map(&self, map: &Map<String, Value>, path: &str, out: &mut Vec<Violation>) {
        for field in &self.fields {
            let field_path = join_field(path, field.name);
            match map.get(field.name) {
                None if field.required => {
                    out.push(Violation::new(field_path, ViolationKind::MissingField));
                }
                None => {}
                Some(value) => field.node.validate(value, &field_path, out),
            }
        }
    }

    fn normalize_map(&self, map: &mut Map<String, Value>) {
        for field in &self.fields {
            if let Some(value) = map.get_mut(field.name) {
                field.node.normalize(value);
            }
        }
    }
}

impl SchemaNode {
    /// Enum over the wire names of a closed set
    #[must_use]
    pub fn one_of(values: impl IntoIterator<Item = &'static str>) -> Self {
        Self::Enum(values.into_iter().collect())
    }

    /// Array of the given element shape
    #[must_use]
    pub fn array_of(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    const fn json_type(&self) -> &'static str {
        match self {
            Self::String | Self::Url | Self::Date | Self::Enum(_) => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// Validate `value` at `path`, appending every violation to `out`
    pub fn validate(&self, value: &Value, path: &str, out: &mut Vec<Violation>) {
        match (self, value) {
            (Self::String, Value::String(_)) | (Self::Number, Value::Number(_)) => {}
            (Self::Integer, Value::Number(number)) => {
                if integral_value(number).is_none() {
                    out.push(Violation::new(path, ViolationKind::NotAnInteger));
                }
            }
            (Self::Url, Value::String(raw)) => {
                if let Err(e) = Url::parse(raw) {
                    out.push(Violation::new(
                        path,
                        ViolationKind::MalformedUrl {
                            reason: e.to_string(),
                        },
                    ));
                }
            }
            (Self::Date, Value::String(raw)) => {
                if !is_iso_date(raw) {
                    out.push(Violation::new(path, ViolationKind::MalformedDate));
                }
            }
            (Self::Enum(allowed), Value::String(raw)) => {
                if !allowed.contains(&raw.as_str()) {
                    out.push(Violation::new(
                        path,
                        ViolationKind::NotInEnum {
                            allowed: allowed.iter().map(|s| (*s).to_owned()).collect(),
                        },
                    ));
                }
            }
            (Self::Array(element), Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    element.validate(item, &format!("{path}[{index}]"), out);
                }
            }
            (Self::Object(object), Value::Object(map)) => object.validate_map(map, path, out),
            (node, other) => out.push(Violation::new(
                path,
                ViolationKind::TypeMismatch {
                    expected: node.json_type().to_owned(),
                    found: json_type_name(other).to_owned(),
                },
            )),
        }
    }

    /// Rewrite integral floats under `Integer` nodes (`1.0`) as JSON integers
    /// so the typed decoder accepts them. Run only on validated input.
    pub fn normalize(&self, value: &mut Value) {
        match self {
            Self::Integer => {
                let integral = match value {
                    Value::Number(number) if number.as_i64().is_none() => integral_value(number),
                    _ => None,
                };
                if let Some(integer) = integral {
                    *value = Value::from(integer);
                }
            }
            Self::Array(element) => {
                if let Value::Array(items) = value {
                    for item in items {
                        element.normalize(item);
                    }
                }
            }
            Self::Object(object) => {
                if let Value::Object(map) = value {
                    object.normalize_map(map);
                }
            }
            Self::String | Self::Url | Self::Date | Self::Number | Self::Enum(_) => {}
        }
    }

    /// Render as a JSON Schema property (without description)
    #[must_use]
    pub fn to_property(&self) -> PropertySchema {
        let mut property = PropertySchema::of_type(self.json_type());
        match self {
            Self::Url => property.format = Some("uri".to_owned()),
            Self::Date => property.format = Some("date".to_owned()),
            Self::Enum(values) => {
                property.enum_values = Some(values.iter().map(|s| (*s).to_owned()).collect());
            }
            Self::Array(element) => property.items = Some(Box::new(element.to_property())),
            Self::Object(object) => {
                property.properties = Some(object.property_map());
                property.required = Some(object.required_names());
            }
            Self::String | Self::Number | Self::Integer => {}
        }
        property
    }
}

/// Schema for one entity, addressed by name in error reports
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySchema {
    /// Entity name used in `ValidationError`
    pub entity: &'static str,
    /// Root object shape
    pub root: ObjectSchema,
}

impl EntitySchema {
    /// Create a schema for `entity`
    #[must_use]
    pub const fn new(entity: &'static str, root: ObjectSchema) -> Self {
        Self { entity, root }
    }

    /// Check `input` against the schema, reporting every violation
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing all violations when the input does not conform
    pub fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let mut violations = Vec::new();
        match input {
            Value::Object(map) => self.root.validate_map(map, "", &mut violations),
            other => violations.push(Violation::new(
                "",
                ViolationKind::TypeMismatch {
                    expected: "object".to_owned(),
                    found: json_type_name(other).to_owned(),
                },
            )),
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.entity, violations))
        }
    }

    /// Validate `input` and decode it into the typed entity
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` when the input does not conform or cannot be decoded
    pub fn parse<T: DeserializeOwned>(&self, mut input: Value) -> Result<T, ValidationError> {
        self.validate(&input)?;
        if let Value::Object(map) = &mut input {
            self.root.normalize_map(map);
        }
        serde_json::from_value(input).map_err(|e| {
            ValidationError::new(
                self.entity,
                vec![Violation::new(
                    "",
                    ViolationKind::Undecodable {
                        reason: e.to_string(),
                    },
                )],
            )
        })
    }

    /// Render the published JSON Schema document
    #[must_use]
    pub fn json_schema(&self) -> JsonSchema {
        JsonSchema {
            schema_type: "object".to_owned(),
            properties: Some(self.root.property_map()),
            required: Some(self.root.required_names()),
        }
    }
}

fn join_field(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_owned()
    } else {
        format!("{path}.{field}")
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The value as an `i64` when it has no fractional part and fits the range
fn integral_value(number: &Number) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn is_iso_date(raw: &str) -> bool {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() || DateTime::parse_from_rfc3339(raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> EntitySchema {
        EntitySchema::new(
            "sample",
            ObjectSchema::new(vec![
                FieldSchema::required("name", SchemaNode::String, "Name"),
                FieldSchema::required("count", SchemaNode::Integer, "Count"),
                FieldSchema::optional("link", SchemaNode::Url, "Link"),
                FieldSchema::required(
                    "items",
                    SchemaNode::array_of(SchemaNode::one_of(["a", "b"])),
                    "Items",
                ),
            ]),
        )
    }

    #[test]
    fn test_collects_every_violation_with_paths() {
        let err = sample()
            .validate(&json!({"count": 1.5, "link": "not a url", "items": ["a", "z", 3]}))
            .unwrap_err();

        assert_eq!(err.entity, "sample");
        assert!(err.has_violation_at("name"));
        assert!(err.has_violation_at("count"));
        assert!(err.has_violation_at("link"));
        assert!(err.has_violation_at("items[1]"));
        assert!(err.has_violation_at("items[2]"));
        assert!(!err.has_violation_at("items[0]"));
        assert_eq!(err.violations.len(), 5);
    }

    #[test]
    fn test_optional_field_may_be_absent() {
        assert!(sample()
            .validate(&json!({"name": "x", "count": 2, "items": []}))
            .is_ok());
    }

    #[test]
    fn test_null_is_a_type_mismatch() {
        let err = sample()
            .validate(&json!({"name": null, "count": 2, "items": []}))
            .unwrap_err();
        assert_eq!(
            err.violations[0].kind,
            ViolationKind::TypeMismatch {
                expected: "string".to_owned(),
                found: "null".to_owned()
            }
        );
    }

    #[test]
    fn test_non_object_root() {
        let err = sample().validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].path, "");
    }

    #[test]
    fn test_integral_floats_count_as_integers() {
        let parsed: Value = sample()
            .parse(json!({"name": "x", "count": 3.0, "items": []}))
            .unwrap();
        assert_eq!(parsed["count"], json!(3));
        assert!(parsed["count"].is_i64());

        for rejected in [json!(3.5), json!(1e300), json!(u64::MAX)] {
            let err = sample()
                .validate(&json!({"name": "x", "count": rejected, "items": []}))
                .unwrap_err();
            assert_eq!(err.violations[0].kind, ViolationKind::NotAnInteger);
        }
    }

    #[test]
    fn test_iso_dates() {
        assert!(is_iso_date("2025-01-31"));
        assert!(is_iso_date("2025-01-31T08:30:00Z"));
        assert!(is_iso_date("2025-01-31T08:30:00+08:00"));
        assert!(!is_iso_date("2025-02-30"));
        assert!(!is_iso_date("31/01/2025"));
    }

    #[test]
    fn test_json_schema_rendering() {
        let schema = sample().json_schema();
        let json = serde_json::to_value(&schema).unwrap();

        assert_eq!(json["type"], "object");
        assert_eq!(json["required"], json!(["name", "count", "items"]));
        assert_eq!(json["properties"]["link"]["format"], "uri");
        assert_eq!(json["properties"]["count"]["type"], "integer");
        assert_eq!(json["properties"]["items"]["items"]["enum"], json!(["a", "b"]));
        assert_eq!(json["properties"]["name"]["description"], "Name");
    }
}
