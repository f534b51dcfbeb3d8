// ABOUTME: JSON Schema wire types published to the agent runtime for tool selection
// ABOUTME: Defines ToolSchema, JsonSchema, and the recursive PropertySchema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tool descriptor as listed to the agent runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Routing key
    pub name: String,
    /// When to select this tool
    pub description: String,
    /// Shape of the input the tool accepts
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// Top-level JSON Schema document for a tool's input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Always `object` for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Field schemas by wire name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, PropertySchema>>,
    /// Required field names, in declaration order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// JSON Schema property definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type (`string`, `number`, `integer`, `array`, `object`)
    #[serde(rename = "type")]
    pub property_type: String,
    /// Field guidance for the model filling it in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// String format (`uri`, `date`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Closed set of accepted strings
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Element schema for arrays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<PropertySchema>>,
    /// Nested field schemas for objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, PropertySchema>>,
    /// Nested required fields for objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl PropertySchema {
    /// Bare property of the given JSON type
    #[must_use]
    pub fn of_type(property_type: &str) -> Self {
        Self {
            property_type: property_type.to_owned(),
            description: None,
            format: None,
            enum_values: None,
            items: None,
            properties: None,
            required: None,
        }
    }
}
