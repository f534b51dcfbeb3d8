// ABOUTME: Module containing the built-in generative UI tool implementations.
// ABOUTME: Each submodule is one renderable entity with feature flag support.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `recipe` - Recipe card
//! - `achievement` - Achievement badge wall
//!
//! Each tool is conditionally compiled based on feature flags.

// Recipe card tool
#[cfg(feature = "tools-recipe")]
/// Recipe card tool
pub mod recipe;

// Achievement badge tool
#[cfg(feature = "tools-achievement")]
/// Achievement badge wall tool
pub mod achievement;
