// ABOUTME: Core types for the generative UI tool workspace
// ABOUTME: Foundation crate with error handling, domain entities, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Generative UI Core
//!
//! Foundation crate shared by the tool runtime and anything that consumes
//! its render instructions. This crate is designed to change infrequently.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the invocation error taxonomy
//!   (validation, dispatch, data integrity, tool)
//! - **models**: Recipe and achievement entities carried by render instructions
//! - **constants**: Tool names, placeholder view names, and defaults

/// Unified error handling with standard error codes and domain-specific errors
pub mod errors;

/// Domain entities rendered by generative UI tools
pub mod models;

/// Shared constants (tool names, defaults)
pub mod constants;
