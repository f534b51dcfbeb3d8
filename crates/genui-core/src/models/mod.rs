// ABOUTME: Domain entities rendered by generative UI tools
// ABOUTME: Recipe documents and achievement collections with their nested types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Entities are immutable once constructed. Field names on the wire are
//! camelCase and fixed; there is no versioning field.

/// Achievement collections and badges
pub mod achievement;
/// Recipe documents, ingredients, and steps
pub mod recipe;

pub use achievement::{AchievementCollection, Badge, BadgeIcon, BadgeLevel};
pub use recipe::{Ingredient, RecipeDocument, Step};
