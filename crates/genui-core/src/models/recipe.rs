// ABOUTME: Recipe document model with ingredients, nutrition facts, and ordered steps
// ABOUTME: Provides read-only derived views used by recipe card renderers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One ingredient line. `unit` is free text ("g", "tbsp", "pinch").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Quantity in `unit`
    pub amount: f64,
    /// Unit of measure
    pub unit: String,
}

/// One cooking step. Ordinals are neither unique nor contiguous by contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Step ordinal
    pub step: i64,
    /// What to do
    pub description: String,
}

/// A complete recipe as rendered by the recipe card.
///
/// Nutrition values are grams, except `calories` (kcal). Times are minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDocument {
    /// Recipe title
    pub title: String,
    /// Short description
    pub description: String,
    /// Absolute URL of the hero image
    pub image_url: String,
    /// Ingredient lines in display order
    pub ingredients: Vec<Ingredient>,
    /// Energy (kcal)
    pub calories: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Protein (g)
    pub protein: f64,
    /// Sugar (g)
    pub sugar: f64,
    /// Preparation time (minutes)
    pub prep_time: f64,
    /// Cooking time (minutes)
    pub cook_time: f64,
    /// Number of servings
    pub servings: f64,
    /// Cooking steps as supplied
    pub steps: Vec<Step>,
    /// Labels such as "low-fat" or "vegetarian"
    pub tags: Vec<String>,
}

impl RecipeDocument {
    /// Preparation plus cooking time, in minutes
    #[must_use]
    pub fn total_time(&self) -> f64 {
        self.prep_time + self.cook_time
    }

    /// Steps sorted by ordinal. The sort is stable, so duplicate ordinals
    /// keep their input order.
    #[must_use]
    pub fn ordered_steps(&self) -> Vec<&Step> {
        let mut steps: Vec<&Step> = self.steps.iter().collect();
        steps.sort_by_key(|s| s.step);
        steps
    }
}
