// ABOUTME: Recipe card tool rendering a validated RecipeDocument through the staged protocol
// ABOUTME: Step ordinals are not required to be unique or contiguous; anomalies are logged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use tracing::warn;

use crate::constants::tools;
use crate::errors::IntegrityError;
use crate::models::RecipeDocument;
use crate::schema::{recipe_schema, EntitySchema};
use crate::tools::staged::{StagedUiTool, UiEntity};
use crate::tools::traits::ToolCapabilities;
use crate::ui::{LoadingView, RenderPayload};

/// Recipe card tool
pub type RecipeTool = StagedUiTool<RecipeDocument>;

impl UiEntity for RecipeDocument {
    const TOOL_NAME: &'static str = tools::RECIPE;
    const TOOL_DESCRIPTION: &'static str = "Generate a healthy recipe card with title, \
        description, ingredients, nutrition facts, and cooking steps. Use when the user asks \
        for healthy meals, weight-loss recipes, or high-protein dishes.";
    const LOADING_VIEW: LoadingView = LoadingView::Recipe;

    fn capabilities() -> ToolCapabilities {
        ToolCapabilities::RENDERS_UI | ToolCapabilities::RECIPES | ToolCapabilities::INTEGRITY_CHECKED
    }

    fn schema() -> EntitySchema {
        recipe_schema()
    }

    fn check_integrity(&self) -> Result<(), IntegrityError> {
        let mut seen = HashSet::with_capacity(self.steps.len());
        let duplicates: Vec<i64> = self
            .steps
            .iter()
            .filter(|s| !seen.insert(s.step))
            .map(|s| s.step)
            .collect();
        if !duplicates.is_empty() {
            warn!(recipe = %self.title, ?duplicates, "Recipe has duplicate step ordinals");
        }

        let contiguous = self
            .ordered_steps()
            .windows(2)
            .all(|pair| pair[0].step.abs_diff(pair[1].step) <= 1);
        if !contiguous {
            warn!(recipe = %self.title, "Recipe step ordinals are not contiguous");
        }

        Ok(())
    }

    fn success_message(&self) -> String {
        format!("Recipe '{}' was generated and displayed.", self.title)
    }

    fn into_payload(self) -> RenderPayload {
        RenderPayload::Recipe { data: self }
    }
}
