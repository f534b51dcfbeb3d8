// ABOUTME: Shared constants for tool identifiers, placeholder views, and defaults
// ABOUTME: Single source for names used by both the tool runtime and renderers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Tool routing keys used by the agent runtime for selection
pub mod tools {
    /// Recipe card tool
    pub const RECIPE: &str = "recipe";
    /// Achievement badge wall tool
    pub const ACHIEVEMENT: &str = "achievement";
}

/// Loading view identifiers carried by placeholder instructions
pub mod views {
    /// Skeleton shown while a recipe card is prepared
    pub const RECIPE_LOADING: &str = "recipe_loading";
    /// Skeleton shown while an achievement wall is prepared
    pub const ACHIEVEMENT_LOADING: &str = "achievement_loading";
}

/// Defaults applied when the environment does not override them
pub mod defaults {
    /// Event channel every staged-UI tool publishes on
    pub const UI_CHANNEL: &str = "custom_ui_yield";
    /// Capacity of each conversation's broadcast stream
    pub const EVENT_BUFFER_SIZE: usize = 64;
}

/// Terminal status values reported back to the agent runtime
pub mod status {
    /// Invocation completed and the final view was emitted
    pub const SUCCESS: &str = "success";
}
