// ABOUTME: Achievement badge tool rendering a validated AchievementCollection
// ABOUTME: Integrity stage enforces 0 <= progress <= maxProgress for every badge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashSet;

use tracing::warn;

use crate::constants::tools;
use crate::errors::IntegrityError;
use crate::models::AchievementCollection;
use crate::schema::{achievement_schema, EntitySchema, ACHIEVEMENT_ENTITY};
use crate::tools::staged::{StagedUiTool, UiEntity};
use crate::tools::traits::ToolCapabilities;
use crate::ui::{LoadingView, RenderPayload};

/// Achievement badge tool
pub type AchievementTool = StagedUiTool<AchievementCollection>;

impl UiEntity for AchievementCollection {
    const TOOL_NAME: &'static str = tools::ACHIEVEMENT;
    const TOOL_DESCRIPTION: &'static str = "Display a collection of earned achievement badges \
        with icon, level, earned date, and optional progress. Use when the user reaches a \
        milestone or asks to see their achievements.";
    const LOADING_VIEW: LoadingView = LoadingView::Achievement;

    fn capabilities() -> ToolCapabilities {
        ToolCapabilities::RENDERS_UI
            | ToolCapabilities::ACHIEVEMENTS
            | ToolCapabilities::INTEGRITY_CHECKED
    }

    fn schema() -> EntitySchema {
        achievement_schema()
    }

    fn check_integrity(&self) -> Result<(), IntegrityError> {
        for (index, badge) in self.badges.iter().enumerate() {
            let (Some(progress), Some(max_progress)) = (badge.progress, badge.max_progress) else {
                continue;
            };
            let field = format!("badges[{index}].progress");
            if progress < 0.0 {
                return Err(IntegrityError::new(
                    ACHIEVEMENT_ENTITY,
                    field,
                    format!("progress {progress} is negative"),
                ));
            }
            if progress > max_progress {
                return Err(IntegrityError::new(
                    ACHIEVEMENT_ENTITY,
                    field,
                    format!("progress {progress} exceeds maxProgress {max_progress}"),
                ));
            }
        }

        let mut ids = HashSet::with_capacity(self.badges.len());
        for badge in &self.badges {
            if !ids.insert(badge.id.as_str()) {
                warn!(collection = %self.title, badge_id = %badge.id, "Duplicate badge id");
            }
        }

        Ok(())
    }

    fn success_message(&self) -> String {
        format!("Achievements displayed. {}", self.share_summary())
    }

    fn into_payload(self) -> RenderPayload {
        RenderPayload::Achievement { data: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Badge, BadgeIcon, BadgeLevel};

    fn collection(progress: Option<f64>, max_progress: Option<f64>) -> AchievementCollection {
        AchievementCollection {
            title: "Spring".to_owned(),
            description: None,
            badges: vec![Badge {
                id: "b1".to_owned(),
                title: "10k".to_owned(),
                description: "Ran 10k".to_owned(),
                icon: BadgeIcon::Medal,
                category: "running".to_owned(),
                earned_date: "2025-04-01".to_owned(),
                level: BadgeLevel::Silver,
                progress,
                max_progress,
            }],
        }
    }

    #[test]
    fn test_progress_bounds() {
        assert!(collection(Some(10.0), Some(10.0)).check_integrity().is_ok());
        assert!(collection(Some(0.0), Some(10.0)).check_integrity().is_ok());
        assert!(collection(Some(50.0), None).check_integrity().is_ok());

        let err = collection(Some(11.0), Some(10.0)).check_integrity().unwrap_err();
        assert_eq!(err.field, "badges[0].progress");

        assert!(collection(Some(-1.0), Some(10.0)).check_integrity().is_err());
    }
}
