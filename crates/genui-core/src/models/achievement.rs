// ABOUTME: Achievement collection model with badges, icons, levels, and progress
// ABOUTME: Icons and levels are closed enumerations matched exhaustively by renderers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Badge icon. Adding a variant is a compile-visible change for every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeIcon {
    /// Ribbon award
    Award,
    /// Star
    Star,
    /// Trophy cup
    Trophy,
    /// Medal
    Medal,
    /// Target
    Target,
    /// Lightning bolt
    Zap,
    /// Check mark
    Check,
}

impl BadgeIcon {
    /// Every icon, in wire order
    pub const ALL: [Self; 7] = [
        Self::Award,
        Self::Star,
        Self::Trophy,
        Self::Medal,
        Self::Target,
        Self::Zap,
        Self::Check,
    ];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Award => "award",
            Self::Star => "star",
            Self::Trophy => "trophy",
            Self::Medal => "medal",
            Self::Target => "target",
            Self::Zap => "zap",
            Self::Check => "check",
        }
    }
}

impl fmt::Display for BadgeIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge tier, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeLevel {
    /// Bronze
    Bronze,
    /// Silver
    Silver,
    /// Gold
    Gold,
    /// Platinum
    Platinum,
}

impl BadgeLevel {
    /// Every level, lowest first
    pub const ALL: [Self; 4] = [Self::Bronze, Self::Silver, Self::Gold, Self::Platinum];

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for BadgeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One earned (or in-progress) badge.
///
/// `id` must be unique within its collection; that is the renderer's concern.
/// When both `progress` and `max_progress` are set, `0 <= progress <= max_progress`
/// is expected but only checked by the integrity stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Identifier, unique within the collection
    pub id: String,
    /// Badge title
    pub title: String,
    /// What the badge is for
    pub description: String,
    /// Icon
    pub icon: BadgeIcon,
    /// Free-form grouping
    pub category: String,
    /// ISO-8601 date the badge was earned, kept verbatim
    pub earned_date: String,
    /// Tier
    pub level: BadgeLevel,
    /// Progress towards the next tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    /// Progress ceiling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_progress: Option<f64>,
}

impl Badge {
    /// Fraction of `max_progress` reached, capped at 1.0.
    ///
    /// `None` unless both values are present and the ceiling is positive.
    #[must_use]
    pub fn progress_ratio(&self) -> Option<f64> {
        match (self.progress, self.max_progress) {
            (Some(progress), Some(max)) if max > 0.0 => Some((progress / max).min(1.0)),
            _ => None,
        }
    }
}

/// A titled set of badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementCollection {
    /// Collection title
    pub title: String,
    /// Optional subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Badges in display order
    pub badges: Vec<Badge>,
}

impl AchievementCollection {
    /// One-line text used when the collection is shared as plain text
    #[must_use]
    pub fn share_summary(&self) -> String {
        let count = self.badges.len();
        let noun = if count == 1 { "badge" } else { "badges" };
        format!("{}: earned {count} {noun}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(progress: Option<f64>, max_progress: Option<f64>) -> Badge {
        Badge {
            id: "b1".to_owned(),
            title: "First Run".to_owned(),
            description: "Completed a run".to_owned(),
            icon: BadgeIcon::Trophy,
            category: "running".to_owned(),
            earned_date: "2025-03-01".to_owned(),
            level: BadgeLevel::Gold,
            progress,
            max_progress,
        }
    }

    #[test]
    fn test_progress_ratio_caps_at_one() {
        assert_eq!(badge(Some(5.0), Some(10.0)).progress_ratio(), Some(0.5));
        assert_eq!(badge(Some(15.0), Some(10.0)).progress_ratio(), Some(1.0));
        assert_eq!(badge(Some(5.0), None).progress_ratio(), None);
        assert_eq!(badge(Some(5.0), Some(0.0)).progress_ratio(), None);
    }

    #[test]
    fn test_enum_wire_names_match_as_str() {
        for icon in BadgeIcon::ALL {
            assert_eq!(
                serde_json::to_value(icon).unwrap(),
                serde_json::Value::String(icon.as_str().to_owned())
            );
        }
        for level in BadgeLevel::ALL {
            assert_eq!(
                serde_json::to_value(level).unwrap(),
                serde_json::Value::String(level.as_str().to_owned())
            );
            assert_eq!(level.label().to_lowercase(), level.as_str());
            assert_ne!(level.label(), level.as_str());
        }
        assert_eq!(BadgeLevel::Platinum.label(), "Platinum");
    }

    #[test]
    fn test_optional_fields_omitted_on_wire() {
        let json = serde_json::to_value(badge(None, None)).unwrap();
        assert!(json.get("progress").is_none());
        assert!(json.get("maxProgress").is_none());
        assert_eq!(json["earnedDate"], "2025-03-01");
    }

    #[test]
    fn test_share_summary() {
        let collection = AchievementCollection {
            title: "Spring".to_owned(),
            description: None,
            badges: vec![badge(None, None), badge(None, None)],
        };
        assert_eq!(collection.share_summary(), "Spring: earned 2 badges");
    }
}
