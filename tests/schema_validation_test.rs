// ABOUTME: Integration tests for recipe and achievement schema validation
// ABOUTME: Covers missing fields, type mismatches, URLs, dates, enums, and JSON Schema output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{achievement_input, oat_bowl};
use genui_tools::errors::{AppError, ErrorCode, ViolationKind};
use genui_tools::models::{AchievementCollection, BadgeIcon, BadgeLevel, RecipeDocument};
use genui_tools::schema::{achievement_schema, recipe_schema};
use serde_json::json;

// ============================================================================
// Recipe
// ============================================================================

#[test]
fn test_valid_recipe_parses() {
    let recipe: RecipeDocument = recipe_schema().parse(oat_bowl()).unwrap();
    assert_eq!(recipe.title, "Oat Bowl");
    assert_eq!(recipe.ingredients[0].name, "oats");
    assert!((recipe.ingredients[0].amount - 50.0).abs() < f64::EPSILON);
    assert_eq!(recipe.steps[0].step, 1);
    assert_eq!(recipe.tags, vec!["quick".to_owned()]);
}

#[test]
fn test_missing_image_url() {
    let mut input = oat_bowl();
    input.as_object_mut().unwrap().remove("imageUrl");

    let err = recipe_schema().validate(&input).unwrap_err();

    assert_eq!(err.entity, "recipe");
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].path, "imageUrl");
    assert_eq!(err.violations[0].kind, ViolationKind::MissingField);
    assert_eq!(err.code(), ErrorCode::MissingRequiredField);
}

#[test]
fn test_relative_image_url_is_malformed() {
    let mut input = oat_bowl();
    input["imageUrl"] = json!("/images/a.jpg");

    let err = recipe_schema().validate(&input).unwrap_err();

    assert!(matches!(
        err.violations[0].kind,
        ViolationKind::MalformedUrl { .. }
    ));
    assert_eq!(err.code(), ErrorCode::InvalidFormat);
}

#[test]
fn test_nested_type_mismatch_reports_path() {
    let mut input = oat_bowl();
    input["ingredients"][0]["amount"] = json!("fifty");
    input["calories"] = json!("200");

    let err = recipe_schema().validate(&input).unwrap_err();

    assert!(err.has_violation_at("ingredients[0].amount"));
    assert!(err.has_violation_at("calories"));
    assert_eq!(
        err.violations
            .iter()
            .find(|v| v.path == "calories")
            .unwrap()
            .kind,
        ViolationKind::TypeMismatch {
            expected: "number".to_owned(),
            found: "string".to_owned()
        }
    );
}

#[test]
fn test_unknown_fields_are_ignored() {
    let mut input = oat_bowl();
    input["chef"] = json!("Ana");

    let recipe: RecipeDocument = recipe_schema().parse(input).unwrap();
    assert_eq!(recipe.title, "Oat Bowl");
}

#[test]
fn test_duplicate_step_ordinals_pass_validation() {
    let mut input = oat_bowl();
    input["steps"] = json!([
        {"step": 2, "description": "serve"},
        {"step": 1, "description": "boil"},
        {"step": 1, "description": "stir"}
    ]);

    let recipe: RecipeDocument = recipe_schema().parse(input).unwrap();
    let ordered: Vec<&str> = recipe
        .ordered_steps()
        .iter()
        .map(|s| s.description.as_str())
        .collect();
    assert_eq!(ordered, vec!["boil", "stir", "serve"]);
}

#[test]
fn test_validation_error_to_app_error() {
    let err = recipe_schema().validate(&json!({"title": 1})).unwrap_err();
    let app: AppError = err.into();

    assert_eq!(app.details["entity"], "recipe");
    assert!(app.details["violations"].as_array().unwrap().len() > 1);
}

// ============================================================================
// Achievement
// ============================================================================

#[test]
fn test_valid_achievement_parses() {
    let collection: AchievementCollection = achievement_schema()
        .parse(achievement_input(Some(2.0), Some(4.0)))
        .unwrap();

    let badge = &collection.badges[0];
    assert_eq!(badge.icon, BadgeIcon::Trophy);
    assert_eq!(badge.level, BadgeLevel::Gold);
    assert_eq!(badge.earned_date, "2025-03-14");
    assert_eq!(badge.progress_ratio(), Some(0.5));
    assert_eq!(collection.share_summary(), "Spring Season: earned 1 badge");
}

#[test]
fn test_unknown_icon_lists_allowed_values() {
    let mut input = achievement_input(None, None);
    input["badges"][0]["icon"] = json!("crown");

    let err = achievement_schema().validate(&input).unwrap_err();

    match &err.violations[0].kind {
        ViolationKind::NotInEnum { allowed } => {
            assert_eq!(allowed.len(), BadgeIcon::ALL.len());
            assert!(allowed.contains(&"zap".to_owned()));
        }
        other => panic!("expected enum violation, got {other:?}"),
    }
    assert_eq!(err.violations[0].path, "badges[0].icon");
}

#[test]
fn test_earned_date_formats() {
    for date in ["2025-03-14", "2025-03-14T09:30:00Z"] {
        let mut input = achievement_input(None, None);
        input["badges"][0]["earnedDate"] = json!(date);
        let collection: AchievementCollection = achievement_schema().parse(input).unwrap();
        assert_eq!(collection.badges[0].earned_date, date);
    }

    let mut input = achievement_input(None, None);
    input["badges"][0]["earnedDate"] = json!("March 14th");
    let err = achievement_schema().validate(&input).unwrap_err();
    assert_eq!(err.violations[0].kind, ViolationKind::MalformedDate);
}

#[test]
fn test_null_optional_progress_is_rejected() {
    let mut input = achievement_input(None, None);
    input["badges"][0]["progress"] = json!(null);

    let err = achievement_schema().validate(&input).unwrap_err();
    assert!(err.has_violation_at("badges[0].progress"));
}

#[test]
fn test_progress_over_max_passes_structural_validation() {
    assert!(achievement_schema()
        .validate(&achievement_input(Some(9.0), Some(5.0)))
        .is_ok());
}

// ============================================================================
// Published JSON Schema
// ============================================================================

#[test]
fn test_recipe_json_schema() {
    let schema = serde_json::to_value(recipe_schema().json_schema()).unwrap();

    assert_eq!(schema["type"], "object");
    assert_eq!(schema["required"].as_array().unwrap().len(), 15);
    assert_eq!(schema["properties"]["imageUrl"]["format"], "uri");
    assert_eq!(schema["properties"]["steps"]["items"]["properties"]["step"]["type"], "integer");
    assert_eq!(
        schema["properties"]["ingredients"]["items"]["required"],
        json!(["name", "amount", "unit"])
    );
}

#[test]
fn test_achievement_json_schema_optional_fields() {
    let schema = serde_json::to_value(achievement_schema().json_schema()).unwrap();

    assert_eq!(schema["required"], json!(["title", "badges"]));
    let badge_required = schema["properties"]["badges"]["items"]["required"]
        .as_array()
        .unwrap();
    assert!(!badge_required.contains(&json!("progress")));
    assert!(!badge_required.contains(&json!("maxProgress")));
    assert!(badge_required.contains(&json!("earnedDate")));
}
