// ABOUTME: Schema definitions for the recipe and achievement entities
// ABOUTME: Field names and nesting match the camelCase wire format of the core models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{BadgeIcon, BadgeLevel};

use super::{EntitySchema, FieldSchema, ObjectSchema, SchemaNode};

/// Entity name reported by recipe validation failures
pub const RECIPE_ENTITY: &str = "recipe";
/// Entity name reported by achievement validation failures
pub const ACHIEVEMENT_ENTITY: &str = "achievement";

fn number(name: &'static str, description: &'static str) -> FieldSchema {
    FieldSchema::required(name, SchemaNode::Number, description)
}

fn string(name: &'static str, description: &'static str) -> FieldSchema {
    FieldSchema::required(name, SchemaNode::String, description)
}

fn ingredient() -> SchemaNode {
    SchemaNode::Object(ObjectSchema::new(vec![
        string("name", "Ingredient name"),
        number("amount", "Quantity in the given unit"),
        string("unit", "Unit of measure, e.g. g, ml, tbsp"),
    ]))
}

fn step() -> SchemaNode {
    SchemaNode::Object(ObjectSchema::new(vec![
        FieldSchema::required("step", SchemaNode::Integer, "Step ordinal, starting at 1"),
        string("description", "What to do in this step"),
    ]))
}

/// Schema for `RecipeDocument`
#[must_use]
pub fn recipe_schema() -> EntitySchema {
    EntitySchema::new(
        RECIPE_ENTITY,
        ObjectSchema::new(vec![
            string("title", "Recipe title"),
            string("description", "One or two sentence description of the dish"),
            FieldSchema::required(
                "imageUrl",
                SchemaNode::Url,
                "Absolute URL of an image of the finished dish",
            ),
            FieldSchema::required(
                "ingredients",
                SchemaNode::array_of(ingredient()),
                "Ingredients in the order they are used",
            ),
            number("calories", "Energy per serving in kcal"),
            number("carbs", "Carbohydrates per serving in grams"),
            number("fat", "Fat per serving in grams"),
            number("fiber", "Fiber per serving in grams"),
            number("protein", "Protein per serving in grams"),
            number("sugar", "Sugar per serving in grams"),
            number("prepTime", "Preparation time in minutes"),
            number("cookTime", "Cooking time in minutes"),
            number("servings", "Number of servings"),
            FieldSchema::required("steps", SchemaNode::array_of(step()), "Cooking steps"),
            FieldSchema::required(
                "tags",
                SchemaNode::array_of(SchemaNode::String),
                "Labels such as vegetarian or quick",
            ),
        ]),
    )
}

fn badge() -> SchemaNode {
    SchemaNode::Object(ObjectSchema::new(vec![
        string("id", "Identifier, unique within the collection"),
        string("title", "Badge title"),
        string("description", "What the badge was awarded for"),
        FieldSchema::required(
            "icon",
            SchemaNode::one_of(BadgeIcon::ALL.map(BadgeIcon::as_str)),
            "Icon shown on the badge",
        ),
        string("category", "Grouping such as fitness or learning"),
        FieldSchema::required(
            "earnedDate",
            SchemaNode::Date,
            "Date the badge was earned (YYYY-MM-DD)",
        ),
        FieldSchema::required(
            "level",
            SchemaNode::one_of(BadgeLevel::ALL.map(BadgeLevel::as_str)),
            "Badge tier",
        ),
        FieldSchema::optional("progress", SchemaNode::Number, "Progress towards maxProgress"),
        FieldSchema::optional("maxProgress", SchemaNode::Number, "Progress ceiling"),
    ]))
}

/// Schema for `AchievementCollection`
#[must_use]
pub fn achievement_schema() -> EntitySchema {
    EntitySchema::new(
        ACHIEVEMENT_ENTITY,
        ObjectSchema::new(vec![
            string("title", "Collection title"),
            FieldSchema::optional("description", SchemaNode::String, "Optional subtitle"),
            FieldSchema::required("badges", SchemaNode::array_of(badge()), "Badges to display"),
        ]),
    )
}
