#![allow(dead_code)]

use pantrymatch_shared::pantry::PantryItem;
use pantrymatch_shared::profile::{MacroGoals, UserProfile};
use pantrymatch_shared::recipe::{Nutrition, Recipe, RecipeIngredient};

pub fn pantry(items: &[(&str, f64)]) -> Vec<PantryItem> {
    items
        .iter()
        .enumerate()
        .map(|(i, (name, quantity))| PantryItem::new((i + 1).to_string(), *name, *quantity))
        .collect()
}

pub fn recipe(id: &str, ingredients: &[(&str, f64)]) -> Recipe {
    Recipe {
        title: id.replace('-', " "),
        ingredients: ingredients
            .iter()
            .map(|(name, quantity)| RecipeIngredient::new(*name, *quantity, ""))
            .collect(),
        time_total: 30,
        skill_required: 2,
        ..Recipe::new(id)
    }
}

pub fn profile() -> UserProfile {
    UserProfile {
        dietary_restrictions: vec![],
        allergies: vec![],
        dislikes: vec![],
        macro_goals: MacroGoals::daily_default(),
        skill_level: 3,
        cookware: ["pot", "pan", "oven", "wok"].map(String::from).to_vec(),
        default_time_budget: None,
    }
}

/// Recipes modelled on a small household catalog.
pub fn catalog_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            title: "Lemon Herb Chicken".to_owned(),
            cuisine: "Mediterranean".to_owned(),
            time_total: 45,
            skill_required: 2,
            cookware_required: vec!["oven".to_owned(), "pan".to_owned()],
            nutrition: Nutrition {
                calories: Some(420.0),
                protein: Some(45.0),
                carbs: Some(12.0),
                fat: Some(18.0),
            },
            tags: vec!["healthy".to_owned(), "dinner".to_owned()],
            ..recipe(
                "lemon-herb-chicken",
                &[
                    ("chicken breast", 2.0),
                    ("lemon", 1.0),
                    ("fresh herbs", 1.0),
                    ("olive oil", 1.0),
                    ("garlic", 1.0),
                ],
            )
        },
        Recipe {
            title: "Mediterranean Stuffed Peppers".to_owned(),
            cuisine: "Mediterranean".to_owned(),
            time_total: 60,
            skill_required: 3,
            cookware_required: vec!["oven".to_owned()],
            nutrition: Nutrition {
                calories: Some(380.0),
                protein: Some(22.0),
                carbs: Some(40.0),
                fat: Some(14.0),
            },
            ..recipe(
                "mediterranean-stuffed-peppers",
                &[
                    ("bell peppers", 3.0),
                    ("rice", 1.0),
                    ("tomatoes", 2.0),
                    ("mozzarella cheese", 4.0),
                ],
            )
        },
        Recipe {
            title: "Spicy Arrabbiata".to_owned(),
            cuisine: "Italian".to_owned(),
            time_total: 25,
            skill_required: 2,
            cookware_required: vec!["pot".to_owned(), "pan".to_owned()],
            dietary_flags: vec!["gluten".to_owned()],
            nutrition: Nutrition {
                calories: Some(520.0),
                protein: Some(16.0),
                carbs: Some(88.0),
                fat: Some(12.0),
            },
            ..recipe(
                "spicy-arrabbiata",
                &[
                    ("pasta", 1.0),
                    ("canned tomatoes", 1.0),
                    ("garlic", 1.0),
                    ("chili flakes", 1.0),
                ],
            )
        },
        Recipe {
            title: "Beef Wellington".to_owned(),
            cuisine: "British".to_owned(),
            time_total: 150,
            skill_required: 5,
            cookware_required: vec!["oven".to_owned(), "food processor".to_owned()],
            ..recipe(
                "beef-wellington",
                &[
                    ("beef tenderloin", 2.0),
                    ("puff pastry", 1.0),
                    ("mushrooms", 8.0),
                    ("prosciutto", 6.0),
                ],
            )
        },
    ]
}

pub fn household_pantry() -> Vec<PantryItem> {
    pantry(&[
        ("Chicken Breast", 2.0),
        ("Bell Peppers", 3.0),
        ("Pasta", 1.0),
        ("Greek Yogurt", 2.0),
        ("Olive Oil", 1.0),
        ("Garlic", 1.0),
        ("Tomatoes", 4.0),
        ("Mozzarella Cheese", 8.0),
        ("Basil", 1.0),
        ("Rice", 2.0),
    ])
}
