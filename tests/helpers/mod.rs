#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::{Value, json};

pub fn write_json(dir: &Path, name: &str, value: &Value) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec_pretty(value)?)?;

    Ok(path)
}

pub fn recipes() -> Value {
    json!([
        {
            "id": "garlic-rice",
            "title": "Garlic Rice",
            "description": "Fried rice with plenty of garlic.",
            "ingredients": [
                { "name": "Rice", "quantity": 1, "unit": "cups" },
                { "name": "Garlic", "quantity": 1, "unit": "bulb" }
            ],
            "time_total": 20,
            "skill_required": 1,
            "cookware_required": ["wok"],
            "tags": ["quick"],
            "cuisine": "Asian"
        },
        {
            "id": "honey-chicken",
            "title": "Honey Chicken",
            "ingredients": [
                { "name": "Chicken Thighs", "quantity": 1, "unit": "lbs" },
                { "name": "Honey", "quantity": 2, "unit": "tbsp" }
            ],
            "time_total": 40,
            "skill_required": 3,
            "cuisine": "American"
        },
        {
            "id": "souffle",
            "title": "Cheese Souffle",
            "ingredients": [
                { "name": "Eggs", "quantity": 6, "unit": "pieces" },
                { "name": "Gruyere", "quantity": 4, "unit": "oz" }
            ],
            "time_total": 90,
            "skill_required": 5,
            "cookware_required": ["oven", "ramekins"],
            "dietary_flags": ["dairy", "eggs"],
            "cuisine": "French"
        }
    ])
}

pub fn pantry() -> Value {
    json!([
        { "id": "1", "name": "rice", "quantity": 2, "unit": "cups", "location": "pantry", "expiry_date": "2024-06-01" },
        { "id": "2", "name": "Garlic", "quantity": 1, "unit": "bulb", "expiry_date": "2024-01-12" },
        { "id": "3", "name": "Chicken Breast", "quantity": 2, "unit": "lbs", "location": "fridge", "expiry_date": "2024-01-09" },
        { "id": "4", "name": "Maple Syrup", "quantity": 5, "unit": "tbsp" },
        { "id": "5", "name": "Eggs", "quantity": 4, "unit": "pieces", "location": "fridge", "expiry_date": "2024-01-16" }
    ])
}

pub fn preferences() -> Value {
    json!({
        "allergies": ["eggs"],
        "cooking_skill": "beginner",
        "max_cook_time": 30
    })
}
