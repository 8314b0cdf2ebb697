use serde::{Deserialize, Serialize};
use validator::Validate;

/// Nutrition values attached to a recipe record.
///
/// Any value may be missing; a missing value contributes nothing to the
/// nutrition sub-score instead of failing the whole match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nutrition {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct RecipeIngredient {
    #[validate(length(min = 1))]
    pub name: String,
    /// Compared as a raw number against the pantry quantity, units are never converted.
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub optional: bool,
    /// Recipe-authored alternatives, kept for display.
    #[serde(default)]
    pub substitutions: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            optional: false,
            substitutions: Vec::new(),
            category: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct Recipe {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(nested)]
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Total time in minutes.
    pub time_total: u32,
    #[serde(default)]
    pub time_active: u32,
    #[validate(range(min = 1, max = 5))]
    pub skill_required: u8,
    #[serde(default)]
    pub cookware_required: Vec<String>,
    #[validate(range(min = 1))]
    #[serde(default = "default_servings")]
    pub servings: u16,
    #[serde(default)]
    pub nutrition: Nutrition,
    /// Lowercase tags such as "gluten", "dairy" or "nuts".
    #[serde(default)]
    pub dietary_flags: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub rating: f32,
}

fn default_servings() -> u16 {
    1
}

impl Recipe {
    /// Bare recipe with the given id, used as a starting point by builders and tests.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: String::new(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            time_total: 0,
            time_active: 0,
            skill_required: 1,
            cookware_required: Vec::new(),
            servings: default_servings(),
            nutrition: Nutrition::default(),
            dietary_flags: Vec::new(),
            tags: Vec::new(),
            cuisine: String::new(),
            rating: 0.0,
        }
    }
}
