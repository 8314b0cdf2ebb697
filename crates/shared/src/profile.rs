use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

/// Cookware assumed when the profile store does not track it.
pub const DEFAULT_COOKWARE: [&str; 4] = ["pot", "pan", "oven", "wok"];

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CookingSkill {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl CookingSkill {
    /// Numeric level compared against a recipe's 1-5 skill requirement.
    pub fn level(self) -> u8 {
        match self {
            CookingSkill::Beginner => 2,
            CookingSkill::Intermediate => 3,
            CookingSkill::Advanced => 4,
        }
    }
}

/// Daily macro targets. Missing values score zero for their nutrition term.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroGoals {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
}

impl MacroGoals {
    pub fn daily_default() -> Self {
        Self {
            calories: Some(2000.0),
            protein: Some(150.0),
            carbs: Some(200.0),
            fat: Some(70.0),
        }
    }
}

/// The matching-relevant view of a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<String>,
    /// Substrings, any ingredient containing one counts as disliked.
    pub dislikes: Vec<String>,
    pub macro_goals: MacroGoals,
    pub skill_level: u8,
    pub cookware: Vec<String>,
    pub default_time_budget: Option<u32>,
}

impl Default for UserProfile {
    fn default() -> Self {
        CookingPreferences::default().to_profile()
    }
}

/// Preferences as kept by the profile store, before defaults are applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CookingPreferences {
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<String>,
    pub dislikes: Vec<String>,
    pub cooking_skill: CookingSkill,
    #[validate(range(min = 1))]
    pub max_cook_time: Option<u32>,
    pub cookware: Option<Vec<String>>,
    pub macro_goals: Option<MacroGoals>,
}

impl CookingPreferences {
    pub fn to_profile(&self) -> UserProfile {
        let cookware = match &self.cookware {
            Some(cookware) => cookware.clone(),
            None => DEFAULT_COOKWARE.iter().map(|c| c.to_string()).collect(),
        };

        UserProfile {
            dietary_restrictions: self.dietary_restrictions.clone(),
            allergies: self.allergies.clone(),
            dislikes: self.dislikes.clone(),
            macro_goals: self
                .macro_goals
                .clone()
                .unwrap_or_else(MacroGoals::daily_default),
            skill_level: self.cooking_skill.level(),
            cookware,
            default_time_budget: self.max_cook_time,
        }
    }
}
