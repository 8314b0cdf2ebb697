//! The eight sub-score formulas, each on a 0-100 scale.

use std::collections::HashSet;

use pantrymatch_shared::normalize;
use pantrymatch_shared::profile::{MacroGoals, UserProfile};
use pantrymatch_shared::recipe::{Nutrition, Recipe};

/// `100 × count / total`, where an empty recipe counts as fully covered.
pub fn coverage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }

    100.0 * count as f64 / total as f64
}

/// Zero on any allergy or restriction hit, otherwise a soft penalty of up to
/// 50 points for the share of ingredients matching a dislike.
pub fn dietary(recipe: &Recipe, profile: &UserProfile) -> f64 {
    let flags: HashSet<String> = recipe.dietary_flags.iter().map(|f| normalize(f)).collect();

    let violated = profile
        .allergies
        .iter()
        .chain(profile.dietary_restrictions.iter())
        .map(|restriction| normalize(restriction))
        .any(|restriction| !restriction.is_empty() && flags.contains(&restriction));

    if violated {
        return 0.0;
    }

    if recipe.ingredients.is_empty() {
        return 100.0;
    }

    let dislikes: Vec<String> = profile
        .dislikes
        .iter()
        .map(|d| normalize(d))
        .filter(|d| !d.is_empty())
        .collect();

    let hits = recipe
        .ingredients
        .iter()
        .filter(|ingredient| {
            let name = normalize(&ingredient.name);
            dislikes.iter().any(|dislike| name.contains(dislike.as_str()))
        })
        .count();

    let penalty = 50.0 * hits as f64 / recipe.ingredients.len() as f64;
    (100.0 - penalty).max(0.0)
}

/// Two points per minute over budget, never below 20.
pub fn time(time_total: u32, time_budget: u32) -> f64 {
    if time_total <= time_budget {
        return 100.0;
    }

    let over = f64::from(time_total - time_budget);
    (100.0 - (over * 2.0).min(80.0)).max(20.0)
}

pub fn cookware(required: &[String], available: &[String]) -> f64 {
    if required.is_empty() {
        return 100.0;
    }

    let available: HashSet<String> = available.iter().map(|c| normalize(c)).collect();
    let owned = required
        .iter()
        .filter(|c| available.contains(&normalize(c)))
        .count();

    100.0 * owned as f64 / required.len() as f64
}

/// 25 points per level the recipe exceeds the cook's skill.
pub fn skill(required: u8, user_skill: u8) -> f64 {
    if user_skill >= required {
        return 100.0;
    }

    let gap = f64::from(required - user_skill);
    (100.0 - 25.0 * gap).max(0.0)
}

/// Average closeness of calories and protein to one meal's share of the daily goals.
pub fn nutrition(nutrition: &Nutrition, goals: &MacroGoals, meals_per_day: f64) -> f64 {
    let calories = closeness(nutrition.calories, goals.calories, meals_per_day, 10.0);
    let protein = closeness(nutrition.protein, goals.protein, meals_per_day, 5.0);

    (calories + protein) / 2.0
}

fn closeness(value: Option<f64>, daily_goal: Option<f64>, meals_per_day: f64, divisor: f64) -> f64 {
    match (value, daily_goal) {
        (Some(value), Some(goal)) if value.is_finite() && goal.is_finite() => {
            let target = goal / meals_per_day;
            (100.0 - (value - target).abs() / divisor).max(0.0)
        }
        _ => 0.0,
    }
}

/// 15 points per ingredient that would have to be bought.
pub fn cost(missing: usize) -> f64 {
    if missing == 0 {
        return 100.0;
    }

    (100.0 - 15.0 * missing as f64).max(0.0)
}
