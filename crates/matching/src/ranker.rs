use pantrymatch_shared::pantry::PantryItem;
use pantrymatch_shared::profile::UserProfile;
use pantrymatch_shared::recipe::Recipe;

use crate::engine::{MatchScore, ScoringEngine};
use crate::options::DEFAULT_LIMIT;

impl ScoringEngine<'_> {
    /// Scores every recipe and keeps the best `limit`, highest total first.
    ///
    /// Recipes with equal totals keep their input order.
    #[tracing::instrument(
        level = "debug",
        skip(self, recipes, pantry, profile),
        fields(recipes = recipes.len(), pantry = pantry.len())
    )]
    pub fn top_matches(
        &self,
        recipes: &[Recipe],
        pantry: &[PantryItem],
        profile: &UserProfile,
        time_budget: u32,
        limit: usize,
    ) -> Vec<MatchScore> {
        let mut matches: Vec<MatchScore> = recipes
            .iter()
            .map(|recipe| self.score(recipe, pantry, profile, time_budget))
            .collect();

        // `sort_by` is stable, ties stay in input order.
        matches.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        matches.truncate(limit);

        tracing::info!(
            returned = matches.len(),
            best = matches.first().map(|m| m.total_score),
            "ranking pass complete"
        );

        matches
    }
}

/// Ranks with the builtin catalog, default weights and the default limit.
pub fn top_matches(
    recipes: &[Recipe],
    pantry: &[PantryItem],
    profile: &UserProfile,
    time_budget: u32,
) -> Vec<MatchScore> {
    ScoringEngine::default().top_matches(recipes, pantry, profile, time_budget, DEFAULT_LIMIT)
}
