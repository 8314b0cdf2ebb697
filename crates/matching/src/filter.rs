use pantrymatch_shared::normalize;
use pantrymatch_shared::recipe::Recipe;

use crate::lookup::RankedRecipe;

/// Narrows a ranked list without reordering it.
///
/// Blank `query` and `cuisine` values are treated as unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    /// Case-insensitive substring of the title, description or any tag.
    pub query: Option<String>,
    /// Case-insensitive substring of the cuisine.
    pub cuisine: Option<String>,
    /// Highest recipe skill requirement to keep.
    pub max_skill: Option<u8>,
}

impl RecipeFilter {
    pub fn is_empty(&self) -> bool {
        blank_to_none(&self.query).is_none()
            && blank_to_none(&self.cuisine).is_none()
            && self.max_skill.is_none()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(query) = blank_to_none(&self.query) {
            let in_text = normalize(&recipe.title).contains(&query)
                || normalize(&recipe.description).contains(&query)
                || recipe.tags.iter().any(|tag| normalize(tag).contains(&query));

            if !in_text {
                return false;
            }
        }

        if let Some(cuisine) = blank_to_none(&self.cuisine) {
            if !normalize(&recipe.cuisine).contains(&cuisine) {
                return false;
            }
        }

        match self.max_skill {
            Some(max_skill) => recipe.skill_required <= max_skill,
            None => true,
        }
    }

    pub fn apply<'r>(&self, ranked: Vec<RankedRecipe<'r>>) -> Vec<RankedRecipe<'r>> {
        if self.is_empty() {
            return ranked;
        }

        ranked
            .into_iter()
            .filter(|entry| self.matches(entry.recipe))
            .collect()
    }
}

fn blank_to_none(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(normalize)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(title: &str, cuisine: &str, tags: &[&str], skill: u8) -> Recipe {
        Recipe {
            title: title.to_owned(),
            description: format!("A tasty {title}"),
            cuisine: cuisine.to_owned(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            skill_required: skill,
            ..Recipe::new(title.to_lowercase().replace(' ', "-"))
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = RecipeFilter {
            query: Some("   ".to_owned()),
            ..Default::default()
        };

        assert!(filter.is_empty());
        assert!(filter.matches(&recipe("Anything", "", &[], 5)));
    }

    #[test]
    fn test_query_searches_title_and_tags() {
        let filter = RecipeFilter {
            query: Some("Quick".to_owned()),
            ..Default::default()
        };

        assert!(filter.matches(&recipe("Quick Stir Fry", "asian", &[], 2)));
        assert!(filter.matches(&recipe("Stir Fry", "asian", &["quick-meals"], 2)));
        assert!(!filter.matches(&recipe("Slow Roast", "american", &["sunday"], 3)));
    }

    #[test]
    fn test_cuisine_and_skill() {
        let filter = RecipeFilter {
            cuisine: Some("Mediterranean".to_owned()),
            max_skill: Some(3),
            ..Default::default()
        };

        assert!(filter.matches(&recipe("Stuffed Peppers", "Mediterranean", &[], 3)));
        assert!(!filter.matches(&recipe("Stuffed Peppers", "Mediterranean", &[], 4)));
        assert!(!filter.matches(&recipe("Arrabbiata", "Italian", &[], 2)));
    }
}
