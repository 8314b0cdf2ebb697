mod expiring;
mod rank;
mod score;
mod substitutes;

pub use expiring::*;
pub use rank::*;
pub use score::*;
pub use substitutes::*;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use pantrymatch_shared::pantry::PantryItem;
use pantrymatch_shared::profile::UserProfile;
use pantrymatch_shared::recipe::Recipe;

use crate::config::Config;
use crate::data;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Files every scoring command reads.
#[derive(Args, Clone, Debug)]
pub struct MatchInputs {
    /// Recipe catalog (JSON array of recipes)
    #[arg(long)]
    pub recipes: PathBuf,

    /// Pantry snapshot (JSON array of pantry items)
    #[arg(long)]
    pub pantry: PathBuf,

    /// Cooking preferences (JSON object), defaults apply when omitted
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Minutes available to cook (overrides profile and config)
    #[arg(long)]
    pub time_budget: Option<u32>,
}

pub struct LoadedInputs {
    pub recipes: Vec<Recipe>,
    pub pantry: Vec<PantryItem>,
    pub profile: UserProfile,
    pub time_budget: u32,
}

impl MatchInputs {
    pub async fn load(&self, config: &Config) -> Result<LoadedInputs> {
        let (recipes, pantry) = tokio::try_join!(
            data::load_recipes(&self.recipes),
            data::load_pantry(&self.pantry)
        )?;

        let profile = match &self.profile {
            Some(path) => data::load_preferences(path).await?.to_profile(),
            None => UserProfile::default(),
        };

        let time_budget = self
            .time_budget
            .or(profile.default_time_budget)
            .unwrap_or(config.matching.default_time_budget);

        Ok(LoadedInputs {
            recipes,
            pantry,
            profile,
            time_budget,
        })
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_owned();
    }

    let mut short: String = value.chars().take(width.saturating_sub(1)).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Pasta", 10), "Pasta");
        assert_eq!(truncate("Mediterranean Stuffed Peppers", 10), "Mediterra…");
    }
}
