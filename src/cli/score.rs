use std::fmt::Write;

use anyhow::Result;
use clap::Args;
use pantrymatch_matching::{MatchScore, ScoringEngine, find_recipe};
use pantrymatch_shared::recipe::RecipeIngredient;

use super::{MatchInputs, OutputFormat};
use crate::config::Config;

#[derive(Args, Clone, Debug)]
pub struct ScoreArgs {
    /// Id of the recipe to score
    #[arg(long)]
    pub recipe_id: String,

    #[command(flatten)]
    pub inputs: MatchInputs,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[tracing::instrument(skip_all, fields(recipe_id = %args.recipe_id))]
pub async fn score(config: &Config, args: ScoreArgs) -> Result<String> {
    let inputs = args.inputs.load(config).await?;
    let recipe = find_recipe(&inputs.recipes, &args.recipe_id)?;

    let catalog = config.catalog();
    let engine = ScoringEngine::with_options(&catalog, config.scoring_options())?;
    let result = engine.score(recipe, &inputs.pantry, &inputs.profile, inputs.time_budget);

    match args.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => render_breakdown(&result),
    }
}

fn ingredient_names(ingredients: &[RecipeIngredient]) -> String {
    if ingredients.is_empty() {
        return "-".to_owned();
    }

    ingredients
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_breakdown(result: &MatchScore) -> Result<String> {
    let b = &result.breakdown;
    let mut out = String::new();

    writeln!(out, "{}: {}/100", result.recipe_id, result.total_score)?;
    writeln!(out)?;

    for (label, value) in [
        ("availability", b.availability),
        ("substitution", b.substitution),
        ("dietary", b.dietary),
        ("time", b.time),
        ("cookware", b.cookware),
        ("skill", b.skill),
        ("nutrition", b.nutrition),
        ("cost", b.cost),
    ] {
        writeln!(out, "  {label:<13}{value:>4}")?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "available:     {}",
        ingredient_names(&result.available_ingredients)
    )?;

    let substitutions = if result.substitutable_ingredients.is_empty() {
        "-".to_owned()
    } else {
        result
            .substitutable_ingredients
            .iter()
            .map(|s| format!("{} -> {}", s.ingredient.name, s.substitute))
            .collect::<Vec<_>>()
            .join(", ")
    };
    writeln!(out, "substitutable: {substitutions}")?;
    writeln!(
        out,
        "missing:       {}",
        ingredient_names(&result.missing_ingredients)
    )?;

    Ok(out)
}
