use std::fmt::Write;

use anyhow::Result;
use clap::Args;
use pantrymatch_matching::{RankedRecipe, RecipeFilter, ScoringEngine, pair_with_recipes};

use super::{MatchInputs, OutputFormat, truncate};
use crate::config::Config;

#[derive(Args, Clone, Debug)]
pub struct RankArgs {
    #[command(flatten)]
    pub inputs: MatchInputs,

    /// Maximum number of matches (overrides config)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Keep recipes whose title, description or tags contain this text
    #[arg(long)]
    pub query: Option<String>,

    /// Keep recipes whose cuisine contains this text
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Keep recipes at or below this skill requirement
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub max_skill: Option<u8>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[tracing::instrument(skip_all, fields(format = ?args.format))]
pub async fn rank(config: &Config, args: RankArgs) -> Result<String> {
    let inputs = args.inputs.load(config).await?;
    let catalog = config.catalog();
    let engine = ScoringEngine::with_options(&catalog, config.scoring_options())?;
    let limit = args.limit.unwrap_or(config.matching.default_limit);

    let matches = engine.top_matches(
        &inputs.recipes,
        &inputs.pantry,
        &inputs.profile,
        inputs.time_budget,
        limit,
    );

    let filter = RecipeFilter {
        query: args.query,
        cuisine: args.cuisine,
        max_skill: args.max_skill,
    };
    let ranked = filter.apply(pair_with_recipes(matches, &inputs.recipes));

    match args.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ranked)?),
        OutputFormat::Table => render_table(&ranked),
    }
}

fn render_table(ranked: &[RankedRecipe<'_>]) -> Result<String> {
    let mut out = String::new();

    if ranked.is_empty() {
        writeln!(out, "No recipes matched.")?;
        return Ok(out);
    }

    writeln!(
        out,
        "{:>3}  {:>5}  {:<32}  {:>4}  {:>4}  {:>4}",
        "#", "SCORE", "RECIPE", "HAVE", "SUB", "MISS"
    )?;

    for (position, entry) in ranked.iter().enumerate() {
        let title = if entry.recipe.title.is_empty() {
            &entry.recipe.id
        } else {
            &entry.recipe.title
        };

        writeln!(
            out,
            "{:>3}  {:>5}  {:<32}  {:>4}  {:>4}  {:>4}",
            position + 1,
            entry.score.total_score,
            truncate(title, 32),
            entry.score.available_ingredients.len(),
            entry.score.substitutable_ingredients.len(),
            entry.score.missing_ingredients.len(),
        )?;
    }

    Ok(out)
}
