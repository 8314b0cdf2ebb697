use anyhow::Result;
use clap::Args;
use pantrymatch_shared::normalize;
use serde_json::json;

use super::OutputFormat;
use crate::config::Config;

#[derive(Args, Clone, Debug)]
pub struct SubstitutesArgs {
    /// Ingredient to look up, case-insensitive
    pub ingredient: String,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

pub fn substitutes(config: &Config, args: SubstitutesArgs) -> Result<String> {
    let catalog = config.catalog();
    let ingredient = normalize(&args.ingredient);
    let candidates = catalog.substitutes(&ingredient);

    tracing::debug!(%ingredient, count = candidates.len(), "catalog lookup");

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "ingredient": ingredient,
            "substitutes": candidates,
        }))?,
        OutputFormat::Table if candidates.is_empty() => {
            format!("No substitutes known for {ingredient}.\n")
        }
        OutputFormat::Table => candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| format!("{}. {candidate}\n", i + 1))
            .collect(),
    };

    Ok(output)
}
