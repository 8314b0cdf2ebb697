use anyhow::Result;
use clap::{Parser, Subcommand};
use pantrymatch::cli::{
    ExpiringArgs, RankArgs, ScoreArgs, SubstitutesArgs, expiring, rank, score, substitutes,
};

/// pantrymatch - Rank recipes against your pantry
#[derive(Parser)]
#[command(name = "pantrymatch")]
#[command(about = "Score and rank recipes by what is already in the pantry", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank recipes, best match first
    Rank(RankArgs),
    /// Show the full score breakdown of one recipe
    Score(ScoreArgs),
    /// List catalog substitutes for an ingredient
    Substitutes(SubstitutesArgs),
    /// List pantry items that expire soon
    Expiring(ExpiringArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pantrymatch::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantrymatch::observability::init_observability(
        "pantrymatch",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let result = match cli.command {
        Commands::Rank(args) => rank(&config, args).await,
        Commands::Score(args) => score(&config, args).await,
        Commands::Substitutes(args) => substitutes(&config, args),
        Commands::Expiring(args) => expiring(args).await,
    };

    println!("{}", result?.trim_end());

    Ok(())
}
