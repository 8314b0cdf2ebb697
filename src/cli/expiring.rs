use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pantrymatch_shared::pantry::{ExpiryStatus, PantryItem, expiring_within};
use serde::Serialize;
use time::{Date, OffsetDateTime, macros::format_description};

use super::{OutputFormat, truncate};
use crate::data;

#[derive(Args, Clone, Debug)]
pub struct ExpiringArgs {
    /// Pantry snapshot (JSON array of pantry items)
    #[arg(long)]
    pub pantry: PathBuf,

    /// Report items expiring within this many days
    #[arg(long, default_value_t = 7)]
    pub days: i64,

    /// Reference date as YYYY-MM-DD, defaults to today (UTC)
    #[arg(long, value_parser = parse_date)]
    pub today: Option<Date>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ExpiringItem<'a> {
    #[serde(flatten)]
    item: &'a PantryItem,
    expiry: ExpiryStatus,
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[tracing::instrument(skip_all, fields(days = args.days))]
pub async fn expiring(args: ExpiringArgs) -> Result<String> {
    let pantry = data::load_pantry(&args.pantry).await?;
    let today = args
        .today
        .unwrap_or_else(|| OffsetDateTime::now_utc().date());

    let items: Vec<ExpiringItem<'_>> = expiring_within(&pantry, args.days, today)
        .into_iter()
        .map(|(item, expiry)| ExpiringItem { item, expiry })
        .collect();

    match args.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&items)?),
        OutputFormat::Table => render_table(&items),
    }
}

fn describe(status: ExpiryStatus) -> String {
    match status {
        ExpiryStatus::Expired(1) => "expired yesterday".to_owned(),
        ExpiryStatus::Expired(days) => format!("expired {days} days ago"),
        ExpiryStatus::Expiring(0) => "expires today".to_owned(),
        ExpiryStatus::Expiring(1) => "expires tomorrow".to_owned(),
        ExpiryStatus::Expiring(days) | ExpiryStatus::Soon(days) | ExpiryStatus::Fresh(days) => {
            format!("expires in {days} days")
        }
    }
}

fn render_table(items: &[ExpiringItem<'_>]) -> Result<String> {
    let mut out = String::new();

    if items.is_empty() {
        writeln!(out, "Nothing expiring.")?;
        return Ok(out);
    }

    for entry in items {
        writeln!(
            out,
            "{:<24}  {:<10}  {}",
            truncate(&entry.item.name, 24),
            entry.item.location,
            describe(entry.expiry)
        )?;
    }

    Ok(out)
}
