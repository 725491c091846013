use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use clap::Args;
use samples_api::{Client, ObservationQuery, Query};

use super::collect_listing;
use crate::output::{build_observation_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct ObservationsArgs {
    /// Sampling location ID (repeatable)
    #[arg(long = "location")]
    pub locations: Vec<String>,

    /// Observed property ID (repeatable)
    #[arg(long = "property")]
    pub properties: Vec<String>,

    /// Project ID (repeatable)
    #[arg(long = "project")]
    pub projects: Vec<String>,

    /// Only observations at or after this RFC 3339 time (e.g. 2024-01-01T00:00:00Z)
    #[arg(long)]
    pub since: Option<String>,

    /// Only observations at or before this RFC 3339 time
    #[arg(long)]
    pub until: Option<String>,

    /// Results per page requested from the server
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=1000))]
    pub page_size: Option<i64>,

    /// Stop after this many observations
    #[arg(long)]
    pub max: Option<usize>,
}

pub async fn run(args: &ObservationsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args)?;

    let observations = collect_listing(client.lazy_get(query), args.max, "observations").await?;

    match format {
        OutputFormat::Json => print_json(&observations),
        _ => print_rows(build_observation_rows(&observations), format)?,
    }

    Ok(())
}

fn build_query(args: &ObservationsArgs) -> Result<ObservationQuery> {
    let mut query = ObservationQuery::default();

    for id in &args.locations {
        query = query.with_sampling_location_id(id);
    }
    for id in &args.properties {
        query = query.with_observed_property_id(id);
    }
    for id in &args.projects {
        query = query.with_project_id(id);
    }

    let since = args.since.as_deref().map(parse_time).transpose()?;
    let until = args.until.as_deref().map(parse_time).transpose()?;
    if let (Some(since), Some(until)) = (since, until) {
        if since > until {
            anyhow::bail!("--since ({}) is after --until ({})", since, until);
        }
    }
    if let Some(since) = since {
        query = query.with_start_observed_time(since);
    }
    if let Some(until) = until {
        query = query.with_end_observed_time(until);
    }
    if let Some(page_size) = args.page_size {
        query = query.with_limit(page_size);
    }

    Ok(query)
}

fn parse_time(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value.trim())
        .with_context(|| format!("Invalid RFC 3339 time: {}", value))
}
