use anyhow::Result;
use clap::Args;
use samples_api::{Client, Query, SamplingLocationQuery};

use super::collect_listing;
use crate::output::{build_location_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct LocationsArgs {
    /// Search by name or ID
    #[arg(long)]
    pub search: Option<String>,

    /// Only these location IDs (repeatable)
    #[arg(long = "id")]
    pub ids: Vec<String>,

    /// Results per page requested from the server
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=1000))]
    pub page_size: Option<i64>,

    /// Stop after this many locations
    #[arg(long)]
    pub max: Option<usize>,
}

pub async fn run(args: &LocationsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = SamplingLocationQuery::default().with_ids(&args.ids);

    if let Some(search) = &args.search {
        query = query.with_search(search);
    }
    if let Some(page_size) = args.page_size {
        query = query.with_limit(page_size);
    }

    let locations = collect_listing(client.lazy_get(query), args.max, "locations").await?;

    match format {
        OutputFormat::Json => print_json(&locations),
        _ => print_rows(build_location_rows(&locations), format)?,
    }

    Ok(())
}
