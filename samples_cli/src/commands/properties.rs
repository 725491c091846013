use anyhow::Result;
use clap::Args;
use samples_api::{Client, ObservedPropertyQuery, Query};

use super::collect_listing;
use crate::output::{build_property_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct PropertiesArgs {
    /// Search by name or ID (e.g. "pH")
    #[arg(long)]
    pub search: Option<String>,

    /// Results per page requested from the server
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=1000))]
    pub page_size: Option<i64>,

    /// Stop after this many properties
    #[arg(long)]
    pub max: Option<usize>,
}

pub async fn run(args: &PropertiesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = ObservedPropertyQuery::default();

    if let Some(search) = &args.search {
        query = query.with_search(search);
    }
    if let Some(page_size) = args.page_size {
        query = query.with_limit(page_size);
    }

    let properties =
        collect_listing(client.lazy_get(query), args.max, "observed properties").await?;

    match format {
        OutputFormat::Json => print_json(&properties),
        _ => print_rows(build_property_rows(&properties), format)?,
    }

    Ok(())
}
