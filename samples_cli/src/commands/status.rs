use anyhow::Result;
use samples_api::Client;

use crate::output::{print_json, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let status = client.get_status().await?;

    match format {
        OutputFormat::Json => print_json(&status),
        _ => println!("{} (release {})", client.base_url(), status.release_name),
    }

    Ok(())
}
