mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use samples_api::Client;

use crate::output::OutputFormat;

/// Log levels applied on top of `RUST_LOG`, keyed by crate target.
const DEFAULT_LOG_DIRECTIVES: [&str; 2] = ["samples=info", "samples_api=info"];

#[derive(Parser)]
#[command(name = "samples")]
#[command(about = "Browse sampling locations, projects, and observations from a Samples API")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL, e.g. https://example.aqsamples.com/api (defaults to $SAMPLES_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the server release
    Status,
    /// List sampling locations
    Locations(commands::locations::LocationsArgs),
    /// List projects
    Projects(commands::projects::ProjectsArgs),
    /// List observed properties
    Properties(commands::properties::PropertiesArgs),
    /// List observations
    Observations(commands::observations::ObservationsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in DEFAULT_LOG_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);
    let settings = config::Settings::resolve(cli.base_url.as_deref())?;
    let client = Client::with_timeout(&settings.base_url, settings.timeout)?;

    match &cli.command {
        Commands::Status => commands::status::run(&client, &format).await?,
        Commands::Locations(args) => commands::locations::run(args, &client, &format).await?,
        Commands::Projects(args) => commands::projects::run(args, &client, &format).await?,
        Commands::Properties(args) => commands::properties::run(args, &client, &format).await?,
        Commands::Observations(args) => {
            commands::observations::run(args, &client, &format).await?
        }
    }

    Ok(())
}
