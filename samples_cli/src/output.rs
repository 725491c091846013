use anyhow::Result;
use samples_api::types::{Observation, ObservedProperty, Project, SamplingLocation};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Parses the `--output` flag. Unknown values fall back to a table.
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct LocationRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    custom_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    location_type: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Tabled, Serialize)]
pub struct ProjectRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    custom_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Start")]
    #[serde(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    #[serde(rename = "End")]
    end: String,
}

#[derive(Tabled, Serialize)]
pub struct PropertyRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    custom_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Result Type")]
    #[serde(rename = "Result Type")]
    result_type: String,
    #[tabled(rename = "Default Unit")]
    #[serde(rename = "Default Unit")]
    default_unit: String,
}

#[derive(Tabled, Serialize)]
pub struct ObservationRow {
    #[tabled(rename = "Observed")]
    #[serde(rename = "Observed")]
    observed_time: String,
    #[tabled(rename = "Location")]
    #[serde(rename = "Location")]
    location: String,
    #[tabled(rename = "Property")]
    #[serde(rename = "Property")]
    property: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    #[serde(rename = "Unit")]
    unit: String,
}

pub fn build_location_rows(locations: &[SamplingLocation]) -> Vec<LocationRow> {
    locations
        .iter()
        .map(|l| LocationRow {
            custom_id: l.custom_id.clone(),
            name: l.name.clone().unwrap_or_default(),
            location_type: l.location_type.clone().unwrap_or_default(),
            description: l.description.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn build_project_rows(projects: &[Project]) -> Vec<ProjectRow> {
    projects
        .iter()
        .map(|p| ProjectRow {
            custom_id: p.custom_id.clone(),
            name: p.name.clone().unwrap_or_default(),
            start: p
                .start_time
                .map(|t| t.date_naive().to_string())
                .unwrap_or_default(),
            end: p
                .end_time
                .map(|t| t.date_naive().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

pub fn build_property_rows(properties: &[ObservedProperty]) -> Vec<PropertyRow> {
    properties
        .iter()
        .map(|p| PropertyRow {
            custom_id: p.custom_id.clone(),
            name: p.name.clone().unwrap_or_default(),
            result_type: p.result_type.clone().unwrap_or_default(),
            default_unit: p
                .default_unit
                .as_ref()
                .map(|u| u.custom_id.clone())
                .unwrap_or_default(),
        })
        .collect()
}

pub fn build_observation_rows(observations: &[Observation]) -> Vec<ObservationRow> {
    observations
        .iter()
        .map(|o| {
            let (value, unit) = match o.value() {
                Some((value, unit)) => (value.to_string(), unit.unwrap_or_default().to_string()),
                None => (String::new(), String::new()),
            };
            ObservationRow {
                observed_time: o
                    .observed_time
                    .map(|t| t.format("%Y-%m-%d %H:%M%:z").to_string())
                    .unwrap_or_default(),
                location: reference_label(o.sampling_location.as_ref()),
                property: reference_label(o.observed_property.as_ref()),
                value,
                unit,
            }
        })
        .collect()
}

/// Prefers the user-facing custom ID, falling back to the server ID.
fn reference_label(reference: Option<&samples_api::types::Reference>) -> String {
    reference
        .map(|r| r.custom_id.clone().unwrap_or_else(|| r.id.clone()))
        .unwrap_or_default()
}

/// Prints rows in a tabular format (table, markdown, or CSV).
pub fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Table | OutputFormat::Json => {
            println!("{}", Table::new(rows));
        }
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
