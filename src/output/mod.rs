//! Result rendering for the terminal.

pub mod progress;

use crate::constants::OFFLINE_PLACEHOLDER;
use crate::error::{Error, Result};
use crate::identify::{Identification, SpeciesDetails};
use serde::Serialize;

/// Print an identification outcome as a readable text card.
pub fn print_text(identification: &Identification) {
    match identification {
        Identification::Found(details) => print_details(details),
        Identification::NotFound { label } => {
            println!("{label}");
            println!("{OFFLINE_PLACEHOLDER}");
            if let Some(note) = identification.note() {
                println!();
                println!("note: {note}");
            }
        }
    }
}

fn print_details(details: &SpeciesDetails) {
    println!("{}", details.name);
    if let Some(scientific_name) = &details.scientific_name {
        println!("{scientific_name}");
    }
    println!();

    if let Some(status) = &details.conservation_status {
        println!("  Status:      {status}");
    }
    if let Some(local_names) = &details.local_names {
        println!("  Local names: {local_names}");
    }
    if let Some(family) = &details.family {
        println!("  Family:      {family}");
    }
    if let Some(endemic_status) = &details.endemic_status {
        println!("  Endemic:     {endemic_status}");
    }

    print_section("Venom & Significance", details.venom.as_deref());
    print_section("Treatment", details.treatment.as_deref());
    print_section("Description", details.description.as_deref());
    print_section("Fun Fact", details.fun_fact.as_deref());
}

fn print_section(title: &str, body: Option<&str>) {
    if let Some(body) = body {
        println!();
        println!("{title}");
        println!("  {body}");
    }
}

/// Machine-readable shape for a not-found outcome.
///
/// Carries both the predicted label and the error note so consumers may
/// show either, matching the behavior of the interactive result card.
#[derive(Debug, Serialize)]
struct NotFoundJson<'a> {
    name: &'a str,
    scientific_name: &'static str,
    error: String,
}

/// Print an identification outcome as a single JSON object.
pub fn print_json(identification: &Identification) -> Result<()> {
    let rendered = match identification {
        Identification::Found(details) => to_json(details)?,
        Identification::NotFound { label } => to_json(&NotFoundJson {
            name: label,
            scientific_name: OFFLINE_PLACEHOLDER,
            error: identification.note().unwrap_or_default(),
        })?,
    };

    println!("{rendered}");
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::Internal {
        message: format!("failed to serialize result: {e}"),
    })
}
