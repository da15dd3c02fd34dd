//! Output formatting for command results.
//!
//! - [`terminal`] - aligned table with a coloured header
//! - [`json`] - JSON document

mod json;
mod terminal;

pub use json::{render_json, JsonReport};
pub use terminal::{format_field, render_header, render_row, render_table};

use crate::command::Outcome;
use crate::models::Network;
use colored::Colorize;
use std::error::Error;
use std::str::FromStr;

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<OutputFormat, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format {other}, expected table or json").into()),
        }
    }
}

/// Render an [`Outcome`] in the requested format.
pub fn render_outcome(outcome: &Outcome, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    const NO_NETWORKS: &[Network] = &[];
    let (address, networks) = match outcome {
        Outcome::Address(_, a) => (*a, NO_NETWORKS),
        Outcome::Networks(_, nets) => (None, nets.as_slice()),
    };

    match format {
        OutputFormat::Json => render_json(outcome.op(), address, networks),
        OutputFormat::Table => match outcome {
            Outcome::Address(_, Some(a)) => Ok(format_field(a, 0)),
            Outcome::Address(_, None) => Ok(format_field("None", 0)),
            Outcome::Networks(_, nets) if nets.is_empty() => Ok(format_field("None", 0)),
            Outcome::Networks(_, nets) => Ok(render_table(nets)),
        },
    }
}

/// Print an [`Outcome`] to stdout.
pub fn print_outcome(outcome: &Outcome, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    log::info!("#Start print_outcome() op={} format={:?}", outcome.op(), format);
    let body = render_outcome(outcome, format)?;
    if format == OutputFormat::Table {
        if let Outcome::Networks(_, nets) = outcome {
            if !nets.is_empty() {
                println!("{}", render_header().on_blue());
            }
        }
    }
    println!("{body}");
    Ok(())
}
