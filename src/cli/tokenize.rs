//! Split coordinate text into its fields.
//!
//! Prints one field per line, so `g:a:${x:y}` shows three lines. The command
//! never fails: a field count other than three is reported, not rejected.

use super::common::{OutputFormat, print_json};
use crate::constants::COORDINATE_FIELD_COUNT;
use crate::coordinate::tokenize;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

/// Command to tokenize a coordinate.
#[derive(Args, Debug)]
pub struct TokenizeCommand {
    /// Coordinate text, e.g. `io.example:base-tile:${tiles.version}`
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct TokenizeOutput<'a> {
    text: &'a str,
    fields: Vec<String>,
    is_coordinate: bool,
}

impl TokenizeCommand {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns an error only if JSON output cannot be written.
    pub async fn execute(self) -> Result<()> {
        let fields = tokenize(&self.text);
        let is_coordinate = fields.len() == COORDINATE_FIELD_COUNT;

        match self.format {
            OutputFormat::Json => print_json(&TokenizeOutput {
                text: &self.text,
                fields,
                is_coordinate,
            }),
            OutputFormat::Text => {
                for field in &fields {
                    println!("{field}");
                }
                if !is_coordinate {
                    eprintln!(
                        "{} expected {} fields, found {}",
                        "note:".yellow(),
                        COORDINATE_FIELD_COUNT,
                        fields.len()
                    );
                }
                Ok(())
            }
        }
    }
}
