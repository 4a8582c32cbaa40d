//! Lookup command - fetch records by reference code.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use shiprec_core::{FedexInvoiceParser, LookupError, find_by_reference};

/// Arguments for the lookup command.
#[derive(Args)]
pub struct LookupArgs {
    /// Invoice text dump
    input: PathBuf,

    /// Reference code to look up
    #[arg(short, long)]
    reference: String,
}

pub fn run(args: LookupArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.input)?;
    let records = FedexInvoiceParser::new().parse(&text);

    let matches = find_by_reference(&records, &args.reference);
    if matches.is_empty() {
        return Err(LookupError::ReferenceNotFound(args.reference).into());
    }

    // A single match prints as an object; ambiguous references print as
    // the full list rather than being collapsed.
    let value = if matches.len() == 1 {
        json!(matches[0])
    } else {
        json!(matches)
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
