//! Refs command - list distinct reference codes.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use shiprec_core::{FedexInvoiceParser, references};

/// Arguments for the refs command.
#[derive(Args)]
pub struct RefsArgs {
    /// Invoice text dump
    input: PathBuf,
}

pub fn run(args: RefsArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.input)?;
    let records = FedexInvoiceParser::new().parse(&text);

    for reference in references(&records) {
        println!("{reference}");
    }
    Ok(())
}
