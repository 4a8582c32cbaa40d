//! Parse command - recover shipment records from an invoice text dump.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use shiprec_core::FedexInvoiceParser;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Invoice text dump (output of `shiprec extract`)
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.input)?;

    let parser = FedexInvoiceParser::new();
    let records = parser.parse(&text);
    info!("recovered {} record(s)", records.len());

    let json = serde_json::to_string_pretty(&records)?;
    match args.output {
        Some(path) => {
            fs::write(&path, json)?;
            println!(
                "{} Wrote {} record(s) to {}",
                style("✓").green(),
                records.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}
