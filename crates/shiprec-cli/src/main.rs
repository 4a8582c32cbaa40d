//! CLI application for carrier invoice recovery.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{extract, lookup, parse, refs};

/// Carrier invoice recovery - structured shipment charges from invoice dumps
#[derive(Parser)]
#[command(name = "shiprec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract embedded text from invoice PDFs
    Extract(extract::ExtractArgs),

    /// Parse an invoice text dump into shipment records
    Parse(parse::ParseArgs),

    /// List distinct reference codes in an invoice text dump
    Refs(refs::RefsArgs),

    /// Look up shipment records by reference code
    Lookup(lookup::LookupArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Extract(args) => extract::run(args),
        Commands::Parse(args) => parse::run(args),
        Commands::Refs(args) => refs::run(args),
        Commands::Lookup(args) => lookup::run(args),
    }
}
