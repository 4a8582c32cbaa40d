//! Extract command - embedded text from invoice PDFs.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use shiprec_core::pdf::{PdfExtractor, PdfProcessor, PdfType};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input PDF files or a glob pattern
    #[arg(required = true)]
    input: Vec<String>,

    /// Print extracted text to stdout instead of writing .txt files
    #[arg(long)]
    stdout: bool,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let mut files: Vec<PathBuf> = Vec::new();
    for pattern in &args.input {
        let path = PathBuf::from(pattern);
        if path.exists() {
            files.push(path);
        } else {
            for entry in glob(pattern)? {
                files.push(entry?);
            }
        }
    }
    files.retain(|p| {
        let is_pdf = p
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            warn!("skipping non-PDF input: {}", p.display());
        }
        is_pdf
    });

    if files.is_empty() {
        anyhow::bail!("no PDF files to extract");
    }

    let progress = if files.len() > 1 && !args.stdout {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} {msg}")?);
        Some(pb)
    } else {
        None
    };

    let mut failures = 0usize;
    for file in &files {
        if let Some(pb) = &progress {
            pb.set_message(file.display().to_string());
        }

        match extract_one(file, args.stdout) {
            Ok(()) => debug!("extracted {}", file.display()),
            Err(e) => {
                failures += 1;
                eprintln!(
                    "{} failed to extract {}: {}",
                    style("✗").red(),
                    file.display(),
                    e
                );
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    if failures == files.len() {
        anyhow::bail!("all {} file(s) failed to extract", failures);
    }
    if !args.stdout {
        println!(
            "{} Extracted {} of {} file(s)",
            style("✓").green(),
            files.len() - failures,
            files.len()
        );
    }
    Ok(())
}

fn extract_one(file: &PathBuf, to_stdout: bool) -> anyhow::Result<()> {
    let extractor = PdfExtractor::from_file(file)?;

    if extractor.analyze() == PdfType::Image {
        anyhow::bail!("no embedded text (scanned document; OCR it upstream)");
    }

    let text = extractor.extract_text()?;
    if to_stdout {
        println!("{text}");
    } else {
        let output = file.with_extension("txt");
        fs::write(&output, &text)?;
        println!("{} -> {}", file.display(), output.display());
    }
    Ok(())
}
