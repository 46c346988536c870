//! shelfbib binary
//!
//! Converts a LibraryThing tab-delimited export into a BibTeX file,
//! optionally alongside a LaTeX document that exercises it.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

/// Output file stem, matching the original converter's fixed names.
const BIB_STEM: &str = "LibraryThing";

/// Convert a LibraryThing tab-delimited export to BibTeX
#[derive(Debug, Parser)]
#[command(name = "shelfbib", version, about)]
struct Cli {
    /// Tab-delimited export file (UTF-16) from LibraryThing
    input: PathBuf,

    /// Also write a LaTeX document that cites every generated entry
    #[arg(short = 'l', long)]
    latex: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let bytes = fs::read(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let text = shelfbib_import::decode_utf16(&bytes)?;
    let result = shelfbib_import::import_catalog(&text)?;

    for warning in &result.warnings {
        tracing::warn!("{warning}");
    }

    let bib_path = format!("{BIB_STEM}.bib");
    let mut bib = shelfbib_bibtex::format_registry(&result.registry);
    bib.push('\n');
    fs::write(&bib_path, bib).with_context(|| format!("failed to write {bib_path}"))?;
    tracing::info!(entries = result.registry.len(), "wrote {bib_path}");

    if cli.latex {
        let tex_path = format!("{BIB_STEM}.tex");
        let doc = shelfbib_bibtex::format_test_document(&result.registry, BIB_STEM);
        fs::write(&tex_path, doc).with_context(|| format!("failed to write {tex_path}"))?;
        tracing::info!("wrote {tex_path}");
    }

    Ok(())
}
