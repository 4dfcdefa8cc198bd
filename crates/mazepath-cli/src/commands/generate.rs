//! `generate`: produce a cell grid and print or save it as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use mazepath_cli::output::{format_generate_text, render_json, GenerateSummary, OutputFormat};
use mazepath_lib::GeneratorAlgorithm;

use super::source::GenerationArgs;

pub fn handle_generate(
    args: &GenerationArgs,
    output: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let grid = args.generate()?;
    let algorithm = GeneratorAlgorithm::from(args.algorithm);

    let Some(path) = output else {
        // Without a target file the grid document itself is the output.
        println!("{}", grid.to_json_string()?);
        return Ok(());
    };

    grid.save(path)
        .with_context(|| format!("failed to write cell grid to {}", path.display()))?;
    info!(path = %path.display(), "cell grid saved");

    let summary = GenerateSummary::new(&grid, algorithm, args.seed);
    match format {
        OutputFormat::Json => render_json(&summary)?,
        OutputFormat::Text => println!("{}", format_generate_text(&summary)),
    }
    Ok(())
}
