use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

/// Swagger Generator - Derives a Swagger 2.0 YAML document from annotated source files
#[derive(Parser, Debug)]
#[command(name = "swagger-from-source")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Source root directories to scan for annotated files
    #[arg(value_name = "ROOT", required = true, num_args = 1..)]
    pub roots: Vec<PathBuf>,

    /// Header template file and output file, in that order
    #[arg(value_name = "FILE", last = true)]
    pub files: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Inputs of one generation run, validated.
#[derive(Debug)]
pub struct RunConfig {
    pub roots: Vec<PathBuf>,
    pub header_path: PathBuf,
    pub output_path: PathBuf,
}

/// Validate and log already-parsed arguments
pub fn validate_args(args: CliArgs) -> Result<RunConfig> {
    debug!("Parsed arguments: {:?}", args);

    for root in &args.roots {
        if !root.exists() {
            anyhow::bail!("Source root does not exist: {}", root.display());
        }
        if !root.is_dir() {
            anyhow::bail!("Source root is not a directory: {}", root.display());
        }
    }

    let Ok([header_path, output_path]) = <[PathBuf; 2]>::try_from(args.files) else {
        anyhow::bail!(
            "Expected exactly two paths after --: the header template and the output file"
        );
    };

    info!(
        "Source roots: {}",
        args.roots
            .iter()
            .map(|root| root.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    info!("Header template: {}", header_path.display());
    info!("Output file: {}", output_path.display());

    Ok(RunConfig {
        roots: args.roots,
        header_path,
        output_path,
    })
}

/// Run the main workflow
pub fn run(config: RunConfig) -> Result<()> {
    use crate::assembler::DocumentAssembler;
    use crate::extractor::endpoint::extract_endpoints;
    use crate::parser;
    use crate::scanner::SourceIndex;

    info!("Starting document generation...");

    // Step 1: Read the header template
    let header = fs::read_to_string(&config.header_path).with_context(|| {
        format!(
            "Failed to read header template: {}",
            config.header_path.display()
        )
    })?;

    // Step 2: Enumerate source files under the roots
    info!("Scanning source roots...");
    let index = SourceIndex::new(config.roots);
    let sources = index.enumerate()?;

    info!("Found {} source files", sources.len());
    if sources.is_empty() {
        warn!("No source files found under the given roots");
    }

    // Step 3: Extract endpoint entries file by file
    let mut assembler = DocumentAssembler::new(header);
    for source in &sources {
        match parser::parse_unit(&source.path) {
            Ok(unit) => extract_endpoints(&unit, &mut assembler),
            Err(error) => warn!("Skipping {}: {:#}", source.path.display(), error),
        }
    }

    info!(
        "Recorded {} entries under {} paths, referencing {} models",
        assembler.entry_count(),
        assembler.entries().len(),
        assembler.models().len()
    );

    // Step 4: Assemble the document, resolving models lazily
    let yaml = assembler.assemble(&index)?;

    // Step 5: Write the output file
    info!("Saving yaml to {}", config.output_path.display());
    if let Some(parent) = config.output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&config.output_path, &yaml).with_context(|| {
        format!(
            "Failed to write output file: {}",
            config.output_path.display()
        )
    })?;

    info!("Generation complete");

    Ok(())
}
