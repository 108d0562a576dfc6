//! Swagger Generator - Command-line tool deriving a Swagger 2.0 document from source.
//!
//! This binary scans one or more source roots for annotated files describing a
//! REST API surface and writes the corresponding Swagger 2.0 YAML document,
//! splicing a user-supplied header template into the output.
//!
//! # Usage
//!
//! ```bash
//! swagger-from-source [OPTIONS] <ROOT>... -- <HEADER> <OUTPUT>
//! ```
//!
//! # Examples
//!
//! Generate a document from one source tree:
//! ```bash
//! swagger-from-source ./server/src -- ./doc/header.yaml ./doc/api.yaml
//! ```
//!
//! Scan several roots with verbose logging:
//! ```bash
//! swagger-from-source -v ./server/src ./shared/src -- ./doc/header.yaml ./doc/api.yaml
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;

use swagger_from_source::cli;

fn main() -> Result<()> {
    // Parse first so the verbose flag can pick the logger level
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // RUST_LOG still overrides the flag-derived default
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Swagger generator starting...");

    let config = cli::validate_args(args)?;

    cli::run(config)?;

    info!("Document generation completed successfully");

    Ok(())
}
