//! Swagger Generator - A Swagger 2.0 document derived from annotated source files.
//!
//! This library scans source trees for files that carry REST metadata as
//! attribute annotations plus Javadoc-style doc comments, and renders the
//! surface they describe as a single Swagger 2.0 YAML document. A
//! user-supplied header template is spliced verbatim into the output, so
//! the generated file drops straight into an existing documentation
//! pipeline.
//!
//! # Annotation Vocabulary
//!
//! - **`#[path("…")]`**: route fragment, on the resource declaration and on
//!   each exported method
//! - **`#[public_api]`**: publish marker; only marked methods are exported
//! - **`#[get]` / `#[post]` / `#[put]` / `#[delete]`**: the operation verb
//! - **`#[path_param("…")]` / `#[query_param("…")]`**: parameter location
//!   and exposed name, on a method argument
//! - **`#[xml_element]`**: marks a model field; `required = true` lists it
//!   under the schema's required names
//! - **`#[rest_example("…")]`**: literal example value on a model field
//!
//! Operation documentation lives in ordinary doc comments using
//! `@param <name> <text>` and `@response.representation.<code>.<doc|model>`
//! tags.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`scanner`] - Walks the source roots and finds candidate files
//! 2. [`parser`] - Parses one source file into a syntax tree
//! 3. [`annotations`] - Classifies attributes against the closed vocabulary
//! 4. [`javadoc`] - Doc-comment normalization and tag parsing
//! 5. [`type_map`] - Fixed mapping from source types to schema fragments
//! 6. [`extractor`] - Endpoint and model extraction visitors
//! 7. [`assembler`] - Run state and rendering of the final document
//!
//! # Example Usage
//!
//! ```no_run
//! use swagger_from_source::{
//!     assembler::DocumentAssembler,
//!     extractor::endpoint::extract_endpoints,
//!     parser,
//!     scanner::SourceIndex,
//! };
//! use std::path::PathBuf;
//!
//! // Index the source roots
//! let index = SourceIndex::new(vec![PathBuf::from("./server/src")]);
//! let sources = index.enumerate().unwrap();
//!
//! // Extract entries into a fresh assembler
//! let mut assembler = DocumentAssembler::new("info:\n  title: My API\n".to_string());
//! for source in &sources {
//!     let unit = parser::parse_unit(&source.path).unwrap();
//!     extract_endpoints(&unit, &mut assembler);
//! }
//!
//! // Render the document, resolving referenced models through the index
//! let yaml = assembler.assemble(&index).unwrap();
//! println!("{}", yaml);
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod scanner;
pub mod parser;
pub mod annotations;
pub mod javadoc;
pub mod type_map;
pub mod extractor;
pub mod assembler;
