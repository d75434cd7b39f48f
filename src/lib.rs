//! `clipper` is a library and command-line tool that aggregates text from
//! direct arguments, standard input, or a list of files, optionally formats
//! it, and copies the result to the system clipboard.
//!
//! The pipeline has three stages:
//! 1.  **Select**: pick the sources for the run. Direct text wins outright,
//!     then files, then standard input. Sources are never merged.
//! 2.  **Read & format**: files are read concurrently, one task per file, and
//!     each fragment is formatted (code-block wrap, MIME annotation, line
//!     numbers) independently.
//! 3.  **Join & deliver**: fragments are joined in input order and handed to a
//!     [`ClipboardSink`] in a single write.
//!
//! # Example: Library Usage
//!
//! ```
//! use clipper::{run_with_input, ConfigBuilder};
//! use clipper::output::writer::StreamSink;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a temporary directory with some files.
//! let temp_dir = tempdir().unwrap();
//! let first = temp_dir.path().join("first.txt");
//! let second = temp_dir.path().join("second.rs");
//! fs::write(&first, "Hello, world!").unwrap();
//! fs::write(&second, "fn main() {}").unwrap();
//!
//! // 2. Create a Config object programmatically using the builder.
//! let config = ConfigBuilder::new()
//!     .files(vec![
//!         first.to_string_lossy().into_owned(),
//!         second.to_string_lossy().into_owned(),
//!     ])
//!     .markdown(true)
//!     .build()
//!     .unwrap();
//!
//! // 3. Run the pipeline into an in-memory sink instead of the clipboard.
//! let mut sink = StreamSink::new(Vec::new());
//! let copied = run_with_input(&config, &mut std::io::empty(), &mut sink).unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "```\nHello, world!\n```\n```\nfn main() {}\n```\n");
//! assert_eq!(copied, output.len());
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod prelude;
pub mod processing;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, FormatOptions, OutputDestination};
pub use core_types::{Fragment, Source};
pub use output::writer::ClipboardSink;

use crate::errors::Result;
use std::io::{self, Read};

/// Aggregates the configured sources, reading the process's standard input
/// when no direct text and no files are given.
///
/// # Errors
/// Returns [`errors::Error::NoSourcesProvided`] if stdin would be the only
/// source but is an interactive terminal (see [`processing::check_sources`]).
/// Source failures are propagated from [`processing::aggregate`].
pub fn aggregate(config: &Config) -> Result<String> {
    processing::check_sources(config, atty::is(atty::Stream::Stdin))?;
    processing::aggregate(config, &mut io::stdin().lock())
}

/// Executes the complete pipeline against the process's standard input and
/// writes the result to `sink`.
///
/// Returns the number of bytes handed to the sink.
///
/// # Errors
/// Aggregation errors are returned before the sink is touched. A sink failure
/// is returned as [`errors::Error::Clipboard`].
pub fn run(config: &Config, sink: &mut dyn ClipboardSink) -> Result<usize> {
    let text = aggregate(config)?;
    deliver(&text, sink)
}

/// Like [`run`], but reads standard-input content from `stdin`.
///
/// Useful for embedding and tests, where the process stdin should not be used.
pub fn run_with_input(
    config: &Config,
    stdin: &mut dyn Read,
    sink: &mut dyn ClipboardSink,
) -> Result<usize> {
    let text = processing::aggregate(config, stdin)?;
    deliver(&text, sink)
}

fn deliver(text: &str, sink: &mut dyn ClipboardSink) -> Result<usize> {
    log::debug!("Handing {} bytes to the sink.", text.len());
    sink.write(text)?;
    Ok(text.len())
}
