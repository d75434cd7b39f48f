//! The `clipper` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `clipper` library.
//!
//! # Example
//!
//! ```
//! use clipper::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let config = ConfigBuilder::new().text("hello").build()?;
//! let mut sink = StreamSink::new(Vec::new());
//! run_with_input(&config, &mut std::io::empty(), &mut sink)?;
//! assert_eq!(sink.into_inner(), b"hello");
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder, FormatOptions, OutputDestination};
pub use crate::core_types::{Fragment, Source};
pub use crate::errors::{ClipboardError, ConfigError, Error, ReadError, Result};
pub use crate::filtering::{check_readable, detect_mime_type};
pub use crate::output::formatter::format_content;
pub use crate::output::writer::{setup_sink, ClipboardSink, StreamSink, SystemClipboard};
pub use crate::processing::{
    check_sources, join_fragments, read_files_concurrently, select_sources,
};
pub use crate::{aggregate, run, run_with_input};
