//! Defines the core `Config` struct and related types for application configuration.
//!
//! A `Config` is built once, by [`ConfigBuilder`], from the parsed command line
//! (or programmatically by library callers) and then passed by reference to
//! the aggregation pipeline. Nothing reads flags from global state.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
mod builder_logic;

/// Formatting toggles applied to every fragment.
///
/// The body transforms are mutually aware: when several are set, only the
/// highest-priority one applies (HTML, then Markdown, then line numbers).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Wrap each fragment in `<code>` tags.
    pub html: bool,
    /// Wrap each fragment in a fenced Markdown code block.
    pub markdown: bool,
    /// Prepend a `<label> (<mime type>)` annotation to each fragment.
    pub mime_type: bool,
    /// Prefix each line with its 1-based number.
    pub line_numbers: bool,
}

impl FormatOptions {
    /// Returns `true` if any formatting toggle is set.
    ///
    /// When this is `false` the formatter passes content through untouched.
    ///
    /// # Examples
    /// ```
    /// use clipper::config::FormatOptions;
    ///
    /// assert!(!FormatOptions::default().should_format());
    /// let opts = FormatOptions { line_numbers: true, ..Default::default() };
    /// assert!(opts.should_format());
    /// ```
    pub fn should_format(&self) -> bool {
        self.html || self.markdown || self.mime_type || self.line_numbers
    }

    /// Returns `true` if the body will be wrapped in a code block.
    pub fn wraps_code(&self) -> bool {
        self.html || self.markdown
    }
}

/// Represents the destination for the aggregated output.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[non_exhaustive]
pub enum OutputDestination {
    /// Copy the output to the system clipboard.
    #[default]
    Clipboard,
    /// Write the output to standard output instead of the clipboard.
    Stdout,
}

/// Holds the immutable configuration for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Text given directly on the command line. When present it is the only
    /// content copied. Never `Some("")`.
    pub direct_text: Option<String>,
    /// Files to read, in the order given.
    pub file_paths: Vec<PathBuf>,
    /// Formatting toggles.
    pub format: FormatOptions,
    /// Where the final text goes.
    pub output_destination: OutputDestination,
}

impl Config {
    /// Shorthand for `self.format.should_format()`.
    pub fn should_format(&self) -> bool {
        self.format.should_format()
    }

    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            direct_text: None,
            file_paths: Vec::new(),
            format: FormatOptions::default(),
            output_destination: OutputDestination::Stdout,
        }
    }
}
