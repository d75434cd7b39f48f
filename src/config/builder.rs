use super::{
    builder_logic::{determine_direct_text, determine_output_destination, validate_builder_options},
    Config, FormatOptions,
};
use crate::cli::Cli;
use crate::errors::Result;
use std::path::PathBuf;

/// A builder for creating a [`Config`] programmatically or from parsed CLI args.
///
/// Every field is optional; unset fields fall back to the CLI defaults
/// (no direct text, no files, no formatting, clipboard destination).
///
/// # Examples
/// ```
/// use clipper::config::{ConfigBuilder, OutputDestination};
///
/// let config = ConfigBuilder::new()
///     .files(vec!["notes.txt", "todo.md"])
///     .markdown(true)
///     .stdout(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.file_paths.len(), 2);
/// assert!(config.format.markdown);
/// assert_eq!(config.output_destination, OutputDestination::Stdout);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) text: Option<String>,
    pub(super) files: Option<Vec<String>>,
    pub(super) html: Option<bool>,
    pub(super) markdown: Option<bool>,
    pub(super) mime_type: Option<bool>,
    pub(super) line_numbers: Option<bool>,
    pub(super) stdout: Option<bool>,
}

impl ConfigBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled from parsed command line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            text: cli.text,
            files: Some(cli.files),
            html: Some(cli.html),
            markdown: Some(cli.markdown),
            mime_type: Some(cli.mime),
            line_numbers: Some(cli.line_numbers),
            stdout: Some(cli.stdout),
        }
    }

    /// Sets the direct text. An empty string counts as unset.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets the list of files to read, in order.
    pub fn files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    /// Enables or disables the HTML code-block wrap.
    pub fn html(mut self, value: bool) -> Self {
        self.html = Some(value);
        self
    }

    /// Enables or disables the Markdown code-block wrap.
    pub fn markdown(mut self, value: bool) -> Self {
        self.markdown = Some(value);
        self
    }

    /// Enables or disables the MIME-type annotation.
    pub fn mime_type(mut self, value: bool) -> Self {
        self.mime_type = Some(value);
        self
    }

    /// Enables or disables line numbering.
    pub fn line_numbers(mut self, value: bool) -> Self {
        self.line_numbers = Some(value);
        self
    }

    /// Writes the result to stdout instead of the clipboard.
    pub fn stdout(mut self, value: bool) -> Self {
        self.stdout = Some(value);
        self
    }

    /// Validates the options and builds the immutable [`Config`].
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`](crate::errors::ConfigError::InvalidValue)
    /// if a file path argument is empty.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let format = FormatOptions {
            html: self.html.unwrap_or(false),
            markdown: self.markdown.unwrap_or(false),
            mime_type: self.mime_type.unwrap_or(false),
            line_numbers: self.line_numbers.unwrap_or(false),
        };
        let file_paths: Vec<PathBuf> = self
            .files
            .unwrap_or_default()
            .into_iter()
            .map(PathBuf::from)
            .collect();
        let direct_text = determine_direct_text(self.text, &file_paths);

        let config = Config {
            direct_text,
            file_paths,
            format,
            output_destination: determine_output_destination(self.stdout),
        };
        log::debug!("Built configuration: {:?}", config);
        Ok(config)
    }
}
