// src/config/builder_logic.rs

use super::ConfigBuilder;
use crate::config::OutputDestination;
use crate::errors::{ConfigError, Result};
use std::path::PathBuf;

/// Validates combinations of options on the `ConfigBuilder`.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    if let Some(files) = &builder.files {
        if files.iter().any(|f| f.is_empty()) {
            return Err(ConfigError::InvalidValue {
                option: "FILE".to_string(),
                reason: "file paths must not be empty".to_string(),
            }
            .into());
        }
    }

    let body_transforms = [builder.html, builder.markdown, builder.line_numbers]
        .iter()
        .filter(|flag| flag.unwrap_or(false))
        .count();
    if body_transforms > 1 {
        log::debug!(
            "Several body formats requested; only the first of html, markdown, line numbers applies."
        );
    }
    Ok(())
}

/// Normalizes the direct text: an empty string means "no direct text".
pub(super) fn determine_direct_text(text: Option<String>, files: &[PathBuf]) -> Option<String> {
    let text = text.filter(|t| !t.is_empty())?;
    if !files.is_empty() {
        log::warn!(
            "Direct text given; ignoring {} file argument(s).",
            files.len()
        );
    }
    Some(text)
}

/// Determines the final output destination.
pub(super) fn determine_output_destination(stdout: Option<bool>) -> OutputDestination {
    if stdout.unwrap_or(false) {
        OutputDestination::Stdout
    } else {
        OutputDestination::Clipboard
    }
}
