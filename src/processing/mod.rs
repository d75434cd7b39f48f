//! Handles the aggregation stage of the `clipper` pipeline.
//!
//! This module decides which sources to read, reads files concurrently with
//! Rayon, formats every fragment, and joins the fragments in input order.
//! Concurrent completion order never affects the output: each task writes to
//! its own slot of a preallocated, index-addressed arena.

use crate::config::{Config, FormatOptions};
use crate::core_types::{Fragment, Source};
use crate::errors::{source_error, Error, Result};
use crate::output::formatter::format_content;
use log::debug;
use std::io::{self, Read};
use std::sync::{Mutex, PoisonError};

pub(crate) mod content_reader;

/// Produces the final text for `config`.
///
/// Source precedence is fixed and exclusive: non-empty direct text wins and is
/// returned unchanged (no formatting, no trailing newline); otherwise the
/// configured files are read; with no files, `stdin` is read. Stdin is never
/// consulted when files are given.
///
/// # Errors
/// The first source failure aborts the whole aggregation. When several files
/// fail, the error reported is whichever was collected first.
pub fn aggregate(config: &Config, stdin: &mut dyn Read) -> Result<String> {
    let sources = select_sources(config);
    let fragments = match sources.as_slice() {
        [Source::DirectText(text)] => {
            debug!("Using direct text ({} bytes); other sources ignored.", text.len());
            return Ok(text.clone());
        }
        [Source::Stdin] => vec![read_stdin(stdin, &config.format)?],
        files => read_files_concurrently(files, &config.format)?,
    };

    Ok(join_fragments(&fragments))
}

/// Fails when standard input would be the only source but is an interactive
/// terminal, so there is nothing piped to read.
///
/// # Errors
/// Returns [`Error::NoSourcesProvided`] in that case.
pub fn check_sources(config: &Config, stdin_is_terminal: bool) -> Result<()> {
    if stdin_is_terminal && select_sources(config) == [Source::Stdin] {
        return Err(Error::NoSourcesProvided);
    }
    Ok(())
}

/// Lists the sources a run will read, in order.
///
/// # Examples
/// ```
/// use clipper::config::ConfigBuilder;
/// use clipper::core_types::Source;
/// use clipper::processing::select_sources;
/// use std::path::PathBuf;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// assert_eq!(select_sources(&config), vec![Source::Stdin]);
///
/// let config = ConfigBuilder::new().files(vec!["a.txt"]).build().unwrap();
/// assert_eq!(select_sources(&config), vec![Source::File(PathBuf::from("a.txt"))]);
///
/// let config = ConfigBuilder::new().text("hi").files(vec!["a.txt"]).build().unwrap();
/// assert_eq!(select_sources(&config), vec![Source::DirectText("hi".to_string())]);
/// ```
pub fn select_sources(config: &Config) -> Vec<Source> {
    if let Some(text) = config.direct_text.as_ref().filter(|t| !t.is_empty()) {
        return vec![Source::DirectText(text.clone())];
    }
    if config.file_paths.is_empty() {
        return vec![Source::Stdin];
    }
    config
        .file_paths
        .iter()
        .cloned()
        .map(Source::File)
        .collect()
}

fn read_stdin(stdin: &mut dyn Read, options: &FormatOptions) -> Result<Fragment> {
    let source = Source::Stdin;
    let raw = source
        .read(stdin)
        .map_err(|e| source_error(e, source.describe()))?;
    debug!("Read {} bytes from standard input.", raw.len());
    Ok(build_fragment(0, &source, &raw, options))
}

/// Reads every source concurrently, one task per source, and formats each one.
///
/// The returned fragments are in the same order as `sources`, whatever order
/// the reads finished in. Standard input is never consulted here; a
/// [`Source::Stdin`] entry reads as empty.
///
/// # Errors
/// If any file fails, the first error collected is returned and all other
/// results (successful or not) are discarded.
pub fn read_files_concurrently(
    sources: &[Source],
    options: &FormatOptions,
) -> Result<Vec<Fragment>> {
    log::info!("Reading {} file(s).", sources.len());

    let slots: Mutex<Vec<Option<Fragment>>> = Mutex::new(vec![None; sources.len()]);
    let (err_tx, err_rx) = crossbeam_channel::bounded::<Error>(sources.len());

    rayon::scope(|scope| {
        for (index, source) in sources.iter().enumerate() {
            let slots = &slots;
            let err_tx = err_tx.clone();
            scope.spawn(move |_| match source.read(&mut io::empty()) {
                Ok(raw) => {
                    debug!("Read {} bytes from {}.", raw.len(), source.describe());
                    let fragment = build_fragment(index, source, &raw, options);
                    slots.lock().unwrap_or_else(PoisonError::into_inner)[index] = Some(fragment);
                }
                Err(e) => {
                    debug!("Failed to read {}: {}", source.describe(), e);
                    if err_tx.send(source_error(e, source.describe())).is_err() {
                        log::warn!(
                            "Error channel closed before {} was reported.",
                            source.describe()
                        );
                    }
                }
            });
        }
    });
    drop(err_tx);

    let mut errors = err_rx.try_iter();
    if let Some(first) = errors.next() {
        let discarded = errors.count();
        if discarded > 0 {
            debug!("Discarding {} further read error(s).", discarded);
        }
        return Err(first);
    }

    Ok(slots
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .into_iter()
        .flatten()
        .collect())
}

/// Formats one source's raw bytes. Empty input always yields an empty fragment.
fn build_fragment(index: usize, source: &Source, raw: &[u8], options: &FormatOptions) -> Fragment {
    let label = source.label();
    let content = if raw.is_empty() {
        String::new()
    } else {
        format_content(&label, raw, options)
    };
    Fragment {
        index,
        label,
        content,
    }
}

/// Joins fragments in order, terminating each non-empty one with a newline.
///
/// Empty fragments contribute nothing.
///
/// # Examples
/// ```
/// use clipper::core_types::Fragment;
/// use clipper::processing::join_fragments;
///
/// let fragments = vec![
///     Fragment { index: 0, label: "a".into(), content: "A".into() },
///     Fragment { index: 1, label: "b".into(), content: String::new() },
///     Fragment { index: 2, label: "c".into(), content: "C".into() },
/// ];
/// assert_eq!(join_fragments(&fragments), "A\nC\n");
/// ```
pub fn join_fragments(fragments: &[Fragment]) -> String {
    let capacity = fragments.iter().map(|f| f.content.len() + 1).sum();
    let mut joined = String::with_capacity(capacity);
    for fragment in fragments.iter().filter(|f| !f.content.is_empty()) {
        joined.push_str(&fragment.content);
        joined.push('\n');
    }
    joined
}
