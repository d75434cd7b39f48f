//! Defines core data structures used throughout the aggregation pipeline.
//!
//! [`Source`] names one logical origin of text, and [`Fragment`] is the
//! formatted text produced from it, tagged with its position in the input so
//! that out-of-order completion never changes the final order.

use crate::constants::STDIN_LABEL;
use crate::errors::ReadError;
use crate::processing::content_reader::{read_file, read_stream};
use std::io::Read;
use std::path::{Path, PathBuf};

/// One logical input source.
///
/// The set of variants is closed; the aggregator matches on it exhaustively.
///
/// # Examples
///
/// ```
/// use clipper::core_types::Source;
/// use std::path::PathBuf;
///
/// assert_eq!(Source::Stdin.label(), "standard input");
/// assert_eq!(Source::File(PathBuf::from("src/main.rs")).label(), "src/main.rs");
/// assert_eq!(
///     Source::File(PathBuf::from("src/main.rs")).describe(),
///     "file 'src/main.rs'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text passed directly on the command line.
    DirectText(String),
    /// The standard input stream.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl Source {
    /// The label shown in the MIME annotation: the path for files, a fixed
    /// placeholder otherwise.
    pub fn label(&self) -> String {
        match self {
            Source::File(path) => display_path(path),
            Source::DirectText(_) | Source::Stdin => STDIN_LABEL.to_string(),
        }
    }

    /// The identifier used when reporting an error for this source.
    pub fn describe(&self) -> String {
        match self {
            Source::File(path) => format!("file '{}'", display_path(path)),
            Source::Stdin => STDIN_LABEL.to_string(),
            Source::DirectText(_) => "direct text".to_string(),
        }
    }

    /// Reads the full raw content of this source.
    ///
    /// `stdin` is only consulted for [`Source::Stdin`]; passing the stream in
    /// keeps the reader testable and free of process-global state.
    ///
    /// # Errors
    /// File sources fail with the readability checker's errors, or with
    /// [`ReadError::Io`] if opening or reading fails afterwards.
    pub fn read(&self, stdin: &mut dyn Read) -> Result<Vec<u8>, ReadError> {
        match self {
            Source::DirectText(text) => Ok(text.as_bytes().to_vec()),
            Source::Stdin => read_stream(stdin),
            Source::File(path) => read_file(path),
        }
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// The formatted text of one source, at its position in the input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    /// Zero-based position of the source in the configured input list.
    pub index: usize,
    /// Display label of the source (see [`Source::label`]).
    pub label: String,
    /// The formatted content. May be empty.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_direct_text_needs_no_io() {
        let source = Source::DirectText("hello".to_string());
        let mut stdin = Cursor::new(b"ignored".to_vec());
        assert_eq!(source.read(&mut stdin).unwrap(), b"hello");
        // stdin was not touched
        assert_eq!(stdin.position(), 0);
    }

    #[test]
    fn test_stdin_reads_to_end() {
        let mut stdin = Cursor::new(b"line 1\nline 2\n".to_vec());
        assert_eq!(Source::Stdin.read(&mut stdin).unwrap(), b"line 1\nline 2\n");
    }

    #[test]
    fn test_empty_stdin_is_not_an_error() {
        let mut stdin = Cursor::new(Vec::new());
        assert!(Source::Stdin.read(&mut stdin).unwrap().is_empty());
    }

    #[test]
    fn test_file_source_reads_content() -> std::io::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("a.txt");
        fs::write(&path, "file content")?;
        let mut stdin = Cursor::new(Vec::new());
        let bytes = Source::File(path).read(&mut stdin).unwrap();
        assert_eq!(bytes, b"file content");
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_file_source_missing() {
        let source = Source::File(PathBuf::from("non_existent_file_for_clipper_test.txt"));
        let mut stdin = Cursor::new(Vec::new());
        assert!(matches!(source.read(&mut stdin), Err(ReadError::NotFound)));
    }

    #[test]
    fn test_file_source_directory() -> std::io::Result<()> {
        let temp = tempdir()?;
        let source = Source::File(temp.path().to_path_buf());
        let mut stdin = Cursor::new(Vec::new());
        assert!(matches!(source.read(&mut stdin), Err(ReadError::IsDirectory)));
        Ok(())
    }

    #[test]
    fn test_labels() {
        assert_eq!(Source::DirectText("x".into()).label(), STDIN_LABEL);
        assert_eq!(Source::Stdin.describe(), "standard input");
        assert_eq!(Source::DirectText("x".into()).describe(), "direct text");
    }
}
