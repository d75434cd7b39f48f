// src/output/writer.rs

//! Manages the output destination (clipboard or stdout).
//!
//! The pipeline hands its final string to a [`ClipboardSink`] exactly once.
//! [`SystemClipboard`] writes to the OS clipboard through `arboard`, and
//! [`StreamSink`] writes to any `std::io::Write` (stdout for `--stdout`, or a
//! buffer in tests).

use crate::config::{Config, OutputDestination};
use crate::errors::ClipboardError;
use byte_unit::{Byte, Unit, UnitType};
use std::io::{self, Write};

/// Receives the final aggregated text.
///
/// Implementations perform a single blocking write and never retry.
///
/// # Examples
///
/// ```
/// use clipper::errors::ClipboardError;
/// use clipper::output::writer::ClipboardSink;
///
/// // A sink that just remembers the last text.
/// #[derive(Default)]
/// struct Memory(Option<String>);
///
/// impl ClipboardSink for Memory {
///     fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
///         self.0 = Some(text.to_string());
///         Ok(())
///     }
/// }
///
/// let mut sink = Memory::default();
/// sink.write("copied").unwrap();
/// assert_eq!(sink.0.as_deref(), Some("copied"));
/// ```
pub trait ClipboardSink {
    /// Writes `text` to the destination.
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Creates a handle to the system clipboard. The clipboard itself is only
    /// opened when [`ClipboardSink::write`] is called.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSink for SystemClipboard {
    #[cfg(feature = "clipboard")]
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::Clipboard;
        let mut clipboard =
            Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::SetContent(e.to_string()))?;
        log::debug!("Wrote {} bytes to the system clipboard.", text.len());
        Ok(())
    }

    #[cfg(not(feature = "clipboard"))]
    fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "clipper was built without the `clipboard` feature; use --stdout".to_string(),
        ))
    }
}

/// Writes the text to a `std::io::Write` implementation.
#[derive(Debug)]
pub struct StreamSink<W: Write> {
    inner: W,
}

impl<W: Write> StreamSink<W> {
    /// Wraps a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ClipboardSink for StreamSink<W> {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .write_all(text.as_bytes())
            .and_then(|()| self.inner.flush())
            .map_err(|e| ClipboardError::SetContent(e.to_string()))
    }
}

/// Creates the sink matching the configured [`OutputDestination`].
pub fn setup_sink(config: &Config) -> Box<dyn ClipboardSink> {
    match config.output_destination {
        OutputDestination::Clipboard => Box::new(SystemClipboard::new()),
        OutputDestination::Stdout => Box::new(StreamSink::new(io::stdout())),
    }
}

/// Renders a byte count for the success message: whole bytes below 1 kB,
/// one decimal place above.
pub fn format_copied_size(bytes: usize) -> String {
    let size = Byte::from_u64(bytes as u64).get_appropriate_unit(UnitType::Decimal);
    if size.get_unit() == Unit::B {
        format!("{} B", bytes)
    } else {
        format!("{:.1}", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_copied_size_small_payload_has_no_decimals() {
        assert_eq!(format_copied_size(0), "0 B");
        assert_eq!(format_copied_size(12), "12 B");
        assert_eq!(format_copied_size(999), "999 B");
    }

    #[test]
    fn test_format_copied_size_scales_larger_payloads() {
        assert_eq!(format_copied_size(1_500), "1.5 KB");
        assert_eq!(format_copied_size(2_000_000), "2.0 MB");
    }

    #[test]
    fn test_stream_sink_writes_exact_text() {
        let mut sink = StreamSink::new(Vec::new());
        sink.write("Hello, ").unwrap();
        sink.write("World!").unwrap();
        assert_eq!(sink.into_inner(), b"Hello, World!");
    }

    #[test]
    fn test_stream_sink_reports_write_failure() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = StreamSink::new(Broken);
        let err = sink.write("data").unwrap_err();
        assert!(matches!(err, ClipboardError::SetContent(ref msg) if msg.contains("pipe closed")));
    }

    #[test]
    fn test_setup_sink_for_each_destination() {
        let mut config = Config::new_for_test();
        config.output_destination = OutputDestination::Stdout;
        let _stdout_sink = setup_sink(&config);
        config.output_destination = OutputDestination::Clipboard;
        let _clipboard_sink = setup_sink(&config);
    }

    // Writing to the real clipboard depends on a display server being present.
    // Without one, arboard fails to initialise and the error is `Unavailable`.
    #[test]
    fn test_system_clipboard_error_kind() {
        let mut clipboard = SystemClipboard::new();
        if let Err(e) = clipboard.write("clipboard data") {
            assert!(matches!(
                e,
                ClipboardError::Unavailable(_) | ClipboardError::SetContent(_)
            ));
        }
    }
}
