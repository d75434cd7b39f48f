// src/processing/content_reader.rs

use crate::errors::ReadError;
use crate::filtering::check_readable;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads a stream until end-of-input. An empty stream yields an empty buffer.
pub(crate) fn read_stream(reader: &mut dyn Read) -> Result<Vec<u8>, ReadError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Checks that `path` is a readable regular file, then reads it fully.
///
/// The file may still change between the check and the open; such failures
/// surface as [`ReadError::Io`].
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>, ReadError> {
    check_readable(path)?;
    let mut file = File::open(path)?;
    read_stream(&mut file)
}
