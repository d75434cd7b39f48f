// src/filtering/mod.rs

//! Provides standalone checks applied to raw input.
//!
//! The readability check guards every file read, and the MIME classifier
//! labels raw bytes for the formatter's annotation. Both are exposed publicly
//! so they can be used on their own.

mod mime;
mod readable;

pub use mime::detect_mime_type;
pub use readable::check_readable;
