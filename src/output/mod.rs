// src/output/mod.rs

//! Formatting of individual fragments and delivery of the final text.

pub mod formatter;
pub mod writer; // Manages the output destination
