// src/filtering/mime.rs

use crate::constants::OCTET_STREAM;
use content_inspector::ContentType;
use infer::MatcherType;
use std::str;

// Only the head of the buffer is used for magic-number and text sniffing.
const SNIFF_LEN: usize = 1024;

/// Prefixes of textual formats, matched case-insensitively after leading whitespace.
const TEXT_SIGNATURES: &[(&str, &str)] = &[
    ("<!doctype html", "text/html; charset=utf-8"),
    ("<html", "text/html; charset=utf-8"),
    ("<?xml", "text/xml; charset=utf-8"),
    ("<svg", "image/svg+xml"),
    ("#!/bin/sh", "text/x-shellscript"),
    ("#!/bin/bash", "text/x-shellscript"),
    ("#!/usr/bin/env bash", "text/x-shellscript"),
    ("#!/usr/bin/env python", "text/x-python"),
];

/// Detects a MIME type string from raw bytes.
///
/// Binary formats are recognised by their magic numbers through `infer`.
/// Anything else is classified with `content_inspector`: text gets a
/// `text/...` type with its charset, and unrecognised binary data is
/// `application/octet-stream`.
///
/// # Examples
/// ```
/// use clipper::filtering::detect_mime_type;
///
/// assert_eq!(detect_mime_type(b"plain words"), "text/plain; charset=utf-8");
/// assert_eq!(detect_mime_type(b"\x89PNG\r\n\x1a\n...."), "image/png");
/// assert_eq!(detect_mime_type(b"bin\0ary"), "application/octet-stream");
/// ```
pub fn detect_mime_type(data: &[u8]) -> &'static str {
    let head = &data[..data.len().min(SNIFF_LEN)];

    if let Some(kind) = infer::get(head).filter(|k| k.matcher_type() != MatcherType::Text) {
        return kind.mime_type();
    }

    match content_inspector::inspect(head) {
        ContentType::UTF_8 | ContentType::UTF_8_BOM if is_valid_utf8_head(head) => {
            text_signature(head).unwrap_or("text/plain; charset=utf-8")
        }
        ContentType::UTF_16LE => "text/plain; charset=utf-16le",
        ContentType::UTF_16BE => "text/plain; charset=utf-16be",
        _ => OCTET_STREAM,
    }
}

/// Checks UTF-8 validity of a truncated head, tolerating a multi-byte
/// sequence cut off at the end of the slice.
fn is_valid_utf8_head(head: &[u8]) -> bool {
    match str::from_utf8(head) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none() && head.len() == SNIFF_LEN,
    }
}

fn text_signature(head: &[u8]) -> Option<&'static str> {
    let text = String::from_utf8_lossy(head);
    let trimmed = text.trim_start_matches('\u{feff}').trim_start();
    let lowered = trimmed
        .get(..trimmed.len().min(32))
        .unwrap_or(trimmed)
        .to_ascii_lowercase();
    TEXT_SIGNATURES
        .iter()
        .find(|(prefix, _)| lowered.starts_with(prefix))
        .map(|(_, mime)| *mime)
}
