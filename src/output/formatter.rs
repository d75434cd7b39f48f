// src/output/formatter.rs

//! Turns the raw bytes of one source into its display text.
//!
//! Formatting depends only on the bytes, the label, and the options, so it is
//! safe to run for many fragments in parallel.

use crate::config::FormatOptions;
use crate::constants::{
    COMMENT_CLOSE, COMMENT_OPEN, HTML_CODE_CLOSE, HTML_CODE_OPEN, LINE_NUMBER_SEPARATOR,
    MARKDOWN_FENCE,
};
use crate::filtering::detect_mime_type;

/// Formats raw content according to `options`.
///
/// With no toggle set the bytes are returned as text, unchanged. Otherwise an
/// optional `<label> (<mime type>)` annotation is written first (inside an
/// HTML comment when the body is wrapped in a code block), followed by exactly
/// one body transform: HTML wrap, Markdown wrap, line numbers, or none, in
/// that priority order.
///
/// Invalid UTF-8 is replaced with U+FFFD.
///
/// # Examples
/// ```
/// use clipper::config::FormatOptions;
/// use clipper::output::formatter::format_content;
///
/// let html = FormatOptions { html: true, ..Default::default() };
/// assert_eq!(format_content("a.txt", b"hi", &html), "<code>\nhi\n</code>");
///
/// let numbered = FormatOptions { line_numbers: true, ..Default::default() };
/// assert_eq!(format_content("a.txt", b"a\nb", &numbered), "1: a\n2: b\n");
/// ```
pub fn format_content(label: &str, raw: &[u8], options: &FormatOptions) -> String {
    let content = String::from_utf8_lossy(raw);
    if !options.should_format() {
        return content.into_owned();
    }

    let mut out = String::with_capacity(content.len() + label.len() + 32);

    if options.mime_type {
        let annotation = format!("{} ({})", label, detect_mime_type(raw));
        if options.wraps_code() {
            out.push_str(COMMENT_OPEN);
            out.push('\n');
            out.push_str(&annotation);
            out.push('\n');
            out.push_str(COMMENT_CLOSE);
            out.push('\n');
        } else {
            out.push_str(&annotation);
            out.push('\n');
        }
    }

    if options.html {
        wrap(&mut out, &content, HTML_CODE_OPEN, HTML_CODE_CLOSE);
    } else if options.markdown {
        wrap(&mut out, &content, MARKDOWN_FENCE, MARKDOWN_FENCE);
    } else if options.line_numbers {
        write_numbered_lines(&mut out, &content);
    } else {
        out.push_str(&content);
    }

    out
}

fn wrap(out: &mut String, content: &str, open: &str, close: &str) {
    out.push_str(open);
    out.push('\n');
    out.push_str(content);
    out.push('\n');
    out.push_str(close);
}

/// Numbers every `\n`-separated piece, including a trailing empty one.
fn write_numbered_lines(out: &mut String, content: &str) {
    for (i, line) in content.split('\n').enumerate() {
        out.push_str(&(i + 1).to_string());
        out.push_str(LINE_NUMBER_SEPARATOR);
        out.push_str(line);
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(html: bool, markdown: bool, mime_type: bool, line_numbers: bool) -> FormatOptions {
        FormatOptions {
            html,
            markdown,
            mime_type,
            line_numbers,
        }
    }

    #[test]
    fn test_no_formatting_passes_through() {
        let raw = b"  keep\n\tthis as is\n";
        assert_eq!(
            format_content("x", raw, &FormatOptions::default()),
            "  keep\n\tthis as is\n"
        );
    }

    #[test]
    fn test_html_wrap() {
        assert_eq!(
            format_content("x", b"<b>hi</b>", &opts(true, false, false, false)),
            "<code>\n<b>hi</b>\n</code>"
        );
    }

    #[test]
    fn test_markdown_wrap() {
        assert_eq!(
            format_content("x", b"fn main() {}", &opts(false, true, false, false)),
            "```\nfn main() {}\n```"
        );
    }

    #[test]
    fn test_line_numbers() {
        assert_eq!(
            format_content("x", b"a\nb", &opts(false, false, false, true)),
            "1: a\n2: b\n"
        );
    }

    #[test]
    fn test_line_numbers_trailing_newline_numbers_empty_last_line() {
        assert_eq!(
            format_content("x", b"a\n", &opts(false, false, false, true)),
            "1: a\n2: \n"
        );
    }

    #[test]
    fn test_line_numbers_past_nine() {
        let input = (1..=11).map(|i| format!("l{}", i)).collect::<Vec<_>>().join("\n");
        let output = format_content("x", input.as_bytes(), &opts(false, false, false, true));
        assert!(output.starts_with("1: l1\n2: l2\n"));
        assert!(output.ends_with("10: l10\n11: l11\n"));
        assert_eq!(output.lines().count(), 11);
    }

    #[test]
    fn test_html_beats_markdown_and_line_numbers() {
        assert_eq!(
            format_content("x", b"a\nb", &opts(true, true, false, true)),
            "<code>\na\nb\n</code>"
        );
    }

    #[test]
    fn test_markdown_beats_line_numbers() {
        assert_eq!(
            format_content("x", b"a\nb", &opts(false, true, false, true)),
            "```\na\nb\n```"
        );
    }

    #[test]
    fn test_mime_annotation_plain() {
        assert_eq!(
            format_content("notes.txt", b"hello", &opts(false, false, true, false)),
            "notes.txt (text/plain; charset=utf-8)\nhello"
        );
    }

    #[test]
    fn test_mime_annotation_with_line_numbers() {
        assert_eq!(
            format_content("notes.txt", b"a\nb", &opts(false, false, true, true)),
            "notes.txt (text/plain; charset=utf-8)\n1: a\n2: b\n"
        );
    }

    #[test]
    fn test_mime_annotation_is_commented_inside_markdown() {
        assert_eq!(
            format_content("standard input", b"hi", &opts(false, true, true, false)),
            "<!--\nstandard input (text/plain; charset=utf-8)\n-->\n```\nhi\n```"
        );
    }

    #[test]
    fn test_mime_annotation_is_commented_inside_html() {
        assert_eq!(
            format_content("a.html", b"x", &opts(true, false, true, false)),
            "<!--\na.html (text/plain; charset=utf-8)\n-->\n<code>\nx\n</code>"
        );
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let raw = [0x48, 0x65, 0x6c, 0x6c, 0x80, 0x6f];
        assert_eq!(
            format_content("x", &raw, &FormatOptions::default()),
            "Hell\u{FFFD}o"
        );
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let raw = b"line one\nline two";
        let options = opts(false, true, true, false);
        assert_eq!(
            format_content("f", raw, &options),
            format_content("f", raw, &options)
        );
    }
}
