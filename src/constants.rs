// src/constants.rs

/// Label used for content that has no path (standard input).
pub const STDIN_LABEL: &str = "standard input";

/// Opening and closing tags for the HTML code-block wrap.
pub const HTML_CODE_OPEN: &str = "<code>";
pub const HTML_CODE_CLOSE: &str = "</code>";

/// Fence used for the Markdown code-block wrap.
pub const MARKDOWN_FENCE: &str = "```";

/// Comment delimiters used to hide the MIME annotation inside wrapped output.
pub const COMMENT_OPEN: &str = "<!--";
pub const COMMENT_CLOSE: &str = "-->";

/// Separator between a line number and the line content.
pub const LINE_NUMBER_SEPARATOR: &str = ": ";

/// MIME type reported for content that is neither recognised nor text.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Build metadata appended to the version string, set at compile time.
pub const BUILD_METADATA: &str = match option_env!("CLIPPER_BUILD_METADATA") {
    Some(meta) => meta,
    None => "git/source",
};

/// Returns the version string shown by `clipper -v`.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION").trim();
    let metadata = BUILD_METADATA.trim();
    if metadata.is_empty() {
        version.to_string()
    } else {
        format!("{} {}", version, metadata)
    }
}
