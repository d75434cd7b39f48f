// src/cli.rs

use clap::Parser;

/// Clipper is a lightweight command-line tool for copying contents to the clipboard.
///
/// Text is taken from `-c`, from the listed files (read concurrently and joined
/// in the order given), or from standard input when neither is provided.
/// Each file can optionally be wrapped in an HTML or Markdown code block,
/// annotated with its MIME type, or numbered line by line.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
#[command(after_help = "If no file or text is provided, reads from standard input.")]
pub struct Cli {
    /// Files to read, in order. Their contents are joined with newlines.
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Copy text directly from the command line argument. Files and stdin are ignored.
    #[arg(short = 'c', long, value_name = "TEXT")]
    pub text: Option<String>,

    // --- Formatting Options ---
    /// Put each file's data within an HTML5 <code> block.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub html: bool,

    /// Put each file's data within a Markdown code block.
    #[arg(short = 'm', long, action = clap::ArgAction::SetTrue)]
    pub markdown: bool,

    /// Include the MIME type of each file above its content.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub mime: bool,

    /// Add line numbers (N: ) to the content.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue)]
    pub line_numbers: bool,

    // --- Output Destination ---
    /// Print the result to standard output instead of copying it to the clipboard.
    #[arg(short = 's', long, action = clap::ArgAction::SetTrue)]
    pub stdout: bool,

    /// Show the current version of the clipper tool.
    #[arg(short = 'v', long = "version", action = clap::ArgAction::SetTrue)]
    pub show_version: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_files_in_order() {
        let cli = Cli::parse_from(["clipper", "b.txt", "a.txt"]);
        assert_eq!(cli.files, vec!["b.txt", "a.txt"]);
        assert!(cli.text.is_none());
        assert!(!cli.show_version);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::parse_from(["clipper", "-c", "hi", "-m", "-n", "-s", "-v"]);
        assert_eq!(cli.text.as_deref(), Some("hi"));
        assert!(cli.markdown);
        assert!(cli.line_numbers);
        assert!(cli.stdout);
        assert!(cli.show_version);
        assert!(!cli.html);
        assert!(!cli.mime);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
