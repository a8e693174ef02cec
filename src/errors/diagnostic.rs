//! Pretty error reporting using ariadne
//!
//! Provides colorful, user-friendly error messages with source context.

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use crate::errors::{Location, MineError};

fn describe(error: &MineError) -> Option<(&str, Location, &'static str)> {
    match error {
        MineError::Lexical { message, location } => Some((message.as_str(), *location, "Lexical error")),
        MineError::Translation { message, location } => {
            Some((message.as_str(), *location, "Translation error"))
        }
        MineError::Io(_) => None,
    }
}

fn build_report<'a>(
    filename: &'a str,
    message: &str,
    location: Location,
    kind: &str,
    color: bool,
) -> Report<'a, (&'a str, std::ops::Range<usize>)> {
    let range: std::ops::Range<usize> = location.span.into();

    Report::build(ReportKind::Error, (filename, range.clone()))
        .with_config(
            Config::default()
                .with_index_type(IndexType::Byte)
                .with_color(color),
        )
        .with_message(format!("{} at {}", kind, location))
        .with_label(
            Label::new((filename, range))
                .with_message(message)
                .with_color(Color::Red),
        )
        .finish()
}

/// Print an error with source context
pub fn print_error(source: &str, filename: &str, error: &MineError) {
    let Some((message, location, kind)) = describe(error) else {
        eprintln!("{}", error);
        return;
    };

    if build_report(filename, message, location, kind, true)
        .eprint((filename, Source::from(source)))
        .is_err()
    {
        eprintln!("{}", error);
    }
}

/// Format an error as a string (for testing)
pub fn format_error(source: &str, filename: &str, error: &MineError) -> String {
    let Some((message, location, kind)) = describe(error) else {
        return error.to_string();
    };

    let mut output = Vec::new();
    if build_report(filename, message, location, kind, false)
        .write((filename, Source::from(source)), &mut output)
        .is_err()
    {
        return error.to_string();
    }

    String::from_utf8_lossy(&output).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SourceSpan;

    #[test]
    fn test_format_error_mentions_message_and_position() {
        let source = "x MARCAR_AREA 1\nOPERACA f() {}\n";
        let err = MineError::lexical(
            "unknown MineLang keyword 'OPERACA'",
            Location::new(2, 1, SourceSpan::new(16, 23)),
        );
        let rendered = format_error(source, "demo.mina", &err);
        assert!(rendered.contains("unknown MineLang keyword 'OPERACA'"));
        assert!(rendered.contains("2:1"));
    }

    #[test]
    fn test_format_io_error_falls_back_to_display() {
        let err: MineError = std::io::Error::other("disk full").into();
        assert_eq!(format_error("", "x.mina", &err), "IO error: disk full");
    }
}
