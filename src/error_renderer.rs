//! Error rendering using ariadne
//!
//! Renders [`Error`]s with the offending source lines and a label pointing at
//! the declaration or token that failed.

use crate::{Error, ParseError, TypeError};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Defaults to "<unknown>" if not provided.
    pub filename: Option<&'a str>,
    pub charset: CharSet,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
        }
    }
}

/// Render an error to stderr using the default config.
pub fn render_error(error: &Error, source: &str) {
    render_error_to(error, source, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use thiol::{RenderConfig, render_error_to};
///
/// let source = "type A = record a: Missing end";
/// let err = thiol::check(source, Default::default()).unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, ..Default::default() };
/// render_error_to(&err, source, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("undefined type `Missing`"));
/// ```
pub fn render_error_to(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<unknown>");

    let Some(span) = error.span() else {
        return writeln!(writer, "[{}] Error: {}", error.code(), error);
    };
    let range = span.start..span.end;

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset);

    let mut report = Report::build(ReportKind::Error, (filename, range.clone()))
        .with_code(error.code())
        .with_message(error.to_string())
        .with_config(ariadne_config);

    report = report.with_label(
        Label::new((filename, range))
            .with_message(label_message(error))
            .with_color(colors.next()),
    );

    if let Some(help) = error.type_error().and_then(help_message) {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(source)), &mut *writer)
}

fn label_message(error: &Error) -> String {
    match error {
        Error::Parse(ParseError::Syntax { message, .. }) => message.clone(),
        Error::Parse(ParseError::Declaration { error, .. }) | Error::Resolve { error, .. } => {
            error.error.to_string()
        }
    }
}

fn help_message(error: &TypeError) -> Option<&'static str> {
    match error {
        TypeError::CyclicType { .. } => {
            Some("Records hold their fields by value, so a type cannot contain itself")
        }
        TypeError::UnknownTemplate { .. } => Some("Make sure the type is declared in this file"),
        TypeError::DepthExceeded { .. } => Some("Raise the limit with `--max-depth`"),
        TypeError::InvalidTagBase { .. } => Some(
            "Roles and spaces apply to scalars and vectors, transforms to float and double matrices",
        ),
        _ => None,
    }
}
