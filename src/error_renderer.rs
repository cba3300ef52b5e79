//! Error rendering using ariadne
//!
//! This module renders parse and runtime errors with a snippet of the
//! source text they refer to. Errors only carry positions, so the caller
//! passes the source text along.

use ariadne::{ColorGenerator, Config, IndexType, Label, Report, ReportKind, Source};
use est_core::parser::ParseErrorKind;
use std::io::Write;

use crate::{Error, Position};

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use est::{Engine, EngineOptions, render_error};
///
/// let engine = Engine::new(EngineOptions::default(), |_| {});
///
/// let source = "1 +";
/// if let Err(e) = engine.compile("input", source) {
///     render_error(&e, source);
/// }
/// ```
pub fn render_error(error: &Error, source: &str) {
    render_error_to_writer(error, source, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
///
/// This is useful when you want to control where the error is written,
/// such as to a file, a buffer, or a custom output stream.
pub fn render_error_to(error: &Error, source: &str, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, source, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error, source: &str) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, source, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn primary_label(error: &Error) -> String {
    match error {
        Error::Parse(err) => match &err.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => format!("expected {}", expected),
            kind => kind.to_string(),
        },
        Error::Runtime(err) => err.message(),
    }
}

fn render_error_to_writer(
    error: &Error,
    source: &str,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    // Innermost first. The rendered source is the one the outermost position
    // refers to; positions in other sources can only be mentioned in notes.
    let positions: Vec<&Position> = match error {
        Error::Parse(err) => vec![err.position()],
        Error::Runtime(err) => err.trace().iter().collect(),
    };
    let unknown = Position::default();
    let outermost = positions.last().copied().unwrap_or(&unknown);
    let name = outermost.source_name();
    let primary = positions
        .iter()
        .copied()
        .find(|pos| pos.source_name() == name)
        .unwrap_or(outermost);
    let span = primary.span_in(source);

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let mut report = Report::build(ReportKind::Error, (name, span.clone()))
        .with_message(error.message())
        .with_config(
            Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        );

    report = report.with_label(
        Label::new((name, span))
            .with_message(primary_label(error))
            .with_color(colors.next()),
    );

    for pos in positions {
        if std::ptr::eq(pos, primary) {
            continue;
        }
        if pos.source_name() == name {
            report = report.with_label(
                Label::new((name, pos.span_in(source)))
                    .with_message("called from here")
                    .with_color(colors.next()),
            );
        } else {
            report = report.with_note(format!("raised at {}", pos));
        }
    }

    // Render to the writer (need to reborrow to avoid moving)
    report.finish().write((name, Source::from(source)), &mut *writer)
}
