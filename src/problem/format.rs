use super::messages::generate_error_message;
use crate::language::LoadingError;
use crate::parsing::ParsingError;
use crate::rendering::{Render, Syntax};
use std::path::Path;

/// Format a parsing error with full details including source code context
pub fn full_parsing_error<'i>(
    error: &ParsingError,
    filename: &'i Path,
    source: &'i str,
    renderer: &impl Render,
) -> String {
    let (problem, details) = generate_error_message(error, renderer);
    let offset = error.offset();

    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{} {} {}
{:width$} {} {}

{}
        "#,
        renderer.style(Syntax::Error, "error"),
        filename.to_string_lossy(),
        line,
        column,
        renderer.style(Syntax::Problem, &problem),
        ' ',
        renderer.style(Syntax::Gutter, "|"),
        renderer.style(Syntax::Gutter, &format!("{:>width$}", line)),
        renderer.style(Syntax::Gutter, "|"),
        code,
        ' ',
        renderer.style(Syntax::Gutter, "|"),
        renderer.style(Syntax::Caret, &format!("{:>column$}", "^")),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a parsing error with concise single-line output
pub fn concise_parsing_error<'i>(
    error: &ParsingError,
    filename: &'i Path,
    source: &'i str,
    renderer: &impl Render,
) -> String {
    let offset = error.offset();
    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);
    let line = i + 1;
    let column = j + 1;

    format!(
        "{}: {}:{}:{} {}",
        renderer.style(Syntax::Error, "error"),
        filename.to_string_lossy(),
        line,
        column,
        renderer.style(Syntax::Problem, &error.message()),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>, renderer: &impl Render) -> String {
    format!(
        "{}: {}: {}",
        renderer.style(Syntax::Error, "error"),
        error
            .filename
            .display(),
        renderer.style(Syntax::Problem, &error.to_string())
    )
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    before(content, offset)
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

// Calculate the column number, also zero-origin for consistency.
fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = before(content, offset);
    match before.rfind('\n') {
        Some(start) => before[start + 1..]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}

fn before(content: &str, offset: usize) -> &str {
    content
        .get(..offset)
        .unwrap_or(content)
}
