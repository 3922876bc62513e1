//! scanner for hscpp directives embedded in C++ source

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, ParseResult};
use crate::problem::{concise_loading_error, concise_parsing_error, Report};
use crate::rendering::Identity;

mod cursor;
mod literals;
pub mod parser;

pub use parser::{ParsingError, PREPROCESSOR_DEFINITIONS};

/// Read a file and return an owned String. The caller keeps ownership so
/// that diagnostics can refer back into the content.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Scan text for directives. Everything that could be recognized is
/// returned, along with an error for each malformed directive.
pub fn parse(filename: &Path, content: &str) -> (ParseResult, Vec<ParsingError>) {
    let (result, errors) = parser::parse_with_recovery(content);

    let requires = result
        .requires
        .len();
    let definitions = result
        .preprocessor_definitions
        .len();
    debug!(
        "{}: found {} require{} and {} preprocessor definition{}",
        filename.display(),
        requires,
        if requires == 1 { "" } else { "s" },
        definitions,
        if definitions == 1 { "" } else { "s" }
    );
    if !errors.is_empty() {
        debug!("errors: {}", errors.len());
    }

    (result, errors)
}

/// Load and scan one file, sending a diagnostic to `reporter` for each
/// problem found. A file that cannot be read yields an empty result.
pub fn scan(filename: &Path, reporter: &mut impl Report) -> ParseResult {
    let content = match load(filename) {
        Ok(content) => content,
        Err(error) => {
            reporter.report(concise_loading_error(&error, &Identity));
            return ParseResult::default();
        }
    };

    let (result, errors) = parse(filename, &content);
    for error in &errors {
        reporter.report(concise_parsing_error(error, filename, &content, &Identity));
    }

    result
}
