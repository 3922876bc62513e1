use crate::parsing::ParsingError;
use crate::rendering::{Render, Syntax};

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError, renderer: &dyn Render) -> (String, String) {
    match error {
        ParsingError::MissingClosingParen(_, keyword) => (
            error.message(),
            format!(
                r#"
The argument list of {} must end with a ')'. Arguments are separated by
commas, for example:

    {}

Nothing from this directive has been recorded.
                "#,
                renderer.style(Syntax::Keyword, keyword),
                example(keyword, renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::MissingOpeningQuote(_) => (
            error.message(),
            format!(
                r#"
Paths given to {}, {}, and {} must be written as double-quoted strings.
Nothing from this directive has been recorded.
                "#,
                renderer.style(Syntax::Keyword, "hscpp_require_source"),
                renderer.style(Syntax::Keyword, "hscpp_require_include"),
                renderer.style(Syntax::Keyword, "hscpp_require_lib"),
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnterminatedString(_) => (
            error.message(),
            r#"
This string argument has no closing '"' before the end of the file. A quote
inside the string can be written as \".
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::InvalidDefinition(_) => (
            error.message(),
            format!(
                r#"
Each argument to {} must be either a double-quoted string such as {} or an
identifier such as {}. Identifiers start with a letter or underscore and
continue with letters, digits, or underscores.
                "#,
                renderer.style(Syntax::Keyword, "hscpp_preprocessor_definitions"),
                renderer.style(Syntax::String, "\"VERSION=2\""),
                renderer.style(Syntax::Neutral, "DEBUG"),
            )
            .trim_ascii()
            .to_string(),
        ),
    }
}

fn example(keyword: &str, renderer: &dyn Render) -> String {
    let arguments = match keyword {
        "hscpp_require_include" => r#""include", "../common/include""#,
        "hscpp_require_lib" => r#""user32.lib", "opengl32.lib""#,
        "hscpp_preprocessor_definitions" => r#"DEBUG, "VERSION=2""#,
        _ => r#""Printer.cpp", "Widget.cpp""#,
    };

    format!(
        "{}({})",
        renderer.style(Syntax::Keyword, keyword),
        renderer.style(Syntax::String, arguments)
    )
}
