//! Output generation for the hscpp-scan CLI application

use serde::Serialize;
use std::fmt;
use std::path::Path;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::language::ParseResult;

static TEMPLATE: &'static str = r#"{filename}
{{ for require in requires }}    {require.kind}: {require.paths}
{{ endfor }}{{ for definition in definitions }}    define: {definition}
{{ endfor }}"#;

/// How a ParseResult is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Native,
    Json,
}

#[derive(Debug)]
pub enum OutputError {
    Template(tinytemplate::error::Error),
    Json(serde_json::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Template(error) => write!(f, "Failed rendering template: {}", error),
            OutputError::Json(error) => write!(f, "Failed serializing to JSON: {}", error),
        }
    }
}

impl std::error::Error for OutputError {}

impl From<tinytemplate::error::Error> for OutputError {
    fn from(error: tinytemplate::error::Error) -> Self {
        OutputError::Template(error)
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(error: serde_json::Error) -> Self {
        OutputError::Json(error)
    }
}

#[derive(Serialize)]
struct Context<'a> {
    filename: String,
    requires: Vec<Line>,
    definitions: &'a [String],
}

#[derive(Serialize)]
struct Line {
    kind: String,
    paths: String,
}

#[derive(Serialize)]
struct Document<'a> {
    filename: String,
    #[serde(flatten)]
    result: &'a ParseResult,
}

pub fn render(filename: &Path, result: &ParseResult, format: Format) -> Result<String, OutputError> {
    debug!("Rendering {} as {:?}", filename.display(), format);

    match format {
        Format::Native => via_template(filename, result),
        Format::Json => {
            let document = Document {
                filename: filename
                    .to_string_lossy()
                    .to_string(),
                result,
            };
            Ok(serde_json::to_string_pretty(&document)?)
        }
    }
}

fn via_template(filename: &Path, result: &ParseResult) -> Result<String, OutputError> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("native", TEMPLATE)?;

    let requires = result
        .requires
        .iter()
        .map(|require| Line {
            kind: require
                .kind
                .to_string(),
            paths: require
                .paths
                .iter()
                .map(|path| format!("\"{}\"", path))
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let context = Context {
        filename: filename
            .to_string_lossy()
            .to_string(),
        requires,
        definitions: &result.preprocessor_definitions,
    };

    Ok(tt.render("native", &context)?)
}
