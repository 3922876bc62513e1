//! Types representing the build directives extracted from a source file

use serde::Serialize;
use std::fmt;

/// Why a path was declared: an extra translation unit, an extra include
/// search path, or an extra link input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequireKind {
    Source,
    Include,
    Library,
}

impl RequireKind {
    /// The directive keyword which declares a Require of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            RequireKind::Source => "hscpp_require_source",
            RequireKind::Include => "hscpp_require_include",
            RequireKind::Library => "hscpp_require_lib",
        }
    }
}

impl fmt::Display for RequireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequireKind::Source => "source",
            RequireKind::Include => "include",
            RequireKind::Library => "library",
        };
        f.write_str(name)
    }
}

/// One recognized `hscpp_require_*` call. The paths are in the order they
/// were written and are never empty.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Require {
    pub kind: RequireKind,
    pub paths: Vec<String>,
}

/// Everything extracted from a single file, in the order it appeared.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub requires: Vec<Require>,
    pub preprocessor_definitions: Vec<String>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.requires
            .is_empty()
            && self
                .preprocessor_definitions
                .is_empty()
    }

    /// Iterate over the paths of every Require of the given kind.
    pub fn paths(&self, kind: RequireKind) -> impl Iterator<Item = &str> {
        self.requires
            .iter()
            .filter(move |require| require.kind == kind)
            .flat_map(|require| {
                require
                    .paths
                    .iter()
                    .map(String::as_str)
            })
    }
}
