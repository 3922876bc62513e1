use super::*;

fn parse(content: &str) -> (ParseResult, Vec<ParsingError>) {
    parse_with_recovery(content)
}

fn require(kind: RequireKind, paths: &[&str]) -> Require {
    Require {
        kind,
        paths: paths
            .iter()
            .map(|path| path.to_string())
            .collect(),
    }
}

#[test]
fn basic_extraction() {
    let (result, problems) = parse(r#"hscpp_require_source("a.cpp", "b.cpp")"#);

    assert!(problems.is_empty());
    assert_eq!(
        result.requires,
        vec![require(RequireKind::Source, &["a.cpp", "b.cpp"])]
    );
    assert!(result
        .preprocessor_definitions
        .is_empty());
}

#[test]
fn each_kind_of_require() {
    let (result, problems) = parse(
        r#"
hscpp_require_source("Printer.cpp");
hscpp_require_include("../include");
hscpp_require_lib("opengl32.lib");
        "#,
    );

    assert!(problems.is_empty());
    assert_eq!(
        result.requires,
        vec![
            require(RequireKind::Source, &["Printer.cpp"]),
            require(RequireKind::Include, &["../include"]),
            require(RequireKind::Library, &["opengl32.lib"]),
        ]
    );
}

#[test]
fn kinds_combine_in_file_order() {
    let (result, problems) = parse(
        r#"
hscpp_require_include("inc")
hscpp_require_lib("x.lib")
hscpp_preprocessor_definitions(DEBUG, "RELEASE")
        "#,
    );

    assert!(problems.is_empty());
    assert_eq!(
        result.requires,
        vec![
            require(RequireKind::Include, &["inc"]),
            require(RequireKind::Library, &["x.lib"]),
        ]
    );
    assert_eq!(result.preprocessor_definitions, vec!["DEBUG", "RELEASE"]);
}

#[test]
fn definitions_accumulate_across_calls() {
    let (result, _) = parse(
        r#"
hscpp_preprocessor_definitions(A);
hscpp_require_source("x.cpp");
hscpp_preprocessor_definitions("B=1", A, _c9);
        "#,
    );

    assert_eq!(result.preprocessor_definitions, vec!["A", "B=1", "A", "_c9"]);
    assert_eq!(
        result.requires,
        vec![require(RequireKind::Source, &["x.cpp"])]
    );
}

#[test]
fn duplicate_paths_are_kept() {
    let (result, _) = parse(
        r#"
hscpp_require_source("a.cpp", "a.cpp");
hscpp_require_source("a.cpp");
        "#,
    );

    assert_eq!(
        result.requires,
        vec![
            require(RequireKind::Source, &["a.cpp", "a.cpp"]),
            require(RequireKind::Source, &["a.cpp"]),
        ]
    );
}

#[test]
fn whitespace_around_arguments() {
    let (result, problems) = parse("hscpp_require_lib \n ( \t\"a.lib\"\n ,\n\"b.lib\" )");

    assert!(problems.is_empty());
    assert_eq!(
        result.requires,
        vec![require(RequireKind::Library, &["a.lib", "b.lib"])]
    );
}

#[test]
fn line_comment_suppresses_directive() {
    let (result, problems) = parse("// hscpp_require_source(\"foo.cpp\")\n");

    assert!(result.is_empty());
    assert!(problems.is_empty());
}

#[test]
fn line_comment_ends_at_newline() {
    let (result, _) = parse("// comment\nhscpp_require_source(\"foo.cpp\")");

    assert_eq!(
        result.requires,
        vec![require(RequireKind::Source, &["foo.cpp"])]
    );
}

#[test]
fn block_comment_suppresses_directive() {
    let (result, problems) = parse(
        r#"
/*
 * hscpp_require_source("foo.cpp")
 */
hscpp_require_lib("bar.lib")
        "#,
    );

    assert!(problems.is_empty());
    assert_eq!(
        result.requires,
        vec![require(RequireKind::Library, &["bar.lib"])]
    );
}

#[test]
fn block_comment_with_isolated_star() {
    // A '*' that isn't followed by '/' does not close the comment.
    let (result, _) = parse(
        r#"
/* x * y hscpp_require_source("hidden.cpp") */
hscpp_require_source("visible.cpp")
        "#,
    );

    assert_eq!(
        result.requires,
        vec![require(RequireKind::Source, &["visible.cpp"])]
    );
}

#[test]
fn unterminated_block_comment_is_silent() {
    let (result, problems) = parse("/* hscpp_require_source(\"a.cpp\")");

    assert!(result.is_empty());
    assert!(problems.is_empty());
}

#[test]
fn string_literal_suppresses_directive() {
    let (result, problems) =
        parse(r#"const char* s = "hscpp_require_source(\"x.cpp\")";"#);

    assert!(result.is_empty());
    assert!(problems.is_empty());
}

#[test]
fn quote_in_character_literal_starts_a_string() {
    // Character literals are not understood; the quote inside one opens a
    // string that runs to the next '"', and a second one closes things up.
    let (result, problems) = parse(
        r#"
char open = '"';
hscpp_require_source("hidden.cpp");
char close = '"';
hscpp_require_lib("visible.lib");
        "#,
    );

    assert!(problems.is_empty());
    assert_eq!(
        result.requires,
        vec![require(RequireKind::Library, &["visible.lib"])]
    );
}

#[test]
fn string_with_escaped_backslash() {
    let (result, _) = parse(
        r#"
const char* dir = "C:\\";
hscpp_require_include("include")
        "#,
    );

    assert_eq!(
        result.requires,
        vec![require(RequireKind::Include, &["include"])]
    );
}

#[test]
fn escaped_quotes_in_arguments() {
    let (result, problems) = parse(r#"hscpp_preprocessor_definitions("NAME=\"value\"")"#);

    assert!(problems.is_empty());
    assert_eq!(result.preprocessor_definitions, vec![r#"NAME="value""#]);
}

#[test]
fn backslashes_in_paths_are_kept() {
    let (result, _) = parse(r#"hscpp_require_include("C:\\SDK\\include\\")"#);

    assert_eq!(
        result.requires,
        vec![require(RequireKind::Include, &[r"C:\\SDK\\include\\"])]
    );
}

#[test]
fn prefix_without_parenthesis_is_not_a_directive() {
    let (result, problems) = parse("int hscpp_require_source_custom_thing = 0;");
    assert!(result.is_empty());
    assert!(problems.is_empty());

    let (result, problems) = parse("void hscpp_require_library(const char*);");
    assert!(result.is_empty());
    assert!(problems.is_empty());

    let (result, problems) = parse("#define hscpp_preprocessor_definitions");
    assert!(result.is_empty());
    assert!(problems.is_empty());
}

#[test]
fn unknown_suffix_is_not_a_directive() {
    let (result, problems) = parse(r#"hscpp_require_module("a.cpp")"#);

    assert!(result.is_empty());
    assert!(problems.is_empty());
}

#[test]
fn missing_closing_paren() {
    let (result, problems) = parse(
        r#"
hscpp_require_source("a.cpp"
int x = 0;
hscpp_require_lib("y.lib")
        "#,
    );

    assert_eq!(
        result.requires,
        vec![require(RequireKind::Library, &["y.lib"])]
    );
    assert_eq!(problems.len(), 1);
    assert!(matches!(
        problems[0],
        ParsingError::MissingClosingParen(_, "hscpp_require_source")
    ));
}

#[test]
fn missing_closing_paren_directly_before_next_directive() {
    let (result, problems) = parse("hscpp_require_source(\"a.cpp\"\nhscpp_require_lib(\"y.lib\")");

    assert_eq!(
        result.requires,
        vec![require(RequireKind::Library, &["y.lib"])]
    );
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].offset(), 29);
}

#[test]
fn missing_opening_quote() {
    let (result, problems) = parse("hscpp_require_source(a.cpp)");

    assert!(result.is_empty());
    assert_eq!(problems, vec![ParsingError::MissingOpeningQuote(21)]);
}

#[test]
fn empty_argument_list() {
    let (result, problems) = parse("hscpp_require_source()");
    assert!(result.is_empty());
    assert_eq!(problems, vec![ParsingError::MissingOpeningQuote(21)]);

    let (result, problems) = parse("hscpp_preprocessor_definitions( )");
    assert!(result.is_empty());
    assert_eq!(problems, vec![ParsingError::InvalidDefinition(32)]);
}

#[test]
fn trailing_comma() {
    let (result, problems) = parse(r#"hscpp_require_source("a.cpp",)"#);

    assert!(result.is_empty());
    assert_eq!(problems.len(), 1);
    assert!(matches!(problems[0], ParsingError::MissingOpeningQuote(_)));
}

#[test]
fn unterminated_argument_string() {
    let (result, problems) = parse(r#"hscpp_require_lib("x.lib"#);

    assert!(result.is_empty());
    assert_eq!(problems, vec![ParsingError::UnterminatedString(18)]);
}

#[test]
fn invalid_definition() {
    let (result, problems) = parse(
        r#"
hscpp_preprocessor_definitions(GOOD, 1BAD);
hscpp_preprocessor_definitions(AFTER);
        "#,
    );

    assert_eq!(result.preprocessor_definitions, vec!["AFTER"]);
    assert_eq!(problems.len(), 1);
    assert!(matches!(problems[0], ParsingError::InvalidDefinition(_)));
}

#[test]
fn failed_call_discards_only_its_own_arguments() {
    let (result, problems) = parse(
        r#"
hscpp_require_source("one.cpp");
hscpp_require_source("two.cpp", three.cpp);
hscpp_require_source("four.cpp");
        "#,
    );

    assert_eq!(
        result.requires,
        vec![
            require(RequireKind::Source, &["one.cpp"]),
            require(RequireKind::Source, &["four.cpp"]),
        ]
    );
    assert_eq!(problems.len(), 1);
}

#[test]
fn lone_slash_is_ordinary() {
    let (result, _) = parse(r#"int x = 4 / 2; hscpp_require_source("a.cpp")"#);

    assert_eq!(
        result.requires,
        vec![require(RequireKind::Source, &["a.cpp"])]
    );
}

#[test]
fn non_ascii_content() {
    let (result, problems) = parse(
        r#"
// Ünïcödé comment
const char* s = "héllo";
hscpp_require_source("dätä.cpp")
        "#,
    );

    assert!(problems.is_empty());
    assert_eq!(
        result.requires,
        vec![require(RequireKind::Source, &["dätä.cpp"])]
    );
}

#[test]
fn scanning_is_repeatable() {
    let content = r#"
hscpp_require_source("a.cpp")
hscpp_require_source("broken.cpp"
hscpp_preprocessor_definitions(X)
    "#;

    let first = parse(content);
    let second = parse(content);
    assert_eq!(first, second);
}

#[test]
fn empty_input() {
    let (result, problems) = parse("");

    assert_eq!(result, ParseResult::default());
    assert!(problems.is_empty());
}

#[test]
fn error_messages() {
    assert_eq!(
        ParsingError::MissingClosingParen(0, RequireKind::Library.keyword()).message(),
        "hscpp_require_lib missing closing ')'"
    );
    assert_eq!(
        ParsingError::MissingOpeningQuote(0).to_string(),
        "missing opening '\"'"
    );
    assert_eq!(
        ParsingError::UnterminatedString(0).to_string(),
        "unterminated string, expected a '\"'"
    );
}
