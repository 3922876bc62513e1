#[cfg(test)]
mod verify {
    use std::path::Path;

    use hscpp_scan::language::*;
    use hscpp_scan::parsing::{self, ParsingError};
    use hscpp_scan::problem::{Log, Report};

    #[derive(Default)]
    struct Counter {
        count: usize,
    }

    impl Report for Counter {
        fn report(&mut self, _diagnostic: String) {
            self.count += 1;
        }
    }

    #[test]
    fn printer_sample() {
        let mut diagnostics: Vec<String> = Vec::new();
        let result = parsing::scan(Path::new("tests/samples/Printer.cpp"), &mut diagnostics);

        assert!(diagnostics.is_empty());
        assert_eq!(
            result,
            ParseResult {
                requires: vec![
                    Require {
                        kind: RequireKind::Source,
                        paths: vec![
                            "PrintHelper.cpp".to_string(),
                            "../common/Format.cpp".to_string()
                        ],
                    },
                    Require {
                        kind: RequireKind::Include,
                        paths: vec!["../include".to_string()],
                    },
                    Require {
                        kind: RequireKind::Library,
                        paths: vec!["user32.lib".to_string()],
                    },
                ],
                preprocessor_definitions: vec![
                    "PRINTER_VERBOSE".to_string(),
                    "PRINTER_WIDTH=80".to_string()
                ],
            }
        );
    }

    #[test]
    fn widget_sample() {
        let mut diagnostics: Vec<String> = Vec::new();
        let result = parsing::scan(Path::new("tests/samples/Widget.cpp"), &mut diagnostics);

        assert!(diagnostics.is_empty());

        let includes: Vec<&str> = result
            .paths(RequireKind::Include)
            .collect();
        assert_eq!(includes, vec!["../imgui", "../imgui/backends"]);

        let sources: Vec<&str> = result
            .paths(RequireKind::Source)
            .collect();
        assert_eq!(
            sources,
            vec![
                "../imgui/imgui.cpp",
                "../imgui/imgui_draw.cpp",
                "../imgui/imgui_widgets.cpp"
            ]
        );

        assert_eq!(
            result
                .paths(RequireKind::Library)
                .count(),
            0
        );
    }

    #[test]
    fn empty_sample() {
        let mut diagnostics: Vec<String> = Vec::new();
        let result = parsing::scan(Path::new("tests/samples/Empty.cpp"), &mut diagnostics);

        assert!(diagnostics.is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn missing_file() {
        let mut diagnostics: Vec<String> = Vec::new();
        let result = parsing::scan(Path::new("tests/samples/DoesNotExist.cpp"), &mut diagnostics);

        assert_eq!(result, ParseResult::default());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0],
            "error: tests/samples/DoesNotExist.cpp: File not found"
        );
    }

    #[test]
    fn loading_missing_file() {
        let filename = Path::new("tests/samples/DoesNotExist.cpp");
        let error = parsing::load(filename).unwrap_err();

        assert_eq!(error.problem, "File not found");
        assert_eq!(error.filename, filename);
    }

    #[test]
    fn local_error_recovery() {
        let mut diagnostics: Vec<String> = Vec::new();
        let result = parsing::scan(Path::new("tests/broken/MissingParen.cpp"), &mut diagnostics);

        assert!(result.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0],
            "error: tests/broken/MissingParen.cpp:3:1 hscpp_require_source missing closing ')'"
        );
    }

    #[test]
    fn one_diagnostic_per_malformed_call() {
        let content = r#"
hscpp_require_source("a.cpp"
hscpp_require_lib(y.lib)
hscpp_require_lib("y.lib")
hscpp_preprocessor_definitions(OK, 9)
        "#;

        let (result, errors) = parsing::parse(Path::new("Mixed.cpp"), content);

        assert_eq!(
            result.requires,
            vec![Require {
                kind: RequireKind::Library,
                paths: vec!["y.lib".to_string()],
            }]
        );
        assert!(result
            .preprocessor_definitions
            .is_empty());
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ParsingError::MissingClosingParen(..)));
        assert!(matches!(errors[1], ParsingError::MissingOpeningQuote(_)));
        assert!(matches!(errors[2], ParsingError::InvalidDefinition(_)));
    }

    #[test]
    fn prefix_is_harmless() {
        let (result, errors) =
            parsing::parse(Path::new("Custom.cpp"), "hscpp_require_source_custom_thing");

        assert!(result.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn reporting_through_a_custom_sink() {
        let mut counter = Counter::default();
        parsing::scan(Path::new("tests/broken/BadDefinition.cpp"), &mut counter);
        assert_eq!(counter.count, 1);

        let mut counter = Counter::default();
        parsing::scan(Path::new("tests/samples/Printer.cpp"), &mut counter);
        assert_eq!(counter.count, 0);
    }

    #[test]
    fn reporting_through_tracing() {
        let result = parsing::scan(Path::new("tests/broken/BareLibrary.cpp"), &mut Log);
        assert!(result.is_empty());
    }

    #[test]
    fn repeated_scans_agree() {
        let filename = Path::new("tests/samples/Printer.cpp");
        let mut first: Vec<String> = Vec::new();
        let mut second: Vec<String> = Vec::new();

        assert_eq!(
            parsing::scan(filename, &mut first),
            parsing::scan(filename, &mut second)
        );
        assert_eq!(first, second);
    }

    #[test]
    fn scans_on_separate_threads() {
        let files = [
            "tests/samples/Printer.cpp",
            "tests/samples/Widget.cpp",
            "tests/samples/Empty.cpp",
        ];

        let sequential: Vec<ParseResult> = files
            .iter()
            .map(|file| parsing::scan(Path::new(file), &mut Vec::<String>::new()))
            .collect();

        let parallel: Vec<ParseResult> = std::thread::scope(|s| {
            let handles: Vec<_> = files
                .iter()
                .map(|file| s.spawn(move || parsing::scan(Path::new(file), &mut Vec::<String>::new())))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(sequential, parallel);
    }
}
