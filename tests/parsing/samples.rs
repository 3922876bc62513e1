use std::fs;
use std::path::Path;

use hscpp_scan::parsing;

#[test]
fn ensure_parse() {
    let dir = Path::new("tests/samples/");

    assert!(dir.exists(), "samples directory missing");

    let entries = fs::read_dir(dir).expect("Failed to read samples directory");

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path
            .extension()
            .and_then(|s| s.to_str())
            == Some("cpp")
        {
            files.push(path);
        }
    }

    assert!(!files.is_empty(), "No .cpp files found in samples directory");

    let mut failures = Vec::new();

    for file in &files {
        let content = parsing::load(&file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        let (_, errors) = parsing::parse(&file, &content);
        if !errors.is_empty() {
            println!("File {:?} reported {:?}", file, errors);
            failures.push(file.clone());
        }
    }

    if !failures.is_empty() {
        panic!(
            "Sample files should scan cleanly, but {} files did not",
            failures.len()
        );
    }
}
