use std::fs;
use std::path::Path;

use hscpp_scan::parsing;

#[test]
fn ensure_fail() {
    let dir = Path::new("tests/broken/");

    assert!(dir.exists(), "broken directory missing");

    let entries = fs::read_dir(dir).expect("Failed to read broken directory");

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

    assert!(!files.is_empty(), "No .cpp files found in broken directory");

    let mut unexpected_successes = Vec::new();

    for file in &files {
        let content = parsing::load(&file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        let (_, errors) = parsing::parse(&file, &content);
        if errors.is_empty() {
            println!("File {:?} unexpectedly parsed without errors", file);
            unexpected_successes.push(file.clone());
        }
    }

    if !unexpected_successes.is_empty() {
        panic!(
            "Broken files should report problems, but {} files did not",
            unexpected_successes.len()
        );
    }
}
