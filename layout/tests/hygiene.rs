//! Hygiene checks over the layout crate's production sources.
//!
//! Each antipattern has a budget, currently zero everywhere. The budget only
//! ever goes down: adding a hit means removing one first.

use std::fs;
use std::path::Path;

/// `(pattern, budget, hint)`
type Budget = (&'static str, usize, &'static str);

// Panics.
const PANICS: &[Budget] = &[
    (".unwrap()", 0, "propagate with `?` or handle the `None`/`Err`"),
    (".expect(", 0, "propagate with `?` or handle the `None`/`Err`"),
    ("panic!(", 0, "return an error instead"),
    ("unreachable!(", 0, "make the state unrepresentable"),
    ("todo!(", 0, "finish the stub"),
    ("unimplemented!(", 0, "finish the stub"),
];

// Silent loss.
const DISCARDS: &[Budget] = &[
    ("let _ =", 0, "inspect or log the value"),
    (".ok()", 0, "inspect or log the error"),
];

// Structure and output. Logging goes through `tracing`; stdout belongs to the host.
const STYLE: &[Budget] = &[
    ("#[allow(dead_code)]", 0, "delete the dead code"),
    ("println!(", 0, "use tracing"),
    ("dbg!(", 0, "use tracing"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, skipping `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Per-file line counts for `pattern`, files with no hits omitted.
fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|line| line.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the layout crate root");

    let mut failures = Vec::new();
    for &(pattern, max, hint) in budgets {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > max {
            let listing: Vec<String> = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect();
            failures.push(format!("`{pattern}`: found {count}, max {max} ({hint})\n{}", listing.join("\n")));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

#[test]
fn panic_budget() {
    check(PANICS);
}

#[test]
fn silent_discard_budget() {
    check(DISCARDS);
}

#[test]
fn style_budget() {
    check(STYLE);
}
