//! Hygiene: source-level budgets for panicking and error-swallowing code.
//!
//! Scans `src/` (skipping `*_test.rs`) and fails when a pattern appears more
//! often than its budget allows. Budgets only ever go down.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, budget)` pairs checked against every production source line.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

fn production_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            out.push(path);
        }
    }
}

fn hits_for(pattern: &str) -> Vec<(String, usize)> {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    files
        .into_iter()
        .filter_map(|path| {
            let content = fs::read_to_string(&path).ok()?;
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.display().to_string(), count))
        })
        .collect()
}

fn assert_budget(pattern: &str) {
    let budget = BUDGETS
        .iter()
        .find(|(p, _)| *p == pattern)
        .map_or(0, |(_, b)| *b);
    let hits = hits_for(pattern);
    let found: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found <= budget, "`{pattern}` budget exceeded: found {found}, max {budget}.\n{listing}");
}

#[test]
fn src_directory_is_scanned() {
    let mut files = Vec::new();
    production_files(Path::new("src"), &mut files);
    assert!(files.iter().any(|p| p.ends_with("lib.rs")));
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()");
}

#[test]
fn expect_budget() {
    assert_budget(".expect(");
}

#[test]
fn panic_family_budget() {
    for pattern in ["panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_budget(pattern);
    }
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =");
    assert_budget(".ok()");
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]");
}
