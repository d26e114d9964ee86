//! Hygiene budgets for the portal sources.
//!
//! Browser handles are optional at every step (`window()`, `localStorage`,
//! `matchMedia`), so `.ok()` carries a small budget where a rejected lookup
//! means "not available" rather than an error worth reporting.

use std::fs;
use std::path::{Path, PathBuf};

const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    ("#[allow(dead_code)]", 0),
    (".ok()", 4),
];

fn collect(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") && !path.to_string_lossy().ends_with("_test.rs") {
            out.push(path);
        }
    }
}

fn sources() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
        .into_iter()
        .filter_map(|p| fs::read_to_string(&p).ok().map(|c| (p, c)))
        .collect()
}

#[test]
fn scans_the_crate_sources() {
    let files = sources();
    assert!(files.iter().any(|(p, _)| p.ends_with("lib.rs")));
    assert!(files.iter().any(|(p, _)| p.ends_with("app.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let files = sources();
    let mut failures = Vec::new();
    for (pattern, budget) in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|(path, content)| {
                let n = content.lines().filter(|l| l.contains(pattern)).count();
                (n > 0).then(|| format!("  {}: {n}", path.display()))
            })
            .collect();
        let found: usize = files
            .iter()
            .map(|(_, content)| content.lines().filter(|l| l.contains(pattern)).count())
            .sum();
        if found > *budget {
            failures.push(format!("`{pattern}`: found {found}, max {budget}\n{}", hits.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn test_modules_use_sibling_files() {
    for (path, content) in sources() {
        let lines: Vec<&str> = content.lines().map(str::trim).collect();
        for (i, line) in lines.iter().enumerate().filter(|(_, l)| l.starts_with("#[path = ")) {
            let Some(file) = line.strip_prefix("#[path = \"").and_then(|rest| rest.strip_suffix("\"]")) else {
                panic!("{}: malformed #[path]: {line}", path.display());
            };
            let stem = file.strip_suffix(".rs").unwrap_or(file);
            assert!(stem.ends_with("_test"), "{}: unexpected #[path] target: {line}", path.display());
            assert_eq!(
                lines.get(i + 1).copied(),
                Some(format!("mod {stem};").as_str()),
                "{}: test module should be named after {file}",
                path.display()
            );
        }
    }
}

/// `view!` attribute values are parsed as a single token tree unless braced,
/// so a turbofish (`f::<T>()`) must sit inside `{}`.
fn unbraced_turbofish_attr(line: &str) -> bool {
    let line = line.trim();
    let Some((name, value)) = line.split_once('=') else {
        return false;
    };
    let is_attr = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':');
    is_attr && !value.starts_with('{') && value.contains("::<")
}

#[test]
fn turbofish_detector_matches_attributes_only() {
    assert!(unbraced_turbofish_attr("    options=choice_options::<TeamRole>()"));
    assert!(!unbraced_turbofish_attr("    options={choice_options::<TeamRole>()}"));
    assert!(!unbraced_turbofish_attr("    let error = RwSignal::new(None::<String>);"));
    assert!(!unbraced_turbofish_attr("    options=filter_options()"));
}

#[test]
fn view_attributes_brace_turbofish_values() {
    let offenders: Vec<String> = sources()
        .iter()
        .flat_map(|(path, content)| {
            content
                .lines()
                .filter(|l| unbraced_turbofish_attr(l))
                .map(move |l| format!("  {}: {}", path.display(), l.trim()))
        })
        .collect();
    assert!(offenders.is_empty(), "unbraced turbofish in view attributes:\n{}", offenders.join("\n"));
}
