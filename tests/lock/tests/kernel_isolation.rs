//! Build-graph isolation: the kernel knows nothing about search or the
//! harness. Dependencies only point inward.

use std::fmt::Write;
use std::fs;
use std::path::Path;

const FORBIDDEN_PATTERNS: &[&str] = &["maze_search", "maze_harness", "tracing::", "image::"];

fn workspace_root() -> &'static Path {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn walk(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            check_file(&path, violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(content) = fs::read_to_string(path) else {
        return;
    };
    for (line_no, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            continue;
        }
        for pattern in FORBIDDEN_PATTERNS {
            if trimmed.contains(pattern) {
                violations.push((path.display().to_string(), line_no + 1, line.to_string()));
            }
        }
    }
}

#[test]
fn kernel_source_has_no_outer_layer_references() {
    let mut violations = Vec::new();
    walk(&workspace_root().join("kernel").join("src"), &mut violations);

    if !violations.is_empty() {
        let mut msg = String::from("outer-layer references found in kernel source:\n");
        for (file, line, content) in &violations {
            let _ = writeln!(msg, "  {file}:{line}: {content}");
        }
        panic!("{msg}");
    }
}

#[test]
fn kernel_cargo_toml_has_no_outer_layer_dependencies() {
    let cargo_toml = workspace_root().join("kernel").join("Cargo.toml");
    let content = fs::read_to_string(&cargo_toml).expect("kernel Cargo.toml readable");
    for dep in ["maze-search", "maze-harness", "tracing", "image", "clap"] {
        assert!(
            !content.lines().any(|l| l.trim_start().starts_with(dep)),
            "kernel/Cargo.toml depends on {dep}"
        );
    }
}

#[test]
fn search_cargo_toml_does_not_depend_on_harness() {
    let cargo_toml = workspace_root().join("search").join("Cargo.toml");
    let content = fs::read_to_string(&cargo_toml).expect("search Cargo.toml readable");
    assert!(!content.contains("maze-harness"));
}
