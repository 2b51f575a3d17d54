use code_stats::{ScanOptions, analyze_directory};
use code_stats_shared_kernel::{ApplicationError, CodeStatsError};

use crate::common::{GO_SOURCE, PY_SOURCE, Workspace, sample_tree};

#[test]
fn go_and_python_tree_totals() {
    let ws = sample_tree();
    let result = analyze_directory(ws.path(), &ScanOptions::default()).unwrap();

    let s = &result.stat;
    assert_eq!(s.total_files, 2);
    assert_eq!(s.total_lines, 14);
    assert_eq!(s.code_lines, 8);
    assert_eq!(s.comment_lines, 3);
    assert_eq!(s.blank_lines, 2);
    assert_eq!(s.total_size, (GO_SOURCE.len() + PY_SOURCE.len()) as u64);

    let go = result.language("Go").expect("Go bucket");
    assert_eq!((go.total_files, go.total_lines, go.code_lines, go.comment_lines, go.blank_lines), (1, 10, 5, 3, 2));
    let py = result.language("Python").expect("Python bucket");
    assert_eq!((py.total_files, py.total_lines, py.code_lines, py.comment_lines, py.blank_lines), (1, 4, 4, 0, 0));
    assert_eq!(result.languages.len(), 2);
    assert_eq!(result.extensions.len(), 2);
    assert!(result.stat.averages().is_some());
}

#[test]
fn node_modules_is_pruned_at_any_depth() {
    let ws = sample_tree();
    ws.write_file("node_modules/left-pad/index.js", "module.exports = 1;\n");
    ws.write_file("web/app/node_modules/x/y.js", "var a;\n");
    ws.write_file("web/app/main.js", "var b;\n");

    let result = analyze_directory(ws.path(), &ScanOptions::default()).unwrap();
    assert_eq!(result.stat.total_files, 3);
    assert!(result.files.iter().all(|r| !r.path().components().any(|c| c.as_os_str() == "node_modules")));
    assert_eq!(result.language("JavaScript").map(|s| s.total_files), Some(1));
}

#[test]
fn excluded_extensions_never_reach_the_classifier() {
    let ws = sample_tree();
    ws.write_file("Cargo.lock", "# lock\n");
    ws.write_file("logo.svg", "<svg/>\n");

    let result = analyze_directory(ws.path(), &ScanOptions::default()).unwrap();
    assert!(result.extension(".lock").is_none());
    assert!(result.extension(".svg").is_none());
    assert_eq!(result.stat.total_files, 2);
}

#[test]
fn worker_count_does_not_change_the_result() {
    let ws = sample_tree();
    for i in 0..40 {
        ws.write_file(&format!("pkg/f{i}.go"), GO_SOURCE);
    }
    let one = analyze_directory(ws.path(), &ScanOptions::builder().max_workers(1usize).build().unwrap()).unwrap();
    let many = analyze_directory(ws.path(), &ScanOptions::builder().max_workers(12usize).build().unwrap()).unwrap();

    assert!(one.stat.same_counts(&many.stat));
    assert_eq!(one.stat.total_files, 42);
    for (lang, stat) in &one.languages {
        assert!(many.languages[lang].same_counts(stat));
    }
}

#[test]
fn empty_directory_is_not_an_error() {
    let ws = Workspace::new();
    let result = analyze_directory(ws.path(), &ScanOptions::default()).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.stat.total_lines, 0);
}

#[test]
fn missing_root_fails_fast() {
    let ws = Workspace::new();
    let err = analyze_directory(&ws.path().join("absent"), &ScanOptions::default()).unwrap_err();
    assert!(matches!(err.root_cause(), CodeStatsError::Application(ApplicationError::RootNotFound { .. })));
}

#[test]
fn file_root_fails_fast() {
    let ws = sample_tree();
    let err = analyze_directory(&ws.path().join("main.go"), &ScanOptions::default()).unwrap_err();
    assert!(matches!(err.root_cause(), CodeStatsError::Application(ApplicationError::NotADirectory { .. })));
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let ws = sample_tree();
    let locked = ws.write_file("secret.go", "package secret\n");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
    // root ignores permission bits
    if std::fs::File::open(&locked).is_ok() {
        return;
    }

    let result = analyze_directory(ws.path(), &ScanOptions::default()).unwrap();
    assert_eq!(result.stat.total_files, 2);
}

#[test]
fn root_with_an_excluded_name_is_skipped_entirely() {
    let ws = Workspace::new();
    ws.write_file("build/main.go", GO_SOURCE);
    ws.write_file("build/gen/out.py", PY_SOURCE);

    let result = analyze_directory(&ws.path().join("build"), &ScanOptions::default()).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.stat.total_files, 0);
}

#[test]
fn docstring_delimiter_lines_close_where_they_open() {
    let ws = Workspace::new();
    ws.write_file("doc.py", "\"\"\"\nbody\n\"\"\"\nx = 1\n");

    let result = analyze_directory(ws.path(), &ScanOptions::default()).unwrap();
    let py = result.language("Python").unwrap();
    assert_eq!((py.comment_lines, py.code_lines), (2, 2));
}
