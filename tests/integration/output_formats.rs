use code_stats::{
    ScanOptions, analyze_directory,
    presentation::{OutputFormat, render},
    report::Report,
};

use crate::common::sample_tree;

#[test]
fn json_report_carries_rankings() {
    let ws = sample_tree();
    let result = analyze_directory(ws.path(), &ScanOptions::default()).unwrap();
    let report = Report::new(&result, 1);

    let json = render(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["summary"]["total_files"], 2);
    assert_eq!(value["languages"][0]["name"], "Go");
    assert_eq!(value["languages"][1]["name"], "Python");
    assert_eq!(value["largest_files"].as_array().unwrap().len(), 1);
    assert_eq!(value["top"], 1);
}

#[test]
fn markdown_lists_both_languages() {
    let ws = sample_tree();
    let result = analyze_directory(ws.path(), &ScanOptions::default()).unwrap();
    let md = render(&Report::new(&result, 20), OutputFormat::Markdown).unwrap();

    assert!(md.contains("| Go | 1 | 5 | 3 | 2 | 10 |"));
    assert!(md.contains("| Python | 1 | 4 | 0 | 0 | 4 |"));
    assert!(md.contains("`main.go`"));
}
