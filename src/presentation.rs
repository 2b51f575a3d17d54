// src/presentation.rs
use std::fmt::Write;

use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use code_stats_domain::{Stat, analytics::GroupEntry};
use code_stats_shared_kernel::Result;

use crate::report::Report;

/// 出力フォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Markdown => Ok(render_markdown(report)),
    }
}

fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

fn render_table(report: &Report) -> String {
    let mut out = String::new();
    let s = &report.summary;
    let _ = writeln!(out, "code_stats v{} · {}", crate::VERSION, report.root.display());
    let _ = writeln!(out, "generated {}", report.generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out);

    let mut summary = new_table(&["Files", "Size", "Lines", "Code", "Comment", "Blank", "Chars", "Code %", "Comment/Code"]);
    summary.add_row(vec![
        num(s.total_files),
        right(format_size(s.total_size)),
        num(s.total_lines),
        num(s.code_lines),
        num(s.comment_lines),
        num(s.blank_lines),
        num(s.total_chars),
        right(percent(s, |a| a.code_density)),
        right(ratio(s, |a| a.comment_ratio)),
    ]);
    let _ = writeln!(out, "{summary}\n");

    if report.languages.is_empty() {
        let _ = writeln!(out, "No files analyzed.");
        return out;
    }

    let _ = writeln!(out, "Languages");
    let _ = writeln!(out, "{}\n", group_table("Language", &report.languages));
    let _ = writeln!(out, "Extensions");
    let _ = writeln!(out, "{}\n", group_table("Extension", &report.extensions));

    let _ = writeln!(out, "Top {} files by size", report.top);
    let mut by_size = new_table(&["File", "Language", "Size", "Lines"]);
    for record in &report.largest_files {
        by_size.add_row(vec![
            Cell::new(report.display_path(record)),
            Cell::new(record.language()),
            right(format_size(record.stat().total_size)),
            num(record.stat().total_lines),
        ]);
    }
    let _ = writeln!(out, "{by_size}\n");

    let _ = writeln!(out, "Top {} files by code lines", report.top);
    let mut by_code = new_table(&["File", "Language", "Code", "Comment", "Blank"]);
    for record in &report.most_code_files {
        let st = record.stat();
        by_code.add_row(vec![
            Cell::new(report.display_path(record)),
            Cell::new(record.language()),
            num(st.code_lines),
            num(st.comment_lines),
            num(st.blank_lines),
        ]);
    }
    let _ = writeln!(out, "{by_code}");

    if let Some(repo) = &report.repository {
        let _ = writeln!(out);
        write_repository_table(&mut out, report, repo);
    }
    out
}

fn write_repository_table(out: &mut String, report: &Report, repo: &code_stats_domain::RepositoryStats) {
    let _ = writeln!(out, "Git");
    if !repo.is_repository {
        let _ = writeln!(out, "Not a git repository.");
        return;
    }
    let mut table = new_table(&["Commits", "Contributors", "First commit", "Last commit", "Active days", "+", "-", "Branches"]);
    table.add_row(vec![
        num(repo.commit_count),
        num(repo.contributor_count),
        Cell::new(format_time(repo.first_commit)),
        Cell::new(format_time(repo.last_commit)),
        num(repo.active_days),
        num(repo.additions),
        num(repo.deletions),
        num(repo.branch_count),
    ]);
    let _ = writeln!(out, "{table}");

    let top = repo.top_contributors(report.top);
    if !top.is_empty() {
        let mut contributors = new_table(&["Contributor", "Commits"]);
        for (name, commits) in top {
            contributors.add_row(vec![Cell::new(name), num(commits)]);
        }
        let _ = writeln!(out, "{contributors}");
    }
}

fn group_table(label: &str, entries: &[GroupEntry]) -> Table {
    let mut table = new_table(&[label, "Files", "Code", "Comment", "Blank", "Total", "Comment %"]);
    for entry in entries {
        let st = &entry.stat;
        table.add_row(vec![
            Cell::new(&entry.name),
            num(st.total_files),
            num(st.code_lines),
            num(st.comment_lines),
            num(st.blank_lines),
            num(st.total_lines),
            right(percent(st, |a| a.comment_density)),
        ]);
    }
    table
}

fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(headers.iter().map(Cell::new).collect::<Vec<_>>());
    table
}

fn num<T: ToString>(value: T) -> Cell {
    right(value.to_string())
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn render_markdown(report: &Report) -> String {
    let mut out = String::new();
    let s = &report.summary;
    let _ = writeln!(out, "# Code statistics: `{}`\n", report.root.display());
    let _ = writeln!(out, "_Generated {}_\n", report.generated_at.format("%Y-%m-%d %H:%M:%S"));

    let _ = writeln!(out, "## Summary\n");
    let _ = writeln!(out, "| Metric | Value |");
    let _ = writeln!(out, "| --- | ---: |");
    for (metric, value) in [
        ("Files", s.total_files.to_string()),
        ("Size", format_size(s.total_size)),
        ("Lines", s.total_lines.to_string()),
        ("Code lines", s.code_lines.to_string()),
        ("Comment lines", s.comment_lines.to_string()),
        ("Blank lines", s.blank_lines.to_string()),
        ("Characters", s.total_chars.to_string()),
        ("Code density", percent(s, |a| a.code_density)),
        ("Comment density", percent(s, |a| a.comment_density)),
        ("Comment / code", ratio(s, |a| a.comment_ratio)),
        ("Avg line length", ratio(s, |a| a.avg_line_length)),
    ] {
        let _ = writeln!(out, "| {metric} | {value} |");
    }

    markdown_groups(&mut out, "Languages", "Language", &report.languages);
    markdown_groups(&mut out, "Extensions", "Extension", &report.extensions);

    let _ = writeln!(out, "\n## Top {} files by size\n", report.top);
    let _ = writeln!(out, "| File | Language | Size | Lines |");
    let _ = writeln!(out, "| --- | --- | ---: | ---: |");
    for record in &report.largest_files {
        let _ = writeln!(
            out,
            "| `{}` | {} | {} | {} |",
            report.display_path(record),
            record.language(),
            format_size(record.stat().total_size),
            record.stat().total_lines
        );
    }

    let _ = writeln!(out, "\n## Top {} files by code lines\n", report.top);
    let _ = writeln!(out, "| File | Language | Code | Comment | Blank |");
    let _ = writeln!(out, "| --- | --- | ---: | ---: | ---: |");
    for record in &report.most_code_files {
        let st = record.stat();
        let _ = writeln!(
            out,
            "| `{}` | {} | {} | {} | {} |",
            report.display_path(record),
            record.language(),
            st.code_lines,
            st.comment_lines,
            st.blank_lines
        );
    }

    if let Some(repo) = report.repository.as_ref().filter(|r| r.is_repository) {
        let _ = writeln!(out, "\n## Git\n");
        let _ = writeln!(out, "- Commits: {}", repo.commit_count);
        let _ = writeln!(out, "- Contributors: {}", repo.contributor_count);
        let _ = writeln!(out, "- First commit: {}", format_time(repo.first_commit));
        let _ = writeln!(out, "- Last commit: {}", format_time(repo.last_commit));
        let _ = writeln!(out, "- Active days: {}", repo.active_days);
        let _ = writeln!(out, "- Lines added / deleted: {} / {}", repo.additions, repo.deletions);
        let _ = writeln!(out, "- Branches: {}", repo.branch_count);
        for (name, commits) in repo.top_contributors(report.top) {
            let _ = writeln!(out, "  - {name}: {commits}");
        }
    }
    out
}

fn markdown_groups(out: &mut String, title: &str, label: &str, entries: &[GroupEntry]) {
    let _ = writeln!(out, "\n## {title}\n");
    let _ = writeln!(out, "| {label} | Files | Code | Comment | Blank | Total | Comment % |");
    let _ = writeln!(out, "| --- | ---: | ---: | ---: | ---: | ---: | ---: |");
    for entry in entries {
        let st = &entry.stat;
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} | {} |",
            entry.name,
            st.total_files,
            st.code_lines,
            st.comment_lines,
            st.blank_lines,
            st.total_lines,
            percent(st, |a| a.comment_density)
        );
    }
}

fn percent(stat: &Stat, pick: impl Fn(&code_stats_domain::Averages) -> f64) -> String {
    format!("{:.1}%", stat.averages().map_or(0.0, pick) * 100.0)
}

fn ratio(stat: &Stat, pick: impl Fn(&code_stats_domain::Averages) -> f64) -> String {
    format!("{:.2}", stat.averages().map_or(0.0, pick))
}

fn format_time(time: Option<chrono::DateTime<chrono::Local>>) -> String {
    time.map_or_else(|| "N/A".to_string(), |t| t.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// 1024 単位で B / KB / MB / GB
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 { format!("{bytes} B") } else { format!("{value:.1} {}", UNITS[unit]) }
}
