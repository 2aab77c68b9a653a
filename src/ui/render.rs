use super::style;
use crate::core::api::HistoryEntry;
use crate::core::history::HistoryStore;
use crate::core::session::SummaryResult;
use std::fmt::Write as _;

const COLLAPSED_SUMMARY_CHARS: usize = 80;

/// Processing time with one decimal, e.g. `2.3s`.
pub fn format_badge(seconds: f64) -> String {
    format!("{:.1}s", seconds.max(0.0))
}

/// Terminal rendering of a markdown summary: headings lose their `#`
/// markers, bullets become `•`, fenced code is dimmed.
pub fn render_markdown(markdown: &str) -> String {
    let mut out = String::new();
    let mut in_fence = false;
    for line in markdown.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            out.push_str(&style::dim(format!("    {line}")));
        } else if let Some(heading) = heading_text(trimmed) {
            out.push_str(&style::header(heading));
        } else if let Some(item) = bullet_text(trimmed) {
            let indent = &line[..line.len() - trimmed.len()];
            let _ = write!(out, "{indent}{} {item}", style::accent("•"));
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}

fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if rest.is_empty() {
        return Some("");
    }
    rest.strip_prefix(' ').map(|text| text.trim().trim_end_matches('#').trim_end())
}

fn bullet_text(line: &str) -> Option<&str> {
    ["- ", "* ", "+ "]
        .iter()
        .find_map(|marker| line.strip_prefix(marker))
}

/// A finished summary with its time badge.
pub fn render_summary(result: &SummaryResult) -> String {
    format!(
        "{}\n\n{}",
        style::badge(format_badge(result.processing_time)),
        render_markdown(&result.summary)
    )
}

/// One history card. Collapsed cards show the first summary line; the
/// expanded card shows the whole summary and a preview of the source text.
pub fn render_history_entry(entry: &HistoryEntry, expanded: bool) -> String {
    let mut out = format!(
        "{} {}  {}  {}\n",
        style::accent(format!("#{}", entry.id)),
        style::dim(&entry.created_at),
        style::cyan(&entry.model),
        style::badge(format_badge(entry.processing_time)),
    );

    if expanded {
        out.push_str(&render_markdown(&entry.summary));
        let _ = writeln!(
            out,
            "\n{}\n{}",
            style::header(t!("history.original_preview")),
            style::dim(HistoryStore::preview(entry))
        );
    } else {
        let first = entry
            .summary
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default();
        let first = heading_text(first).unwrap_or(first);
        let _ = writeln!(out, "  {}", truncate(first, COLLAPSED_SUMMARY_CHARS));
    }
    out
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}…", &text[..end]),
        None => text.to_string(),
    }
}
