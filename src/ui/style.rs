use console::style;
use std::fmt::Display;

/// Green bold: completed actions
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// Red bold: failure notices
pub fn error<D: Display>(text: D) -> String {
    style(text).red().bold().to_string()
}

/// Yellow: skipped actions, non-fatal warnings
pub fn warning<D: Display>(text: D) -> String {
    style(text).yellow().to_string()
}

/// White bold: rendered headings, section titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: timestamps, previews, code blocks
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Green: paths, setting values
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold: history ids, bullets
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Cyan: model names, setting keys
pub fn cyan<D: Display>(text: D) -> String {
    style(text).cyan().to_string()
}

/// Cyan underlined: URLs
pub fn url<D: Display>(text: D) -> String {
    style(text).cyan().underlined().to_string()
}

/// Black on cyan: processing-time badge
pub fn badge<D: Display>(text: D) -> String {
    style(format!(" {text} ")).black().on_cyan().to_string()
}
