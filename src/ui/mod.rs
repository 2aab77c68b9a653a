pub mod render;
pub mod style;

pub use render::{format_badge, render_history_entry, render_markdown, render_summary};
pub use style::{accent, cyan, dim, error, header, success, url, value, warning};
