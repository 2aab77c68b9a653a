mod core;
mod settings;

pub use core::{Config, ExportConfig, ServerConfig, detect_locale};
pub use settings::{SettingKey, Strategy, SummarizeSettings, coerce_count};
