pub mod schema;

pub use schema::{
    Config, ExportConfig, ServerConfig, SettingKey, Strategy, SummarizeSettings, coerce_count,
    detect_locale,
};
