mod env_overrides;
mod loader;
mod locale;
mod types;

pub use locale::detect_locale;
pub use types::{Config, ExportConfig, ServerConfig};
