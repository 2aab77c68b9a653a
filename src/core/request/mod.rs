pub mod builder;
pub mod types;

pub use builder::{DEFAULT_TARGET_LANGUAGE, build_request, target_language};
pub use types::SummarizeRequest;
