use serde::{Deserialize, Serialize};

/// Body of `POST /api/summarize`, field names as the service expects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    pub model: String,
    pub chunk_size_1: u32,
    pub chunk_size_2: u32,
    pub token_max: u32,
    pub temperature: f64,
    pub use_map: bool,
    /// Override map prompt; empty means server default.
    pub map_temple: String,
    /// Override reduce prompt; empty means server default.
    pub reduce_temple: String,
    pub reduce_temperature: f64,
    pub test_mode: bool,
    /// Target summary language, e.g. "Traditional Chinese".
    pub language: String,
}
