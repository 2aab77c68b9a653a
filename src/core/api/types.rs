use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    /// Seconds spent server-side.
    pub processing_time: f64,
}

/// Server-assigned history identifier.
///
/// The service may send integers or strings; both are kept as text so ids
/// typed on the command line compare equal to ids read from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HistoryId(String);

impl HistoryId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HistoryId {
    fn from(raw: &str) -> Self {
        Self::new(raw.trim())
    }
}

impl From<i64> for HistoryId {
    fn from(raw: i64) -> Self {
        Self(raw.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for HistoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Self::from(n),
            RawId::Text(s) => Self(s),
        })
    }
}

/// One durable record of a completed summarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryId,
    pub summary: String,
    pub original_text: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub processing_time: f64,
    /// Display-formatted by the server; never parsed here.
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitRequest {
    pub text: String,
    pub chunk_size: u32,
    pub chunk_overlap: u32,
}

pub const DEFAULT_SPLIT_CHUNK_SIZE: u32 = 16_000;
pub const DEFAULT_SPLIT_OVERLAP: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResponse {
    pub chunks: Vec<String>,
    pub total_chunks: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PingResponse {
    pub message: String,
}
