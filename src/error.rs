use std::path::PathBuf;
use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `MMSummary`.
///
/// Each component defines its own error variant. Callers at the command
/// boundary match on these to pick the notification shown to the user;
/// application glue continues to use `anyhow::Result` for context chains.
#[derive(Debug, Error)]
pub enum SummaryError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Document loading ─────────────────────────────────────────────────
    #[error("load: {0}")]
    Load(#[from] LoadError),

    // ── Remote summarization / history service ──────────────────────────
    #[error("service: {0}")]
    Service(#[from] ServiceError),

    // ── Clipboard ────────────────────────────────────────────────────────
    #[error("clipboard: {0}")]
    Clipboard(#[from] ClipboardError),

    // ── File export ──────────────────────────────────────────────────────
    #[error("export: {0}")]
    Export(#[from] ExportError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SummaryError {
    /// Text for the failure notification printed at the command boundary.
    pub fn user_message(&self) -> String {
        match self {
            Self::Service(err) => err.user_message(),
            Self::Other(err) => format!("{err:#}"),
            Self::Config(err) => err.to_string(),
            Self::Load(err) => err.to_string(),
            Self::Clipboard(err) => err.to_string(),
            Self::Export(err) => err.to_string(),
        }
    }
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("unknown setting '{0}'")]
    UnknownKey(String),
}

// ─── Document loader errors ─────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },
}

// ─── Service errors ─────────────────────────────────────────────────────────

/// Generic text shown when the server gave no usable `detail`.
pub const GENERIC_SERVICE_MESSAGE: &str = "the summarization service request failed";

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server returned {status}{}", format_detail(.detail.as_deref()))]
    Status { status: u16, detail: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("invalid server address: {0}")]
    InvalidUrl(String),
}

fn format_detail(detail: Option<&str>) -> String {
    detail.map(|d| format!(": {d}")).unwrap_or_default()
}

impl ServiceError {
    /// The text surfaced to the user: the server's `detail` verbatim when it
    /// sent one, otherwise a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            Self::Network(message) => format!("{GENERIC_SERVICE_MESSAGE} ({message})"),
            _ => GENERIC_SERVICE_MESSAGE.to_string(),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

// ─── Clipboard errors ───────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool available on this system")]
    Unavailable,

    #[error("clipboard write failed: {0}")]
    Write(String),
}

// ─── Export errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot stage export: {0}")]
    Stage(String),

    #[error("cannot save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
