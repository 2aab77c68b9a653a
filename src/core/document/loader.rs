use crate::error::LoadError;
use std::path::Path;
use tracing::{debug, warn};

/// Extensions offered by the file filter. Advisory only: other text files
/// are still read.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md"];

/// A decoded input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    /// File name shown to the user (no directory part).
    pub file_name: String,
    pub text: String,
}

pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Read `path` and decode it as UTF-8 text.
///
/// The file handle is dropped before returning. A leading byte-order mark is
/// stripped.
pub async fn load_document(path: &Path) -> Result<LoadedDocument, LoadError> {
    if !has_supported_extension(path) {
        warn!(path = %path.display(), "file is not .txt or .md; reading it as text anyway");
    }

    let bytes = tokio::fs::read(path).await.map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut text = String::from_utf8(bytes).map_err(|_| LoadError::Decode {
        path: path.to_path_buf(),
    })?;
    if text.starts_with('\u{feff}') {
        text.drain(..'\u{feff}'.len_utf8());
    }

    let file_name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

    debug!(file = %file_name, chars = text.chars().count(), "document loaded");
    Ok(LoadedDocument { file_name, text })
}
