use crate::error::ExportError;
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

pub const MARKDOWN_MIME: &str = "text/markdown";

/// A staged blob awaiting save. Must be revoked exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobHandle {
    pub id: u64,
    pub mime: String,
}

impl BlobHandle {
    pub fn url(&self) -> String {
        format!("blob:mmsummary/{}", self.id)
    }
}

/// Temporary storage behind a file export: create a blob, save it under a
/// file name, then revoke it.
pub trait BlobStore: Send + Sync {
    fn create(&self, contents: &str, mime: &str) -> Result<BlobHandle, ExportError>;
    fn save(&self, blob: &BlobHandle, file_name: &str) -> Result<PathBuf, ExportError>;
    fn revoke(&self, blob: &BlobHandle);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Skipped,
    Saved(PathBuf),
}

/// Revokes its blob when dropped, whichever way the export exits.
struct ObjectUrl<'a> {
    store: &'a dyn BlobStore,
    handle: BlobHandle,
}

impl Drop for ObjectUrl<'_> {
    fn drop(&mut self) {
        self.store.revoke(&self.handle);
    }
}

/// Write `text` out as a markdown file named `suggested_name`.
/// Empty text is a no-op.
pub fn export_as_file(
    store: &dyn BlobStore,
    text: &str,
    suggested_name: &str,
) -> Result<ExportOutcome, ExportError> {
    if text.is_empty() {
        return Ok(ExportOutcome::Skipped);
    }
    let blob = ObjectUrl {
        store,
        handle: store.create(text, MARKDOWN_MIME)?,
    };
    let path = store.save(&blob.handle, suggested_name)?;
    tracing::info!(path = %path.display(), "exported summary");
    Ok(ExportOutcome::Saved(path))
}

/// `{prefix}_{YYYY-MM-DD}.md`, with path separators in the prefix replaced.
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    let prefix: String = prefix
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{prefix}_{}.md", date.format("%Y-%m-%d"))
}

pub fn today_file_name(prefix: &str) -> String {
    export_file_name(prefix, Local::now().date_naive())
}

/// Stages blobs as hidden files inside the export directory; saving copies
/// the staged file to its final name.
pub struct FsBlobStore {
    directory: PathBuf,
    next_id: AtomicU64,
}

impl FsBlobStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn stage_path(&self, blob: &BlobHandle) -> PathBuf {
        self.directory
            .join(format!(".mmsummary-{}-{}.part", std::process::id(), blob.id))
    }
}

impl BlobStore for FsBlobStore {
    fn create(&self, contents: &str, mime: &str) -> Result<BlobHandle, ExportError> {
        fs::create_dir_all(&self.directory).map_err(|source| ExportError::Save {
            path: self.directory.clone(),
            source,
        })?;
        let handle = BlobHandle {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            mime: mime.to_string(),
        };
        let stage = self.stage_path(&handle);
        fs::write(&stage, contents)
            .map_err(|e| ExportError::Stage(format!("{}: {e}", stage.display())))?;
        tracing::debug!(url = %handle.url(), stage = %stage.display(), "blob staged");
        Ok(handle)
    }

    fn save(&self, blob: &BlobHandle, file_name: &str) -> Result<PathBuf, ExportError> {
        let target = self.directory.join(file_name);
        fs::copy(self.stage_path(blob), &target).map_err(|source| ExportError::Save {
            path: target.clone(),
            source,
        })?;
        Ok(target)
    }

    fn revoke(&self, blob: &BlobHandle) {
        let stage = self.stage_path(blob);
        if let Err(err) = fs::remove_file(&stage) {
            tracing::warn!(stage = %stage.display(), error = %err, "failed to remove staged export");
        }
    }
}
