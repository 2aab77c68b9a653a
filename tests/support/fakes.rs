#![allow(dead_code)]

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use mmsummary::core::api::{
    ApiFuture, HistoryEntry, HistoryId, SplitRequest, SplitResponse, SummarizeResponse, SummaryApi,
};
use mmsummary::core::document::LoadedDocument;
use mmsummary::core::export::{BlobHandle, BlobStore, ClipboardBackend};
use mmsummary::core::history::Confirmer;
use mmsummary::core::request::SummarizeRequest;
use mmsummary::error::{ClipboardError, ExportError, ServiceError};

pub fn document(text: &str) -> LoadedDocument {
    LoadedDocument {
        file_name: "input.txt".into(),
        text: text.into(),
    }
}

pub fn entry(id: &str) -> HistoryEntry {
    HistoryEntry {
        id: HistoryId::from(id),
        summary: format!("# Summary {id}"),
        original_text: format!("original text of {id}"),
        model: "google/gemma-3-27b-it:free".into(),
        processing_time: 1.5,
        created_at: "2024-05-01 10:00:00".into(),
    }
}

// ── SummaryApi ───────────────────────────────────────────────────

/// In-memory service with scripted replies and per-endpoint call counters.
pub struct FakeApi {
    summarize_calls: AtomicUsize,
    list_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    summarize_reply: Mutex<Result<SummarizeResponse, ServiceError>>,
    history_reply: Mutex<Result<Vec<HistoryEntry>, ServiceError>>,
    delete_reply: Result<(), ServiceError>,
    gate: Option<Arc<Notify>>,
    requests: Mutex<Vec<SummarizeRequest>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            summarize_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
            summarize_reply: Mutex::new(Ok(SummarizeResponse {
                summary: "# Hi".into(),
                processing_time: 2.3,
            })),
            history_reply: Mutex::new(Ok(Vec::new())),
            delete_reply: Ok(()),
            gate: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_summary_error(self, err: ServiceError) -> Self {
        self.set_summary_reply(Err(err));
        self
    }

    pub fn set_summary_reply(&self, reply: Result<SummarizeResponse, ServiceError>) {
        *self.summarize_reply.lock().unwrap() = reply;
    }

    pub fn with_history(self, entries: Vec<HistoryEntry>) -> Self {
        *self.history_reply.lock().unwrap() = Ok(entries);
        self
    }

    pub fn with_delete_error(mut self, err: ServiceError) -> Self {
        self.delete_reply = Err(err);
        self
    }

    /// Summarize calls block until the returned `Notify` is signalled.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn set_history(&self, reply: Result<Vec<HistoryEntry>, ServiceError>) {
        *self.history_reply.lock().unwrap() = reply;
    }

    pub fn summarize_calls(&self) -> usize {
        self.summarize_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<SummarizeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl SummaryApi for FakeApi {
    fn summarize<'a>(&'a self, request: &'a SummarizeRequest) -> ApiFuture<'a, SummarizeResponse> {
        Box::pin(async move {
            self.summarize_calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.summarize_reply.lock().unwrap().clone()
        })
    }

    fn list_history(&self) -> ApiFuture<'_, Vec<HistoryEntry>> {
        Box::pin(async move {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            self.history_reply.lock().unwrap().clone()
        })
    }

    fn delete_history<'a>(&'a self, _id: &'a HistoryId) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            self.delete_reply.clone()
        })
    }

    fn split_text<'a>(&'a self, request: &'a SplitRequest) -> ApiFuture<'a, SplitResponse> {
        Box::pin(async move {
            Ok(SplitResponse {
                chunks: vec![request.text.clone()],
                total_chunks: 1,
            })
        })
    }
}

// ── Confirmer ────────────────────────────────────────────────────

pub struct ScriptedConfirmer {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}

// ── Clipboard ────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryClipboard {
    pub contents: Mutex<Vec<String>>,
}

impl ClipboardBackend for MemoryClipboard {
    fn write_text<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), ClipboardError>> + Send + 'a>> {
        Box::pin(async move {
            self.contents.lock().unwrap().push(text.to_string());
            Ok(())
        })
    }
}

// ── BlobStore ────────────────────────────────────────────────────

/// Counts blob creations and revocations; `failing_save` makes every save
/// return an error after the blob exists.
#[derive(Default)]
pub struct CountingBlobStore {
    pub created: AtomicUsize,
    pub saved: Mutex<Vec<(String, String)>>,
    pub revoked: AtomicUsize,
    pub failing_save: bool,
    blobs: Mutex<Vec<(u64, String)>>,
}

impl CountingBlobStore {
    pub fn failing() -> Self {
        Self {
            failing_save: true,
            ..Self::default()
        }
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn revoked(&self) -> usize {
        self.revoked.load(Ordering::SeqCst)
    }
}

impl BlobStore for CountingBlobStore {
    fn create(&self, contents: &str, mime: &str) -> Result<BlobHandle, ExportError> {
        let id = self.created.fetch_add(1, Ordering::SeqCst) as u64;
        self.blobs.lock().unwrap().push((id, contents.to_string()));
        Ok(BlobHandle {
            id,
            mime: mime.to_string(),
        })
    }

    fn save(&self, blob: &BlobHandle, file_name: &str) -> Result<PathBuf, ExportError> {
        if self.failing_save {
            return Err(ExportError::Save {
                path: PathBuf::from(file_name),
                source: std::io::Error::other("disk full"),
            });
        }
        let contents = self
            .blobs
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| *id == blob.id)
            .map(|(_, contents)| contents.clone())
            .unwrap_or_default();
        self.saved
            .lock()
            .unwrap()
            .push((file_name.to_string(), contents));
        Ok(PathBuf::from(file_name))
    }

    fn revoke(&self, _blob: &BlobHandle) {
        self.revoked.fetch_add(1, Ordering::SeqCst);
    }
}
