use super::confirm::Confirmer;
use crate::core::api::{HistoryEntry, HistoryId, SummaryApi};
use crate::error::ServiceError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Characters of the original document shown in an expanded entry.
pub const PREVIEW_CHARS: usize = 200;

#[derive(Debug)]
pub enum RemoveOutcome {
    /// The user declined; the service was not contacted.
    Cancelled,
    Removed,
    Failed(ServiceError),
}

#[derive(Debug, Default)]
struct HistoryState {
    entries: Vec<HistoryEntry>,
    expanded: Option<HistoryId>,
}

/// Local projection of the server's history.
///
/// The cache only changes after the service has confirmed a fetch or a
/// delete; it is never updated optimistically.
pub struct HistoryStore {
    api: Arc<dyn SummaryApi>,
    state: Mutex<HistoryState>,
}

impl HistoryStore {
    pub fn new(api: Arc<dyn SummaryApi>) -> Self {
        Self {
            api,
            state: Mutex::new(HistoryState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HistoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the cache with the server's current list, in server order.
    /// On failure the previous list is kept.
    pub async fn refresh(&self) -> Result<Vec<HistoryEntry>, ServiceError> {
        let fetched = self.api.list_history().await.inspect_err(|err| {
            tracing::warn!(error = %err, "history refresh failed; keeping cached list");
        })?;

        let mut state = self.lock();
        if let Some(expanded) = &state.expanded
            && !fetched.iter().any(|entry| &entry.id == expanded)
        {
            state.expanded = None;
        }
        state.entries = fetched.clone();
        tracing::debug!(entries = fetched.len(), "history cache replaced");
        Ok(fetched)
    }

    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.lock().entries.clone()
    }

    pub fn get(&self, id: &HistoryId) -> Option<HistoryEntry> {
        self.lock()
            .entries
            .iter()
            .find(|entry| &entry.id == id)
            .cloned()
    }

    /// Ask for confirmation, then delete `id` on the server. The cached
    /// entry is dropped only once the server has acknowledged the delete.
    pub async fn remove(&self, id: &HistoryId, confirmer: &dyn Confirmer) -> RemoveOutcome {
        let prompt = t!("history.confirm_delete", id = id.as_str());
        if !confirmer.confirm(&prompt) {
            tracing::debug!(%id, "delete cancelled by user");
            return RemoveOutcome::Cancelled;
        }

        if let Err(err) = self.api.delete_history(id).await {
            tracing::warn!(%id, error = %err, "delete failed; cache unchanged");
            return RemoveOutcome::Failed(err);
        }

        let mut state = self.lock();
        state.entries.retain(|entry| &entry.id != id);
        if state.expanded.as_ref() == Some(id) {
            state.expanded = None;
        }
        tracing::info!(%id, remaining = state.entries.len(), "history entry removed");
        RemoveOutcome::Removed
    }

    /// Single-select accordion: expanding one entry collapses any other,
    /// toggling the expanded entry collapses it.
    pub fn toggle_expanded(&self, id: &HistoryId) {
        let mut state = self.lock();
        state.expanded = if state.expanded.as_ref() == Some(id) {
            None
        } else {
            Some(id.clone())
        };
    }

    pub fn expanded(&self) -> Option<HistoryId> {
        self.lock().expanded.clone()
    }

    pub fn is_expanded(&self, id: &HistoryId) -> bool {
        self.lock().expanded.as_ref() == Some(id)
    }

    /// Leading slice of the original text shown under an expanded entry.
    pub fn preview(entry: &HistoryEntry) -> String {
        let text = entry.original_text.as_str();
        match text.char_indices().nth(PREVIEW_CHARS) {
            Some((end, _)) => format!("{}...", &text[..end]),
            None => text.to_string(),
        }
    }
}
