use super::types::{SessionStatus, SkipReason, SubmitOutcome, SummaryResult};
use crate::config::SummarizeSettings;
use crate::core::api::SummaryApi;
use crate::core::document::LoadedDocument;
use crate::core::request::build_request;
use crate::error::ServiceError;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
struct SessionState {
    input_text: String,
    input_name: Option<String>,
    status: SessionStatus,
    result: Option<SummaryResult>,
    last_error: Option<ServiceError>,
}

/// Owns the input text and the single most recent result, and drives one
/// summarization request at a time.
///
/// The controller lives inside a scope (a [`CancellationToken`]). Once the
/// scope is cancelled, in-flight responses are dropped on arrival and new
/// submissions are refused. Requests already sent are never aborted.
pub struct SessionController {
    api: Arc<dyn SummaryApi>,
    scope: CancellationToken,
    state: Mutex<SessionState>,
}

impl SessionController {
    pub fn new(api: Arc<dyn SummaryApi>) -> Self {
        Self::with_scope(api, CancellationToken::new())
    }

    pub fn with_scope(api: Arc<dyn SummaryApi>, scope: CancellationToken) -> Self {
        Self {
            api,
            scope,
            state: Mutex::new(SessionState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the input with a freshly loaded document.
    pub fn load_input(&self, document: LoadedDocument) {
        let mut state = self.lock();
        tracing::debug!(
            file = %document.file_name,
            chars = document.text.chars().count(),
            "input loaded"
        );
        state.input_text = document.text;
        state.input_name = Some(document.file_name);
    }

    pub fn input_text(&self) -> String {
        self.lock().input_text.clone()
    }

    pub fn input_name(&self) -> Option<String> {
        self.lock().input_name.clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.lock().status
    }

    pub fn result(&self) -> Option<SummaryResult> {
        self.lock().result.clone()
    }

    pub fn last_error(&self) -> Option<ServiceError> {
        self.lock().last_error.clone()
    }

    pub fn is_active(&self) -> bool {
        !self.scope.is_cancelled()
    }

    /// Submit the current input. At most one request is in flight; a call
    /// made while loading returns immediately without touching the service.
    pub async fn submit(&self, settings: &SummarizeSettings) -> SubmitOutcome {
        let request = {
            let mut state = self.lock();
            if self.scope.is_cancelled() {
                return SubmitOutcome::Skipped(SkipReason::Inactive);
            }
            if state.status == SessionStatus::Loading {
                tracing::debug!("submit ignored: a request is already in flight");
                return SubmitOutcome::Skipped(SkipReason::AlreadyLoading);
            }
            if state.input_text.is_empty() {
                tracing::debug!("submit ignored: no input loaded");
                return SubmitOutcome::Skipped(SkipReason::NoInput);
            }
            if matches!(state.status, SessionStatus::Done | SessionStatus::Error) {
                state.status = SessionStatus::Idle;
            }
            state.status = SessionStatus::Loading;
            build_request(&state.input_text, settings)
        };

        let mut pending = PendingSubmit::new(self);
        tracing::info!(model = %request.model, strategy = %settings.strategy, "summarizing");
        let response = self.api.summarize(&request).await;
        pending.settle();

        let mut state = self.lock();
        if self.scope.is_cancelled() {
            tracing::debug!("discarding response for an inactive session");
            return SubmitOutcome::Discarded;
        }
        match response {
            Ok(response) => {
                let result = SummaryResult::from(response);
                // input loaded while the request was in flight is kept
                if state.input_text == request.text {
                    state.input_text.clear();
                    state.input_name = None;
                }
                state.result = Some(result.clone());
                state.last_error = None;
                state.status = SessionStatus::Done;
                tracing::info!(processing_time = result.processing_time, "session done");
                SubmitOutcome::Completed(result)
            }
            Err(err) => {
                tracing::warn!(error = %err, "summarization failed");
                state.last_error = Some(err.clone());
                state.status = SessionStatus::Error;
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Dismiss a finished result or error notification.
    pub fn acknowledge(&self) {
        let mut state = self.lock();
        if matches!(state.status, SessionStatus::Done | SessionStatus::Error) {
            state.status = SessionStatus::Idle;
        }
    }

    /// Leave the scope: late responses are discarded from now on.
    pub fn deactivate(&self) {
        self.scope.cancel();
    }
}

/// Returns the session to idle if a submit future is dropped before its
/// response arrives.
struct PendingSubmit<'a> {
    session: &'a SessionController,
    settled: bool,
}

impl<'a> PendingSubmit<'a> {
    fn new(session: &'a SessionController) -> Self {
        Self {
            session,
            settled: false,
        }
    }

    fn settle(&mut self) {
        self.settled = true;
    }
}

impl Drop for PendingSubmit<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.session.lock();
        if state.status == SessionStatus::Loading {
            tracing::debug!("submit abandoned before a response; back to idle");
            state.status = SessionStatus::Idle;
        }
    }
}
