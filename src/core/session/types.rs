use crate::core::api::SummarizeResponse;
use crate::error::ServiceError;
use strum::Display;

/// Lifecycle of one summarization: `idle -> loading -> done | error -> idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Idle,
    Loading,
    Done,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResult {
    /// Markdown text as produced by the service.
    pub summary: String,
    pub processing_time: f64,
}

impl From<SummarizeResponse> for SummaryResult {
    fn from(response: SummarizeResponse) -> Self {
        Self {
            summary: response.summary,
            // the badge must never show a negative duration
            processing_time: response.processing_time.max(0.0),
        }
    }
}

/// Why a submission was withheld without contacting the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    NoInput,
    AlreadyLoading,
    Inactive,
}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Skipped(SkipReason),
    Completed(SummaryResult),
    Failed(ServiceError),
    /// The response arrived after the controller was deactivated.
    Discarded,
}

impl SubmitOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}
