use super::types::{
    HistoryEntry, HistoryId, PingResponse, SplitRequest, SplitResponse, SummarizeResponse,
};
use crate::core::request::SummarizeRequest;
use crate::error::ServiceError;
use std::future::Future;
use std::pin::Pin;

pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'a>>;

/// The remote summarization service.
///
/// Implemented over HTTP by [`super::HttpSummaryApi`]; tests substitute
/// in-memory fakes.
pub trait SummaryApi: Send + Sync {
    /// `POST /api/summarize`
    fn summarize<'a>(&'a self, request: &'a SummarizeRequest) -> ApiFuture<'a, SummarizeResponse>;

    /// `GET /history`, newest first as the server orders it.
    fn list_history(&self) -> ApiFuture<'_, Vec<HistoryEntry>>;

    /// `DELETE /history/{id}`
    fn delete_history<'a>(&'a self, id: &'a HistoryId) -> ApiFuture<'a, ()>;

    /// `POST /split`
    fn split_text<'a>(&'a self, request: &'a SplitRequest) -> ApiFuture<'a, SplitResponse>;

    /// `GET /`
    fn ping(&self) -> ApiFuture<'_, PingResponse> {
        Box::pin(async {
            Err(ServiceError::Network(
                "ping is not supported by this backend".into(),
            ))
        })
    }
}
