use super::client::build_service_client;
use super::traits::{ApiFuture, SummaryApi};
use super::types::{
    HistoryEntry, HistoryId, PingResponse, SplitRequest, SplitResponse, SummarizeResponse,
};
use crate::config::ServerConfig;
use crate::core::request::SummarizeRequest;
use crate::error::ServiceError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

const MAX_DETAIL_CHARS: usize = 500;

/// [`SummaryApi`] over the service's JSON HTTP endpoints.
pub struct HttpSummaryApi {
    client: Client,
    base: Url,
}

impl HttpSummaryApi {
    pub fn new(server: &ServerConfig) -> Result<Self, ServiceError> {
        Self::with_client(&server.base_url, build_service_client(server))
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self, ServiceError> {
        let mut base = Url::parse(base_url.trim())
            .map_err(|e| ServiceError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(ServiceError::InvalidUrl(format!(
                "{base_url}: scheme must be http or https"
            )));
        }
        // Url::join drops the last segment unless the path ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.base
            .join(path)
            .map_err(|e| ServiceError::InvalidUrl(format!("{path}: {e}")))
    }

    fn history_item_url(&self, id: &HistoryId) -> Result<Url, ServiceError> {
        let mut url = self.endpoint("history")?;
        url.path_segments_mut()
            .map_err(|()| ServiceError::InvalidUrl(self.base.to_string()))?
            .push(id.as_str());
        Ok(url)
    }

    async fn ensure_success(response: Response) -> Result<Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        tracing::warn!(status = status.as_u16(), detail = ?detail, "service returned an error");
        Err(ServiceError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ServiceError::Decode(e.to_string()))
    }
}

impl SummaryApi for HttpSummaryApi {
    fn summarize<'a>(&'a self, request: &'a SummarizeRequest) -> ApiFuture<'a, SummarizeResponse> {
        Box::pin(async move {
            let url = self.endpoint("api/summarize")?;
            tracing::debug!(
                %url,
                model = %request.model,
                chars = request.text.chars().count(),
                use_map = request.use_map,
                test_mode = request.test_mode,
                "submitting summarization request"
            );
            let response = self.client.post(url).json(request).send().await?;
            let parsed: SummarizeResponse = Self::decode(response).await?;
            tracing::info!(
                processing_time = parsed.processing_time,
                "summarization finished"
            );
            Ok(parsed)
        })
    }

    fn list_history(&self) -> ApiFuture<'_, Vec<HistoryEntry>> {
        Box::pin(async move {
            let url = self.endpoint("history")?;
            let response = self.client.get(url).send().await?;
            let entries: Vec<HistoryEntry> = Self::decode(response).await?;
            tracing::debug!(entries = entries.len(), "fetched history");
            Ok(entries)
        })
    }

    fn delete_history<'a>(&'a self, id: &'a HistoryId) -> ApiFuture<'a, ()> {
        Box::pin(async move {
            let url = self.history_item_url(id)?;
            let response = self.client.delete(url).send().await?;
            Self::ensure_success(response).await?;
            tracing::info!(%id, "deleted history entry");
            Ok(())
        })
    }

    fn split_text<'a>(&'a self, request: &'a SplitRequest) -> ApiFuture<'a, SplitResponse> {
        Box::pin(async move {
            let url = self.endpoint("split")?;
            let response = self.client.post(url).json(request).send().await?;
            Self::decode(response).await
        })
    }

    fn ping(&self) -> ApiFuture<'_, PingResponse> {
        Box::pin(async move {
            let url = self.base.clone();
            let response = self.client.get(url).send().await?;
            Self::decode(response).await
        })
    }
}

/// Pull a human-readable message out of an error body.
///
/// Handles `{"detail": "..."}` and FastAPI validation errors of the form
/// `{"detail": [{"msg": "..."}, ...]}`.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let detail = match value.get("detail")? {
        Value::String(text) => text.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    if detail.is_empty() {
        return None;
    }
    Some(truncate_chars(&detail, MAX_DETAIL_CHARS))
}

fn truncate_chars(input: &str, max: usize) -> String {
    match input.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &input[..end]),
        None => input.to_string(),
    }
}
