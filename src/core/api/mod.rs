pub mod client;
pub mod http;
pub mod traits;
pub mod types;

pub use client::build_service_client;
pub use http::HttpSummaryApi;
pub use traits::{ApiFuture, SummaryApi};
pub use types::{
    HistoryEntry, HistoryId, PingResponse, SplitRequest, SplitResponse, SummarizeResponse,
};
