use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mmsummary::config::{ServerConfig, SettingKey, SummarizeSettings};
use mmsummary::core::api::{HistoryId, HttpSummaryApi, SplitRequest, SummaryApi};
use mmsummary::core::request::build_request;
use mmsummary::error::{GENERIC_SERVICE_MESSAGE, ServiceError};

fn api_for(server: &MockServer) -> HttpSummaryApi {
    HttpSummaryApi::new(&ServerConfig {
        base_url: server.uri(),
        ..ServerConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn summarize_posts_wire_payload_and_decodes_response() {
    let server = MockServer::start().await;
    let settings = SummarizeSettings::default()
        .with_value(SettingKey::Language, "en")
        .unwrap();

    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .and(body_json(json!({
            "text": "Hello world",
            "model": "google/gemma-3-27b-it:free",
            "chunk_size_1": 16000,
            "chunk_size_2": 8000,
            "token_max": 16000,
            "temperature": 0.0,
            "use_map": true,
            "map_temple": "",
            "reduce_temple": "",
            "reduce_temperature": 0.0,
            "test_mode": false,
            "language": "English"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "summary": "# Hi", "processing_time": 2.3 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = api_for(&server)
        .summarize(&build_request("Hello world", &settings))
        .await
        .unwrap();

    assert_eq!(response.summary, "# Hi");
    assert!((response.processing_time - 2.3).abs() < f64::EPSILON);
    server.verify().await;
}

#[tokio::test]
async fn error_detail_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({ "detail": "OpenRouter API Key not set in environment." })),
        )
        .mount(&server)
        .await;

    let err = api_for(&server)
        .summarize(&build_request("text", &SummarizeSettings::default()))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Status { status: 500, .. }));
    assert_eq!(err.user_message(), "OpenRouter API Key not set in environment.");
}

#[tokio::test]
async fn validation_errors_flatten_to_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "detail": [
                { "loc": ["body", "chunk_size_1"], "msg": "value is not a valid integer", "type": "type_error.integer" }
            ]
        })))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .summarize(&build_request("text", &SummarizeSettings::default()))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "value is not a valid integer");
}

#[tokio::test]
async fn plain_text_errors_fall_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = api_for(&server).list_history().await.unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Status {
            status: 502,
            detail: None
        }
    ));
    assert_eq!(err.user_message(), GENERIC_SERVICE_MESSAGE);
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "?" })))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .summarize(&build_request("text", &SummarizeSettings::default()))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Decode(_)));
}

#[tokio::test]
async fn history_is_returned_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 9, "summary": "newest", "original_text": "c", "model": "m", "processing_time": 3.0, "created_at": "2024-05-03 09:00:00" },
            { "id": 2, "summary": "older", "original_text": "b", "model": "m", "processing_time": 1.0, "created_at": "2024-05-01 09:00:00" },
            { "id": 5, "summary": "middle", "original_text": "a", "model": "m", "processing_time": 2.0, "created_at": "2024-05-02 09:00:00" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let entries = api_for(&server).list_history().await.unwrap();

    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["9", "2", "5"]);
    assert_eq!(entries[0].created_at, "2024-05-03 09:00:00");
}

#[tokio::test]
async fn delete_targets_the_entry_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/history/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Deleted" })))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server)
        .delete_history(&HistoryId::from("7"))
        .await
        .unwrap();

    server.verify().await;
}

#[tokio::test]
async fn delete_of_missing_entry_reports_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/history/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Record not found" })))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .delete_history(&HistoryId::from("404"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Record not found");
}

#[tokio::test]
async fn split_and_ping_use_supplementary_endpoints() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/split"))
        .and(body_json(json!({ "text": "abc", "chunk_size": 16000, "chunk_overlap": 4000 })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "chunks": ["abc"], "total_chunks": 1 })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": "Text Summarization API is running" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let split = api
        .split_text(&SplitRequest {
            text: "abc".into(),
            chunk_size: 16_000,
            chunk_overlap: 4_000,
        })
        .await
        .unwrap();
    let ping = api.ping().await.unwrap();

    assert_eq!(split.total_chunks, 1);
    assert_eq!(ping.message, "Text Summarization API is running");
    server.verify().await;
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = HttpSummaryApi::new(&ServerConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        connect_timeout_secs: 2,
        ..ServerConfig::default()
    })
    .unwrap();

    let err = api.list_history().await.unwrap_err();

    assert!(matches!(err, ServiceError::Network(_)));
    assert!(err.user_message().starts_with(GENERIC_SERVICE_MESSAGE));
}
