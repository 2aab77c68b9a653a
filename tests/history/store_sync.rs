use std::sync::Arc;

use mmsummary::core::api::HistoryId;
use mmsummary::core::history::{HistoryStore, RemoveOutcome};
use mmsummary::error::ServiceError;

use crate::fakes::{FakeApi, ScriptedConfirmer, entry};

fn ids(store: &HistoryStore) -> Vec<String> {
    store
        .entries()
        .iter()
        .map(|e| e.id.as_str().to_string())
        .collect()
}

async fn loaded_store(api: Arc<FakeApi>) -> HistoryStore {
    let store = HistoryStore::new(api);
    store.refresh().await.unwrap();
    store
}

#[tokio::test]
async fn refresh_replaces_cache_in_server_order() {
    let api = Arc::new(FakeApi::new().with_history(vec![entry("3"), entry("1"), entry("2")]));
    let store = loaded_store(api.clone()).await;
    assert_eq!(ids(&store), ["3", "1", "2"]);

    api.set_history(Ok(vec![entry("4")]));
    store.refresh().await.unwrap();

    assert_eq!(ids(&store), ["4"]);
    assert_eq!(api.list_calls(), 2);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_list() {
    let api = Arc::new(FakeApi::new().with_history(vec![entry("1"), entry("2")]));
    let store = loaded_store(api.clone()).await;

    api.set_history(Err(ServiceError::Network("timed out".into())));
    let result = store.refresh().await;

    assert!(result.is_err());
    assert_eq!(ids(&store), ["1", "2"]);
}

#[tokio::test]
async fn declined_confirmation_makes_no_network_call() {
    let api = Arc::new(FakeApi::new().with_history(vec![entry("1"), entry("2")]));
    let store = loaded_store(api.clone()).await;
    let confirmer = ScriptedConfirmer::answering(false);

    let outcome = store.remove(&HistoryId::from("1"), &confirmer).await;

    assert!(matches!(outcome, RemoveOutcome::Cancelled));
    assert_eq!(api.delete_calls(), 0);
    assert_eq!(ids(&store), ["1", "2"]);
    assert_eq!(confirmer.prompts().len(), 1);
}

#[tokio::test]
async fn confirmed_delete_drops_entry_after_server_success() {
    let api = Arc::new(FakeApi::new().with_history(vec![entry("1"), entry("2"), entry("3")]));
    let store = loaded_store(api.clone()).await;

    let outcome = store
        .remove(&HistoryId::from("2"), &ScriptedConfirmer::answering(true))
        .await;

    assert!(matches!(outcome, RemoveOutcome::Removed));
    assert_eq!(api.delete_calls(), 1);
    assert_eq!(ids(&store), ["1", "3"]);
    assert!(store.get(&HistoryId::from("2")).is_none());
}

#[tokio::test]
async fn server_failure_leaves_cache_untouched() {
    let api = Arc::new(
        FakeApi::new()
            .with_history(vec![entry("1"), entry("2")])
            .with_delete_error(ServiceError::Status {
                status: 500,
                detail: Some("database is locked".into()),
            }),
    );
    let store = loaded_store(api.clone()).await;

    let outcome = store
        .remove(&HistoryId::from("1"), &ScriptedConfirmer::answering(true))
        .await;

    let RemoveOutcome::Failed(err) = outcome else {
        panic!("expected failure");
    };
    assert_eq!(err.user_message(), "database is locked");
    assert_eq!(api.delete_calls(), 1);
    assert_eq!(ids(&store), ["1", "2"]);
}

#[tokio::test]
async fn expanding_b_after_a_leaves_only_b_expanded() {
    let api = Arc::new(FakeApi::new().with_history(vec![entry("a"), entry("b")]));
    let store = loaded_store(api.clone()).await;
    let a = HistoryId::from("a");
    let b = HistoryId::from("b");

    store.toggle_expanded(&a);
    store.toggle_expanded(&b);

    assert!(!store.is_expanded(&a));
    assert!(store.is_expanded(&b));
    assert_eq!(store.expanded(), Some(b.clone()));

    store.toggle_expanded(&b);
    assert_eq!(store.expanded(), None);
    assert_eq!(api.list_calls(), 1);
}

#[tokio::test]
async fn deleting_the_expanded_entry_clears_expansion() {
    let api = Arc::new(FakeApi::new().with_history(vec![entry("1"), entry("2")]));
    let store = loaded_store(api).await;
    let id = HistoryId::from("1");
    store.toggle_expanded(&id);

    store.remove(&id, &ScriptedConfirmer::answering(true)).await;

    assert_eq!(store.expanded(), None);
}

#[tokio::test]
async fn refresh_collapses_entries_that_disappeared() {
    let api = Arc::new(FakeApi::new().with_history(vec![entry("1"), entry("2")]));
    let store = loaded_store(api.clone()).await;
    store.toggle_expanded(&HistoryId::from("2"));

    api.set_history(Ok(vec![entry("1")]));
    store.refresh().await.unwrap();

    assert_eq!(store.expanded(), None);
}
