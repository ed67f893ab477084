use super::seed_messages;
use crate::{InMemoryStorage, Message, MessageStats, MessageStore};

#[tokio::test]
async fn test_create_returns_positive_id_and_pending_row() {
    let storage = InMemoryStorage::new();

    let id = storage.create_message(&Message::new("hello", "k1")).await.expect("create");
    assert_eq!(id, 1);

    let stored = storage.get(id).expect("row exists");
    assert_eq!(stored.text, "hello");
    assert_eq!(stored.key, "k1");
    assert!(!stored.status);
}

#[tokio::test]
async fn test_create_ignores_caller_id_and_status() {
    let storage = InMemoryStorage::new();
    let input = Message { id: 42, text: "t".to_owned(), key: "k".to_owned(), status: true };

    let id = storage.create_message(&input).await.expect("create");
    assert_eq!(id, 1);
    let stored = storage.get(id).expect("row exists");
    assert!(!stored.status);
}

#[tokio::test]
async fn test_ids_are_sequential() {
    let storage = InMemoryStorage::new();
    let ids = seed_messages(&storage).await;
    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let storage = InMemoryStorage::new();

    let id = storage.create_message(&Message::new("hello", "k1")).await.expect("create");
    assert_eq!(id, 1);
    assert_eq!(storage.get_count_message().await.expect("count"), 1);
    assert_eq!(storage.get_processing_count_message().await.expect("pending"), 1);

    storage.update_status_message(&Message::with_key("k1")).await.expect("update");

    assert_eq!(storage.get_processing_count_message().await.expect("pending"), 0);
    assert_eq!(storage.get_count_message().await.expect("count"), 1);
}

#[tokio::test]
async fn test_update_marks_every_row_with_key() {
    let storage = InMemoryStorage::new();
    let ids = seed_messages(&storage).await;

    storage.update_status_message(&Message::with_key("k1")).await.expect("update");

    assert!(storage.get(ids[0]).expect("first").status);
    assert!(!storage.get(ids[1]).expect("second").status);
    assert!(storage.get(ids[2]).expect("third").status);
    assert_eq!(storage.get_processing_count_message().await.expect("pending"), 1);
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let storage = InMemoryStorage::new();
    seed_messages(&storage).await;

    storage.update_status_message(&Message::with_key("k2")).await.expect("first update");
    storage.update_status_message(&Message::with_key("k2")).await.expect("second update");

    assert_eq!(storage.get_processing_count_message().await.expect("pending"), 2);
}

#[tokio::test]
async fn test_update_unknown_key_is_silent() {
    let storage = InMemoryStorage::new();
    seed_messages(&storage).await;

    storage.update_status_message(&Message::with_key("missing")).await.expect("no-op update");

    assert_eq!(storage.get_count_message().await.expect("count"), 3);
    assert_eq!(storage.get_processing_count_message().await.expect("pending"), 3);
}

#[tokio::test]
async fn test_update_uses_key_not_id() {
    let storage = InMemoryStorage::new();
    let id = storage.create_message(&Message::new("hello", "k1")).await.expect("create");

    let mut by_id = Message::with_key("other");
    by_id.id = id;
    storage.update_status_message(&by_id).await.expect("update");

    assert!(!storage.get(id).expect("row").status);
}

#[tokio::test]
async fn test_processing_count_is_total_minus_processed() {
    let storage = InMemoryStorage::new();
    seed_messages(&storage).await;
    storage.create_message(&Message::new("x", "k3")).await.expect("create");
    storage.update_status_message(&Message::with_key("k1")).await.expect("update");

    let processed = storage.messages().iter().filter(|m| m.status).count();
    let total = storage.get_count_message().await.expect("count");
    let pending = storage.get_processing_count_message().await.expect("pending");
    assert_eq!(total, 4);
    assert_eq!(pending, total - processed as u64);
}

#[tokio::test]
async fn test_stats_collect() {
    let storage = InMemoryStorage::new();
    seed_messages(&storage).await;
    storage.update_status_message(&Message::with_key("k2")).await.expect("update");

    let stats = MessageStats::collect(&storage).await.expect("stats");
    assert_eq!(stats, MessageStats { total: 3, pending: 2, processed: 1 });

    let json = serde_json::to_value(stats).expect("serialize");
    assert_eq!(json["processed"], 1);
}

#[tokio::test]
async fn test_closed_store_fails_with_operation_context() {
    let storage = InMemoryStorage::new();
    storage.create_message(&Message::new("hello", "k1")).await.expect("create");
    storage.close();

    let err = storage.create_message(&Message::new("late", "k9")).await.unwrap_err();
    assert_eq!(err.context(), "failed to insert message");
    let err = storage.update_status_message(&Message::with_key("k1")).await.unwrap_err();
    assert_eq!(err.context(), "failed to update status message");
    let err = storage.get_count_message().await.unwrap_err();
    assert_eq!(err.context(), "failed to query count message");
    let err = storage.get_processing_count_message().await.unwrap_err();
    assert_eq!(err.context(), "failed to query count message");
    assert!(!err.is_transient());

    assert_eq!(storage.messages().len(), 1);
}

#[tokio::test]
async fn test_clones_share_rows() {
    let storage = InMemoryStorage::new();
    let other = storage.clone();
    storage.create_message(&Message::new("hello", "k1")).await.expect("create");
    assert_eq!(other.get_count_message().await.expect("count"), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let storage = InMemoryStorage::new();
    let mut handles = Vec::new();
    for i in 0..32 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            storage.create_message(&Message::new(format!("m{i}"), format!("k{i}"))).await
        }));
    }
    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.expect("join").expect("create"));
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 32);
    assert_eq!(storage.get_count_message().await.expect("count"), 32);
}
