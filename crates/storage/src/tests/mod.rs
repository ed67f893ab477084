//! Test utilities and module declarations for storage tests.

use crate::{Message, MessageStore};

/// Create the scenario every backend must agree on: two pending messages
/// under different keys and a third sharing the first key.
pub async fn seed_messages<S: MessageStore + ?Sized>(store: &S) -> Vec<i32> {
    let mut ids = Vec::new();
    for (text, key) in [("hello", "k1"), ("world", "k2"), ("again", "k1")] {
        ids.push(store.create_message(&Message::new(text, key)).await.expect("seed insert"));
    }
    ids
}

mod memory_tests;
