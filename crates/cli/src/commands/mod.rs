use anyhow::Result;
use msgproc_core::Message;
use msgproc_storage::{MessageStats, MessageStore};

pub(crate) async fn run_create<S: MessageStore>(
    store: &S,
    text: String,
    key: String,
) -> Result<()> {
    let id = store.create_message(&Message::new(text, key)).await?;
    println!("{id}");
    Ok(())
}

pub(crate) async fn run_process<S: MessageStore>(store: &S, key: String) -> Result<()> {
    store.update_status_message(&Message::with_key(key)).await?;
    Ok(())
}

pub(crate) async fn run_count<S: MessageStore>(store: &S) -> Result<()> {
    println!("{}", store.get_count_message().await?);
    Ok(())
}

pub(crate) async fn run_pending<S: MessageStore>(store: &S) -> Result<()> {
    println!("{}", store.get_processing_count_message().await?);
    Ok(())
}

pub(crate) async fn run_stats<S: MessageStore>(store: &S) -> Result<()> {
    let stats = MessageStats::collect(store).await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
