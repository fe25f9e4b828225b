//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Exercise one hydration and one mutation of each kind offline, with
//!   output stable enough for quick local sanity checks.

use std::sync::Arc;
use taskboard_core::{
    hydrate, BoardStore, ColumnOps, InMemoryTodoGateway, LogNotifier, TaskDraft, TaskOps,
};

#[tokio::main]
async fn main() {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    let store = BoardStore::new();
    let gateway = Arc::new(InMemoryTodoGateway::with_titles([
        "inbox zero",
        "ship the release",
    ]));
    let notifier = Arc::new(LogNotifier);
    let columns = ColumnOps::new(store.clone(), notifier.clone());
    let tasks = TaskOps::new(store.clone(), gateway.clone(), notifier);

    match hydrate(&store, gateway.as_ref()).await {
        Ok(count) => println!("hydrated items={count}"),
        Err(err) => println!("hydration failed: {err}"),
    }

    columns.add_column("Review");
    tasks
        .add_task(
            "1",
            TaskDraft {
                title: Some("smoke task".to_string()),
            },
        )
        .await;

    let board = store.read();
    println!(
        "board columns={} tasks={}",
        board.columns.len(),
        board.task_count()
    );
}
