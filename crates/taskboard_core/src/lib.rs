//! Core board state and synchronization logic for the taskboard.
//! This crate is the single source of truth for board invariants.

pub mod dnd;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod notify;
pub mod service;
pub mod store;

pub use dnd::{DragCoordinator, DragPayload};
pub use gateway::{
    FailNext, GatewayConfig, GatewayError, GatewayResult, HttpTodoGateway, InMemoryTodoGateway,
    TodoGateway, TodoItem,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{
    mint_column_id, mint_task_id, normalized_title, Board, Column, ColumnId, DragItem, DragKind,
    Task, TaskId,
};
pub use notify::{LogNotifier, Notice, Notifier, RecordingNotifier};
pub use service::column_service::ColumnOps;
pub use service::hydration::hydrate;
pub use service::task_service::{TaskDraft, TaskOps, TaskUpdate};
pub use store::{BoardStore, SubscriptionId};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
