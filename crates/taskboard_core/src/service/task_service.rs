//! Task operations.
//!
//! # Responsibility
//! - Add, update, delete and move tasks against the board store, mirroring
//!   single-item changes to the remote todo gateway.
//! - Absorb gateway failures at this boundary as notices; nothing propagates
//!   upward as a failure.
//!
//! # Invariants
//! - Every asynchronous completion applies its effect through a transform
//!   against the *current* board, never a snapshot captured before the
//!   gateway call suspended.
//! - `move_task` is atomic: the task is never observable in both columns or
//!   in neither.
//! - The gateway-minted id is authoritative; a local id is minted only when
//!   the gateway response carries no usable id.

use crate::gateway::TodoGateway;
use crate::model::board::{mint_task_id, normalized_title, Task};
use crate::notify::{Notice, Notifier};
use crate::store::BoardStore;
use log::{debug, warn};
use std::sync::Arc;

/// Title given to tasks added without one.
const DEFAULT_TASK_TITLE: &str = "New Task";

/// Caller-supplied fields for a new task.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: Option<String>,
}

/// Partial update for an existing task; unset fields are preserved.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
}

/// Task mutation operations over a shared board store handle.
pub struct TaskOps<G: TodoGateway, N: Notifier> {
    store: BoardStore,
    gateway: Arc<G>,
    notifier: Arc<N>,
}

impl<G: TodoGateway, N: Notifier> TaskOps<G, N> {
    pub fn new(store: BoardStore, gateway: Arc<G>, notifier: Arc<N>) -> Self {
        Self {
            store,
            gateway,
            notifier,
        }
    }

    /// Creates a task upstream, then appends it to the target column.
    ///
    /// # Contract
    /// - A missing/blank draft title falls back to a placeholder.
    /// - Gateway failure abandons the add: board untouched, error notice.
    /// - An unknown `column_id` at apply time absorbs the local append.
    pub async fn add_task(&self, column_id: &str, draft: TaskDraft) {
        let title = draft
            .title
            .as_deref()
            .and_then(normalized_title)
            .unwrap_or_else(|| DEFAULT_TASK_TITLE.to_string());

        let created = match self.gateway.create(&title).await {
            Ok(created) => created,
            Err(err) => {
                warn!("event=task_add_failed module=task_service error={err}");
                self.notifier
                    .notify(&Notice::Error(format!("Failed to add task \"{title}\"")));
                return;
            }
        };

        let id = if created.id.trim().is_empty() {
            mint_task_id()
        } else {
            created.id
        };
        let task_title = normalized_title(&created.title).unwrap_or_else(|| title.clone());
        let task = Task::new(id, task_title.clone());

        let column_id = column_id.to_string();
        // Applied against the current board: other operations may have run
        // while the create call was in flight.
        self.store.update(move |board| {
            let mut next = board.clone();
            match next.columns.iter_mut().find(|column| column.id == column_id) {
                Some(column) => column.tasks.push(task),
                None => debug!(
                    "event=task_add_absorbed module=task_service reason=column_not_found \
                     column={column_id}"
                ),
            }
            next
        });
        self.notifier
            .notify(&Notice::Success(format!("Task \"{task_title}\" added")));
    }

    /// Renames a task upstream and merges the echoed title locally.
    ///
    /// # Contract
    /// - Unknown column or task id is a silent no-op.
    /// - An update with no fields set (or a blank title) is a no-op.
    /// - The local title is taken from the gateway echo, not the request.
    /// - Unspecified fields and the task's sequence position are preserved.
    pub async fn update_task(&self, task_id: &str, column_id: &str, updates: TaskUpdate) {
        let Some(title) = updates.title.as_deref().and_then(normalized_title) else {
            debug!("event=task_update_skipped module=task_service reason=blank_title");
            return;
        };
        if self.store.read().task_in_column(task_id, column_id).is_none() {
            debug!(
                "event=task_update_skipped module=task_service reason=not_found \
                 task={task_id} column={column_id}"
            );
            return;
        }

        let renamed = match self.gateway.rename(task_id, &title).await {
            Ok(renamed) => renamed,
            Err(err) => {
                warn!("event=task_update_failed module=task_service task={task_id} error={err}");
                self.notifier
                    .notify(&Notice::Error("Failed to update task".to_string()));
                return;
            }
        };

        let echoed_title = normalized_title(&renamed.title).unwrap_or(title);
        let task_id = task_id.to_string();
        let column_id = column_id.to_string();
        self.store.update(move |board| {
            let mut next = board.clone();
            if let Some(task) = next
                .columns
                .iter_mut()
                .find(|column| column.id == column_id)
                .and_then(|column| column.tasks.iter_mut().find(|task| task.id == task_id))
            {
                task.title = echoed_title;
            }
            next
        });
        self.notifier
            .notify(&Notice::Success("Task updated".to_string()));
    }

    /// Deletes a task upstream, then removes it locally.
    ///
    /// # Contract
    /// - Unknown column or task id is a silent no-op.
    /// - Local removal proceeds even when the gateway delete fails; the
    ///   failure is logged and surfaced as a notice.
    pub async fn delete_task(&self, task_id: &str, column_id: &str) {
        let Some(title) = self
            .store
            .read()
            .task_in_column(task_id, column_id)
            .map(|task| task.title.clone())
        else {
            debug!(
                "event=task_delete_skipped module=task_service reason=not_found \
                 task={task_id} column={column_id}"
            );
            return;
        };

        if let Err(err) = self.gateway.delete(task_id).await {
            warn!("event=task_delete_failed module=task_service task={task_id} error={err}");
            self.notifier
                .notify(&Notice::Error(format!("Failed to delete task \"{title}\"")));
        } else {
            self.notifier
                .notify(&Notice::Success(format!("Task \"{title}\" deleted")));
        }

        let task_id = task_id.to_string();
        let column_id = column_id.to_string();
        self.store.update(move |board| {
            let mut next = board.clone();
            if let Some(column) = next.columns.iter_mut().find(|column| column.id == column_id) {
                column.tasks.retain(|task| task.id != task_id);
            }
            next
        });
    }

    /// Moves a task from one column to the end of another, atomically.
    ///
    /// # Contract
    /// - Self-move is a deliberate no-op, not an error.
    /// - Missing source column, missing task, or missing destination column
    ///   each absorb the whole operation; the task is never dropped.
    /// - Purely local: the gateway has no notion of columns.
    pub fn move_task(&self, task_id: &str, source_column_id: &str, destination_column_id: &str) {
        if source_column_id == destination_column_id {
            return;
        }

        self.store.update(|board| {
            let (Some(source_index), Some(destination_index)) = (
                board.column_index(source_column_id),
                board.column_index(destination_column_id),
            ) else {
                debug!(
                    "event=task_move_skipped module=task_service reason=column_not_found \
                     source={source_column_id} destination={destination_column_id}"
                );
                return board.clone();
            };
            let Some(task_position) = board.columns[source_index]
                .tasks
                .iter()
                .position(|task| task.id == task_id)
            else {
                debug!(
                    "event=task_move_skipped module=task_service reason=task_not_found \
                     task={task_id} source={source_column_id}"
                );
                return board.clone();
            };

            let mut next = board.clone();
            let task = next.columns[source_index].tasks.remove(task_position);
            next.columns[destination_index].tasks.push(task);
            next
        });
    }
}
