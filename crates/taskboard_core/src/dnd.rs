//! Drag-and-drop coordination.
//!
//! # Responsibility
//! - Track the single item currently being dragged across one gesture.
//! - Thread the drag payload explicitly from drag-start to drop and invoke
//!   the task move on a completed cross-column drop.
//!
//! # Invariants
//! - Drag state is cleared exactly once per gesture, on drop or cancel,
//!   regardless of outcome; a later gesture never observes stale state.
//! - A drop on the source column performs no mutation.

use crate::gateway::TodoGateway;
use crate::model::board::{ColumnId, DragItem, DragKind, TaskId};
use crate::notify::Notifier;
use crate::service::task_service::TaskOps;
use log::debug;
use std::sync::{Mutex, PoisonError};

/// Everything a drop handler needs to act on a gesture.
///
/// Carried by value from the drag-start call site to the drop call site
/// instead of living in shared state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub task_id: TaskId,
    pub source_column_id: ColumnId,
}

/// Gesture state machine over the transient drag item.
#[derive(Default)]
pub struct DragCoordinator {
    dragging: Mutex<Option<DragItem>>,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a task drag gesture and returns the payload for its drop.
    pub fn start_task_drag(&self, task_id: &str, source_column_id: &str) -> DragPayload {
        *self.lock() = Some(DragItem {
            id: task_id.to_string(),
            kind: DragKind::Task,
        });
        debug!("event=drag_started module=dnd task={task_id} source={source_column_id}");
        DragPayload {
            task_id: task_id.to_string(),
            source_column_id: source_column_id.to_string(),
        }
    }

    /// Completes a gesture with a drop onto a column.
    ///
    /// Invokes the move only when the destination differs from the source;
    /// clears drag state unconditionally.
    pub fn drop_on_column<G, N>(
        &self,
        payload: DragPayload,
        destination_column_id: &str,
        tasks: &TaskOps<G, N>,
    ) where
        G: TodoGateway,
        N: Notifier,
    {
        if payload.source_column_id != destination_column_id {
            tasks.move_task(
                &payload.task_id,
                &payload.source_column_id,
                destination_column_id,
            );
        }
        self.clear("drop");
    }

    /// Ends a gesture without a successful drop; performs no mutation.
    pub fn cancel(&self) {
        self.clear("cancel");
    }

    /// Current drag state, for the view layer.
    pub fn dragging(&self) -> Option<DragItem> {
        self.lock().clone()
    }

    fn clear(&self, outcome: &str) {
        *self.lock() = None;
        debug!("event=drag_ended module=dnd outcome={outcome}");
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<DragItem>> {
        self.dragging.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
