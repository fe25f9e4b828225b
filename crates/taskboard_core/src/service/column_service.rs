//! Column operations.
//!
//! # Responsibility
//! - Add, update, delete and reorder columns against the board store.
//! - Enforce the blank-title and lookup-miss no-op policies above the store.
//!
//! # Invariants
//! - Columns are purely local; the remote gateway has no column concept.
//! - `delete_column` removes the column's tasks with it; tasks are never
//!   re-homed to another column.
//! - Reorder indices out of range are absorbed, never a panic.

use crate::model::board::{mint_column_id, normalized_title, Column};
use crate::notify::{Notice, Notifier};
use crate::store::BoardStore;
use log::{debug, warn};
use std::sync::Arc;

/// Background color given to freshly added columns.
const DEFAULT_COLUMN_COLOR: &str = "#f2f2f2";
/// Accent color given to freshly added columns.
const DEFAULT_COLUMN_DARK_COLOR: &str = "#808080";

/// Column mutation operations over a shared board store handle.
pub struct ColumnOps<N: Notifier> {
    store: BoardStore,
    notifier: Arc<N>,
}

impl<N: Notifier> ColumnOps<N> {
    pub fn new(store: BoardStore, notifier: Arc<N>) -> Self {
        Self { store, notifier }
    }

    /// Appends a new column with a minted local id and default colors.
    ///
    /// # Contract
    /// - Blank title after trim is a silent no-op.
    /// - The new column is appended last, with an empty task sequence.
    pub fn add_column(&self, title: &str) {
        let Some(title) = normalized_title(title) else {
            debug!("event=column_add_skipped module=column_service reason=blank_title");
            return;
        };

        let column = Column::new(
            mint_column_id(),
            title.clone(),
            DEFAULT_COLUMN_COLOR,
            DEFAULT_COLUMN_DARK_COLOR,
        );
        self.store.update(move |board| {
            let mut next = board.clone();
            next.columns.push(column);
            next
        });
        self.notifier
            .notify(&Notice::Success(format!("Column \"{title}\" added")));
    }

    /// Replaces a column's title and colors in place.
    ///
    /// # Contract
    /// - Blank title or unknown column id is a silent no-op.
    /// - Column id and task sequence are untouched.
    pub fn update_column(&self, column_id: &str, title: &str, color: &str, dark_color: &str) {
        let Some(title) = normalized_title(title) else {
            debug!("event=column_update_skipped module=column_service reason=blank_title");
            return;
        };
        if self.store.read().column(column_id).is_none() {
            debug!(
                "event=column_update_skipped module=column_service reason=not_found id={column_id}"
            );
            return;
        }

        let applied_title = title.clone();
        let color = color.to_string();
        let dark_color = dark_color.to_string();
        let column_id = column_id.to_string();
        self.store.update(move |board| {
            let mut next = board.clone();
            if let Some(column) = next.columns.iter_mut().find(|column| column.id == column_id) {
                column.title = title;
                column.color = color;
                column.dark_color = dark_color;
            }
            next
        });
        self.notifier.notify(&Notice::Success(format!(
            "Column \"{applied_title}\" updated"
        )));
    }

    /// Removes a column and all of its tasks permanently.
    pub fn delete_column(&self, column_id: &str) {
        let Some(title) = self
            .store
            .read()
            .column(column_id)
            .map(|column| column.title.clone())
        else {
            debug!(
                "event=column_delete_skipped module=column_service reason=not_found id={column_id}"
            );
            return;
        };

        let column_id = column_id.to_string();
        self.store.update(move |board| {
            let mut next = board.clone();
            next.columns.retain(|column| column.id != column_id);
            next
        });
        self.notifier
            .notify(&Notice::Success(format!("Column \"{title}\" deleted")));
    }

    /// Moves the column at `source_index` to `destination_index`.
    ///
    /// List-splice semantics: the column is removed first, then reinserted,
    /// so a destination past the source accounts for the removal shift.
    /// Out-of-range indices are absorbed as a logged no-op.
    pub fn move_column(&self, source_index: usize, destination_index: usize) {
        self.store.update(|board| {
            let count = board.columns.len();
            if source_index >= count || destination_index >= count {
                warn!(
                    "event=column_move_skipped module=column_service reason=index_out_of_range \
                     source={source_index} destination={destination_index} columns={count}"
                );
                return board.clone();
            }
            let mut next = board.clone();
            let column = next.columns.remove(source_index);
            next.columns.insert(destination_index, column);
            next
        });
    }
}
