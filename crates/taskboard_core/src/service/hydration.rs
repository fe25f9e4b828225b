//! One-shot board bootstrap from the remote todo gateway.
//!
//! # Responsibility
//! - Fetch the flat upstream item list once at session start and distribute
//!   it into the fixed default columns.
//!
//! # Invariants
//! - Hydration runs once; there is no later reconciliation loop, and the
//!   board drifts from upstream state afterwards by design.
//! - Each item lands in one of the three fixed columns chosen uniformly at
//!   random, independently per item. The random distribution is deliberate.
//! - On gateway failure the board is left untouched (empty) and the error
//!   is returned; there is no automatic retry.

use crate::gateway::{GatewayResult, TodoGateway};
use crate::model::board::{Board, Column, Task};
use crate::store::BoardStore;
use log::{info, warn};
use rand::Rng;

/// The fixed column set every session starts with: id, title, color, accent.
const DEFAULT_COLUMNS: [(&str, &str, &str, &str); 3] = [
    ("1", "To-Do", "#F0E57F", "#fbc02d"),
    ("2", "In Progress", "#88C6E2", "#0288d1"),
    ("3", "Completed", "#8DDD90", "#388e3c"),
];

/// Fetches upstream items and replaces the board wholesale.
///
/// Returns the number of distributed items.
pub async fn hydrate<G>(store: &BoardStore, gateway: &G) -> GatewayResult<usize>
where
    G: TodoGateway + ?Sized,
{
    let items = match gateway.list().await {
        Ok(items) => items,
        Err(err) => {
            warn!("event=hydration_failed module=hydration error={err}");
            return Err(err);
        }
    };

    let mut columns: Vec<Column> = DEFAULT_COLUMNS
        .iter()
        .map(|(id, title, color, dark_color)| Column::new(*id, *title, *color, *dark_color))
        .collect();

    let mut rng = rand::rng();
    let count = items.len();
    for item in items {
        let slot = rng.random_range(0..columns.len());
        columns[slot].tasks.push(Task::new(item.id, item.title));
    }

    store.update(move |_board| Board { columns });
    info!("event=hydration_done module=hydration status=ok items={count}");
    Ok(count)
}
