//! Board domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core board logic.
//! - Keep one column-owned shape for tasks across all mutation paths.
//!
//! # Invariants
//! - Every task is owned by exactly one column at any time.
//! - Column and task ids are unique across the whole board.

pub mod board;
