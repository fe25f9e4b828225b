//! Board state store.
//!
//! # Responsibility
//! - Hold the single authoritative in-memory `Board` value for the session.
//! - Funnel every mutation through one pure-transform substitution point.
//! - Notify subscribers (view layer) after every change.
//!
//! # Invariants
//! - Transforms receive the *current* board and return a fresh value; the
//!   stored board is never mutated in place.
//! - Updates apply atomically with respect to each other, so asynchronous
//!   completions compose against the latest state instead of a stale
//!   snapshot captured before a suspension.
//! - Subscribers are invoked outside the store lock and may re-enter
//!   `read` safely.

use crate::model::board::Board;
use log::debug;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Handle returned by `subscribe`, used to remove the observer again.
pub type SubscriptionId = u64;

type Subscriber = Arc<dyn Fn(&Board) + Send + Sync>;

struct StoreInner {
    board: Board,
    next_subscription_id: SubscriptionId,
    subscribers: BTreeMap<SubscriptionId, Subscriber>,
}

/// Shared handle to the board state.
///
/// Cloning is cheap and yields a handle to the same underlying board;
/// operation components hold a handle, never their own board copy.
#[derive(Clone)]
pub struct BoardStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    /// Creates a store holding an empty board.
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Creates a store holding a caller-provided initial board.
    pub fn with_board(board: Board) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                board,
                next_subscription_id: 0,
                subscribers: BTreeMap::new(),
            })),
        }
    }

    /// Returns a clone of the current board value.
    pub fn read(&self) -> Board {
        self.lock().board.clone()
    }

    /// Applies a pure transform against the current board.
    ///
    /// # Contract
    /// - `transform` must build a new `Board` from the previous one and must
    ///   not rely on any board value captured before this call.
    /// - Subscribers observe the post-update value exactly once per update.
    pub fn update<F>(&self, transform: F)
    where
        F: FnOnce(&Board) -> Board,
    {
        let (board, subscribers) = {
            let mut inner = self.lock();
            let next = transform(&inner.board);
            inner.board = next;
            debug!(
                "event=board_updated module=store columns={} tasks={}",
                inner.board.columns.len(),
                inner.board.task_count()
            );
            let subscribers: Vec<Subscriber> = inner.subscribers.values().cloned().collect();
            (inner.board.clone(), subscribers)
        };

        // Outside the lock so observers can re-enter the store.
        for subscriber in subscribers {
            subscriber(&board);
        }
    }

    /// Registers a change observer, invoked after every update.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&Board) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = inner.next_subscription_id;
        inner.next_subscription_id += 1;
        inner.subscribers.insert(id, Arc::new(observer));
        id
    }

    /// Removes a previously registered observer.
    ///
    /// Returns `false` when the id was not registered (already removed).
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().subscribers.remove(&id).is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // The stored board is replaced wholesale, never half-written, so a
        // poisoned lock still holds a complete value.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
