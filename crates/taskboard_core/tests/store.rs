use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use taskboard_core::{Board, BoardStore, Column};

fn column(id: &str, title: &str) -> Column {
    Column::new(id, title, "#f2f2f2", "#808080")
}

#[test]
fn read_returns_a_detached_clone() {
    let store = BoardStore::new();
    let mut snapshot = store.read();
    snapshot.columns.push(column("col-a", "To-Do"));

    assert!(store.read().columns.is_empty());
}

#[test]
fn update_applies_the_transform_against_the_current_board() {
    let store = BoardStore::new();

    store.update(|board| {
        let mut next = board.clone();
        next.columns.push(column("col-a", "To-Do"));
        next
    });
    store.update(|board| {
        let mut next = board.clone();
        next.columns.push(column("col-b", "In Progress"));
        next
    });

    let board = store.read();
    assert_eq!(board.columns.len(), 2);
    assert_eq!(board.columns[0].id, "col-a");
    assert_eq!(board.columns[1].id, "col-b");
}

#[test]
fn stale_snapshots_do_not_clobber_later_updates() {
    let store = BoardStore::new();
    // Captured before the first update; a transform must ignore it.
    let stale = store.read();

    store.update(|board| {
        let mut next = board.clone();
        next.columns.push(column("col-a", "To-Do"));
        next
    });
    store.update(|board| {
        // The transform argument reflects the first update, not `stale`.
        assert_eq!(board.columns.len(), 1);
        assert!(stale.columns.is_empty());
        let mut next = board.clone();
        next.columns.push(column("col-b", "In Progress"));
        next
    });

    assert_eq!(store.read().columns.len(), 2);
}

#[test]
fn subscribers_observe_every_update_exactly_once() {
    let store = BoardStore::new();
    let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |board: &Board| {
        sink.lock().expect("sink lock").push(board.columns.len());
    });

    store.update(|board| {
        let mut next = board.clone();
        next.columns.push(column("col-a", "To-Do"));
        next
    });
    store.update(|board| {
        let mut next = board.clone();
        next.columns.push(column("col-b", "In Progress"));
        next
    });

    assert_eq!(*seen.lock().expect("sink lock"), vec![1, 2]);
}

#[test]
fn subscribers_may_reenter_the_store() {
    let store = BoardStore::new();
    let observed = Arc::new(AtomicUsize::new(0));
    let sink = observed.clone();
    let handle = store.clone();
    store.subscribe(move |_board: &Board| {
        sink.store(handle.read().columns.len(), Ordering::SeqCst);
    });

    store.update(|board| {
        let mut next = board.clone();
        next.columns.push(column("col-a", "To-Do"));
        next
    });

    assert_eq!(observed.load(Ordering::SeqCst), 1);
}

#[test]
fn unsubscribe_stops_notifications() {
    let store = BoardStore::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let sink = calls.clone();
    let id = store.subscribe(move |_board: &Board| {
        sink.fetch_add(1, Ordering::SeqCst);
    });

    store.update(|board| board.clone());
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.update(|board| board.clone());

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
