use std::sync::Arc;
use taskboard_core::{
    Board, BoardStore, Column, DragCoordinator, DragKind, InMemoryTodoGateway, RecordingNotifier,
    Task, TaskOps,
};

fn column(id: &str, title: &str) -> Column {
    Column::new(id, title, "#f2f2f2", "#808080")
}

fn fixture() -> (BoardStore, TaskOps<InMemoryTodoGateway, RecordingNotifier>) {
    let mut board = Board::new();
    let mut first = column("col-a", "To-Do");
    first.tasks.push(Task::new("t1", "one"));
    let mut second = column("col-b", "In Progress");
    second.tasks.push(Task::new("t2", "two"));
    board.columns.push(first);
    board.columns.push(second);

    let store = BoardStore::with_board(board);
    let tasks = TaskOps::new(
        store.clone(),
        Arc::new(InMemoryTodoGateway::new()),
        Arc::new(RecordingNotifier::new()),
    );
    (store, tasks)
}

#[test]
fn drop_on_other_column_moves_the_task_and_clears_state() {
    let (store, tasks) = fixture();
    let dnd = DragCoordinator::new();

    let payload = dnd.start_task_drag("t1", "col-a");
    let dragging = dnd.dragging().expect("drag state should be recorded");
    assert_eq!(dragging.id, "t1");
    assert_eq!(dragging.kind, DragKind::Task);

    dnd.drop_on_column(payload, "col-b", &tasks);

    assert!(dnd.dragging().is_none());
    let board = store.read();
    assert!(!board
        .column("col-a")
        .expect("col-a should exist")
        .has_task("t1"));
    let destination = board.column("col-b").expect("col-b should exist");
    assert_eq!(
        destination.tasks.last().expect("destination not empty").id,
        "t1"
    );
}

#[test]
fn drop_on_source_column_performs_no_mutation_but_clears_state() {
    let (store, tasks) = fixture();
    let dnd = DragCoordinator::new();
    let before = store.read();

    let payload = dnd.start_task_drag("t1", "col-a");
    dnd.drop_on_column(payload, "col-a", &tasks);

    assert!(dnd.dragging().is_none());
    assert_eq!(store.read(), before);
}

#[test]
fn cancel_clears_state_without_mutation() {
    let (store, _tasks) = fixture();
    let dnd = DragCoordinator::new();
    let before = store.read();

    let _payload = dnd.start_task_drag("t1", "col-a");
    dnd.cancel();

    assert!(dnd.dragging().is_none());
    assert_eq!(store.read(), before);
}

#[test]
fn next_gesture_never_observes_previous_state() {
    let (store, tasks) = fixture();
    let dnd = DragCoordinator::new();

    let first = dnd.start_task_drag("t1", "col-a");
    dnd.cancel();
    assert!(dnd.dragging().is_none());

    // A fresh gesture carries its own payload; the cancelled one is inert.
    let second = dnd.start_task_drag("t2", "col-b");
    assert_ne!(first, second);
    dnd.drop_on_column(second, "col-a", &tasks);

    assert!(dnd.dragging().is_none());
    let board = store.read();
    assert!(board
        .column("col-a")
        .expect("col-a should exist")
        .has_task("t2"));
}
