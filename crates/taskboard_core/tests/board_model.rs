use taskboard_core::{
    mint_column_id, mint_task_id, normalized_title, Board, Column, DragItem, DragKind, Task,
};

fn column(id: &str, title: &str) -> Column {
    Column::new(id, title, "#f2f2f2", "#808080")
}

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert!(board.columns.is_empty());
    assert_eq!(board.task_count(), 0);
}

#[test]
fn column_and_task_lookups_work() {
    let mut board = Board::new();
    let mut todo = column("col-a", "To-Do");
    todo.tasks.push(Task::new("t1", "first"));
    todo.tasks.push(Task::new("t2", "second"));
    board.columns.push(todo);
    board.columns.push(column("col-b", "Done"));

    assert_eq!(board.column_index("col-a"), Some(0));
    assert_eq!(board.column_index("col-b"), Some(1));
    assert_eq!(board.column_index("col-c"), None);

    let found = board
        .task_in_column("t2", "col-a")
        .expect("t2 should be in col-a");
    assert_eq!(found.title, "second");
    assert!(board.task_in_column("t2", "col-b").is_none());
    assert_eq!(board.task_count(), 2);
}

#[test]
fn normalized_title_trims_and_rejects_blank() {
    assert_eq!(normalized_title("  plan sprint "), Some("plan sprint".to_string()));
    assert_eq!(normalized_title(""), None);
    assert_eq!(normalized_title("   "), None);
}

#[test]
fn minted_ids_are_prefixed_and_unique() {
    let task_id = mint_task_id();
    let other_task_id = mint_task_id();
    assert!(task_id.starts_with("task-"));
    assert_ne!(task_id, other_task_id);

    let column_id = mint_column_id();
    assert!(column_id.starts_with("column-"));
}

#[test]
fn column_serialization_uses_expected_wire_fields() {
    let mut col = Column::new("1", "To-Do", "#F0E57F", "#fbc02d");
    col.tasks.push(Task::new("11", "write docs"));

    let json = serde_json::to_value(&col).expect("column should serialize");
    assert_eq!(json["id"], "1");
    assert_eq!(json["title"], "To-Do");
    assert_eq!(json["color"], "#F0E57F");
    assert_eq!(json["darkColor"], "#fbc02d");
    assert_eq!(json["tasks"][0]["id"], "11");

    let decoded: Column = serde_json::from_value(json).expect("column should deserialize");
    assert_eq!(decoded, col);
}

#[test]
fn drag_item_serialization_uses_expected_wire_fields() {
    let item = DragItem {
        id: "t1".to_string(),
        kind: DragKind::Task,
    };
    let json = serde_json::to_value(&item).expect("drag item should serialize");
    assert_eq!(json["id"], "t1");
    assert_eq!(json["type"], "task");
}
