use kanban_workspace::{
    Board, BoardStore, Column, ColumnId, DragEvent, DragHandler, DragItem, Task, TaskId, Workspace,
};
use proptest::prelude::*;
use std::sync::Arc;

fn workspace(sizes: &[usize]) -> (Workspace, Vec<Vec<TaskId>>) {
    let mut board = Board::new("Generated".to_string());
    let mut ids = Vec::new();
    for (n, size) in sizes.iter().enumerate() {
        let tasks: Vec<Task> = (0..*size)
            .map(|i| Task::new(format!("task {}-{}", n, i)))
            .collect();
        ids.push(tasks.iter().map(|t| t.id).collect());
        board.push_column(
            Column::new(ColumnId::new(n as i64 + 1), format!("Column {}", n)).with_tasks(tasks),
        );
    }
    (Workspace::new(BoardStore::new(vec![board])), ids)
}

fn column_tasks(ws: &Workspace, index: usize) -> Vec<TaskId> {
    ws.store().boards()[0].columns[index].task_ids()
}

proptest! {
    #[test]
    fn add_column_appends_one_empty_column(sizes in prop::collection::vec(0usize..4, 0..6)) {
        let (mut ws, _) = workspace(&sizes);

        let id = ws.add_column().unwrap();

        let board = &ws.store().boards()[0];
        prop_assert_eq!(board.columns.len(), sizes.len() + 1);
        let last = board.columns.last().unwrap();
        prop_assert_eq!(last.id, id);
        prop_assert!(last.is_empty());
        prop_assert_eq!(&last.title, &format!("New Column {}", sizes.len()));
    }

    #[test]
    fn reorder_preserves_other_tasks_order(len in 2usize..10, a in 0usize..10, b in 0usize..10) {
        let (a, b) = (a % len, b % len);
        prop_assume!(a != b);
        let (mut ws, ids) = workspace(&[len]);
        let column = ColumnId::new(1);

        ws.on_drag_end(&DragEvent::new(
            DragItem::task(ids[0][a], column),
            Some(DragItem::task(ids[0][b], column)),
        ));

        let after = column_tasks(&ws, 0);
        prop_assert_eq!(after[b], ids[0][a]);

        let mut sorted_after = after.clone();
        let mut sorted_before = ids[0].clone();
        sorted_after.sort_by_key(|id| id.to_string());
        sorted_before.sort_by_key(|id| id.to_string());
        prop_assert_eq!(sorted_after, sorted_before);

        let others_before: Vec<TaskId> = ids[0].iter().copied().filter(|id| *id != ids[0][a]).collect();
        let others_after: Vec<TaskId> = after.into_iter().filter(|id| *id != ids[0][a]).collect();
        prop_assert_eq!(others_after, others_before);
    }

    #[test]
    fn cross_column_drop_preserves_total(
        source_len in 1usize..6,
        target_len in 0usize..6,
        pick in 0usize..6,
    ) {
        let pick = pick % source_len;
        let (mut ws, ids) = workspace(&[source_len, target_len]);
        let task = ids[0][pick];

        ws.on_drag_end(&DragEvent::new(
            DragItem::task(task, ColumnId::new(1)),
            Some(DragItem::column(ColumnId::new(2))),
        ));

        let source = column_tasks(&ws, 0);
        let target = column_tasks(&ws, 1);
        prop_assert!(!source.contains(&task));
        prop_assert_eq!(target.last().copied(), Some(task));
        prop_assert_eq!(source.len() + target.len(), source_len + target_len);
        prop_assert_eq!(ws.store().boards()[0].task_count(), source_len + target_len);
    }

    #[test]
    fn drag_over_unknown_columns_keeps_snapshot(len in 1usize..5, unknown in 10i64..100) {
        let (mut ws, ids) = workspace(&[len, 0]);
        let before = ws.store().snapshot();

        ws.on_drag_over(&DragEvent::new(
            DragItem::task(ids[0][0], ColumnId::new(1)),
            Some(DragItem::column(ColumnId::new(unknown))),
        ));
        ws.on_drag_over(&DragEvent::new(
            DragItem::task(ids[0][0], ColumnId::new(unknown)),
            Some(DragItem::column(ColumnId::new(2))),
        ));

        prop_assert!(Arc::ptr_eq(&before, &ws.store().snapshot()));
    }
}
