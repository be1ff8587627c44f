//! Order values written through `PostgreSQL` transactions.

use crate::postgres::helpers::{BoxError, PgKanban, layout, numbered, pg_kanban};
use rstest::rstest;

#[rstest]
fn appended_tasks_number_from_one(pg_kanban: PgKanban) -> Result<(), BoxError> {
    let kanban = &pg_kanban;
    kanban.run(async {
        let (_, lists) = kanban.board_with_lists(&["Todo"]).await?;

        let tasks = kanban.fill(&lists[0], &["A", "B", "C"]).await?;

        assert_eq!(layout(&tasks), numbered(&["A", "B", "C"]));
        Ok(())
    })
}

#[rstest]
fn reorder_tasks_writes_requested_sequence(pg_kanban: PgKanban) -> Result<(), BoxError> {
    let kanban = &pg_kanban;
    kanban.run(async {
        let (_, lists) = kanban.board_with_lists(&["Todo"]).await?;
        let tasks = kanban.fill(&lists[0], &["A", "B", "C"]).await?;

        let outcome = kanban
            .tasks
            .reorder_tasks(lists[0].id(), vec![tasks[2].id(), tasks[0].id(), tasks[1].id()])
            .await?;

        assert_eq!(outcome.written(), 3);
        let reordered = kanban.tasks.tasks_for_list(lists[0].id()).await?;
        assert_eq!(layout(&reordered), numbered(&["C", "A", "B"]));
        Ok(())
    })
}

#[rstest]
fn partial_reorder_keeps_unlisted_values_and_skips_foreign_ids(pg_kanban: PgKanban) -> Result<(), BoxError> {
    let kanban = &pg_kanban;
    kanban.run(async {
        let (_, lists) = kanban.board_with_lists(&["Todo", "Done"]).await?;
        let tasks = kanban.fill(&lists[0], &["A", "B", "C"]).await?;
        let foreign = kanban.fill(&lists[1], &["X"]).await?;

        let outcome = kanban
            .tasks
            .reorder_tasks(lists[0].id(), vec![foreign[0].id(), tasks[2].id()])
            .await?;

        assert_eq!((outcome.written(), outcome.skipped()), (1, 1));
        let reordered = kanban.tasks.tasks_for_list(lists[0].id()).await?;
        let values: Vec<(&str, u32)> = reordered
            .iter()
            .map(|task| (task.title(), task.position().value()))
            .collect();
        assert!(values.contains(&("C", 1)));
        assert!(values.contains(&("A", 1)));
        assert!(values.contains(&("B", 2)));
        let untouched = kanban.tasks.tasks_for_list(lists[1].id()).await?;
        assert_eq!(layout(&untouched), numbered(&["X"]));
        Ok(())
    })
}

#[rstest]
fn equal_order_values_read_back_by_identifier(pg_kanban: PgKanban) -> Result<(), BoxError> {
    let kanban = &pg_kanban;
    kanban.run(async {
        let (_, lists) = kanban.board_with_lists(&["Todo"]).await?;
        let tasks = kanban.fill(&lists[0], &["A", "B"]).await?;
        kanban
            .tasks
            .reorder_tasks(lists[0].id(), vec![tasks[1].id()])
            .await?;

        let first_read = kanban.tasks.tasks_for_list(lists[0].id()).await?;
        let second_read = kanban.tasks.tasks_for_list(lists[0].id()).await?;

        assert_eq!(first_read, second_read);
        let mut by_id = first_read.clone();
        by_id.sort_by_key(|task| task.id().into_inner());
        assert_eq!(first_read, by_id);
        Ok(())
    })
}

#[rstest]
fn reorder_lists_is_scoped_to_board(pg_kanban: PgKanban) -> Result<(), BoxError> {
    let kanban = &pg_kanban;
    kanban.run(async {
        let (board, lists) = kanban.board_with_lists(&["A", "B"]).await?;
        let (other_board, other_lists) = kanban.board_with_lists(&["Z"]).await?;

        kanban
            .lists
            .reorder_lists(
                board.id(),
                vec![lists[1].id(), other_lists[0].id(), lists[0].id()],
            )
            .await?;

        let titles: Vec<(String, u32)> = kanban
            .lists
            .lists_for_board(board.id())
            .await?
            .iter()
            .map(|view| (view.list().title().to_owned(), view.list().position().value()))
            .collect();
        assert_eq!(titles, numbered(&["B", "A"]));
        let other = kanban.lists.lists_for_board(other_board.id()).await?;
        assert_eq!(other[0].list().position().value(), 1);
        Ok(())
    })
}
