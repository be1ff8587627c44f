//! Task moves and audit atomicity against `PostgreSQL`.

use crate::postgres::helpers::{BoxError, PgKanban, layout, numbered, pg_kanban};
use corkboard::kanban::{
    domain::{Task, TaskId},
    services::{KanbanError, MoveTaskRequest},
};
use rstest::rstest;

#[rstest]
fn move_before_target_renumbers_both_lists(pg_kanban: PgKanban) -> Result<(), BoxError> {
    let kanban = &pg_kanban;
    kanban.run(async {
        let (_, lists) = kanban.board_with_lists(&["Todo", "Done"]).await?;
        let source = kanban.fill(&lists[0], &["A", "B", "C"]).await?;
        let destination = kanban.fill(&lists[1], &["X", "Y"]).await?;

        let outcome = kanban
            .tasks
            .move_task(
                MoveTaskRequest::new(source[0].id(), lists[0].id(), lists[1].id())
                    .before(destination[1].id()),
            )
            .await?;

        assert_eq!(layout(outcome.source()), numbered(&["B", "C"]));
        assert_eq!(layout(outcome.destination()), numbered(&["X", "A", "Y"]));
        let stored = kanban.tasks.tasks_for_list(lists[1].id()).await?;
        assert_eq!(stored, outcome.destination());
        assert_eq!(
            kanban.action_texts().await?.last().map(String::as_str),
            Some("User moved the task A to the list Done")
        );
        Ok(())
    })
}

#[rstest]
fn move_within_list_reinserts_before_target(pg_kanban: PgKanban) -> Result<(), BoxError> {
    let kanban = &pg_kanban;
    kanban.run(async {
        let (_, lists) = kanban.board_with_lists(&["Todo"]).await?;
        let tasks = kanban.fill(&lists[0], &["A", "B", "C"]).await?;

        let outcome = kanban
            .tasks
            .move_task(
                MoveTaskRequest::new(tasks[2].id(), lists[0].id(), lists[0].id())
                    .before(tasks[0].id()),
            )
            .await?;

        assert_eq!(outcome.updated_lists().len(), 1);
        let stored = kanban.tasks.tasks_for_list(lists[0].id()).await?;
        assert_eq!(layout(&stored), numbered(&["C", "A", "B"]));
        Ok(())
    })
}

#[rstest]
fn moving_missing_task_reports_not_found(pg_kanban: PgKanban) -> Result<(), BoxError> {
    let kanban = &pg_kanban;
    kanban.run(async {
        let (_, lists) = kanban.board_with_lists(&["Todo", "Done"]).await?;
        kanban.fill(&lists[0], &["A"]).await?;
        let missing = TaskId::new();

        let result = kanban
            .tasks
            .move_task(MoveTaskRequest::new(missing, lists[0].id(), lists[1].id()))
            .await;

        assert!(matches!(result, Err(KanbanError::TaskNotFound(id)) if id == missing));
        Ok(())
    })
}

#[rstest]
fn rejected_audit_row_rolls_back_move(pg_kanban: PgKanban) -> Result<(), BoxError> {
    let kanban = &pg_kanban;
    kanban.run(async {
        let (_, lists) = kanban.board_with_lists(&["Todo", "Done"]).await?;
        let tasks = kanban.fill(&lists[0], &["A", "B", "C"]).await?;
        kanban.execute_sql(
            "ALTER TABLE user_action_logs \
             ADD CONSTRAINT no_moves CHECK (action NOT LIKE 'User moved%')",
        )?;
        let log_before = kanban.action_texts().await?;

        let result = kanban
            .tasks
            .move_task(MoveTaskRequest::new(
                tasks[1].id(),
                lists[0].id(),
                lists[1].id(),
            ))
            .await;

        assert!(matches!(result, Err(KanbanError::Store(_))));
        let source = kanban.tasks.tasks_for_list(lists[0].id()).await?;
        assert_eq!(layout(&source), numbered(&["A", "B", "C"]));
        assert!(kanban.tasks.tasks_for_list(lists[1].id()).await?.is_empty());
        assert_eq!(kanban.action_texts().await?, log_before);
        Ok(())
    })
}

#[rstest]
fn alternating_moves_keep_lists_dense(pg_kanban: PgKanban) -> Result<(), BoxError> {
    let kanban = &pg_kanban;
    kanban.run(async {
        let (_, lists) = kanban.board_with_lists(&["Todo", "Done"]).await?;
        let tasks = kanban
            .fill(&lists[0], &["A", "B", "C", "D", "E", "F"])
            .await?;
        let (todo, done) = (lists[0].id(), lists[1].id());

        for (step, task) in tasks.iter().enumerate() {
            let target = kanban
                .tasks
                .tasks_for_list(done)
                .await?
                .first()
                .filter(|_| !step.is_multiple_of(2))
                .map(Task::id);
            kanban
                .tasks
                .move_task(MoveTaskRequest::new(task.id(), todo, done).with_target(target))
                .await?;
        }

        assert!(kanban.tasks.tasks_for_list(todo).await?.is_empty());
        let moved = kanban.tasks.tasks_for_list(done).await?;
        assert_eq!(layout(&moved), numbered(&["F", "D", "B", "A", "C", "E"]));
        Ok(())
    })
}
