//! Route facade round trips using JSON request bodies.

use super::helpers::{TestApi, api};
use corkboard::{
    api::{
        ApiError, STATUS_CREATED, STATUS_NOT_FOUND, STATUS_OK,
        dto::{BoardDto, ListDto, TaskDto},
    },
    kanban::domain::TaskId,
};
use rstest::rstest;
use serde_json::{Value, json};

fn body<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("request body should deserialize")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_list_task_flow_round_trips_json(api: TestApi) {
    let board: BoardDto = api
        .create_board(body(json!({"title": "Launch"})))
        .await
        .expect("board created")
        .into_body();
    let todo: ListDto = api
        .create_list(body(json!({"title": "Todo", "boardId": board.id})))
        .await
        .expect("list created")
        .into_body();
    let done: ListDto = api
        .create_list(body(json!({"title": "Done", "boardId": board.id})))
        .await
        .expect("list created")
        .into_body();
    let mut task_ids = Vec::new();
    for title in ["Design", "Build", "Test"] {
        let task: TaskDto = api
            .create_task(body(json!({"title": title, "listId": todo.id})))
            .await
            .expect("task created")
            .into_body();
        task_ids.push(task.id);
    }

    let moved = api
        .move_task(body(json!({
            "taskId": task_ids[1],
            "fromListId": todo.id,
            "toListId": done.id,
        })))
        .await
        .expect("move succeeds");
    let reordered = api
        .reorder_lists(board.id, body(json!({"orderedListIds": [done.id, todo.id]})))
        .await
        .expect("reorder succeeds");
    let details = api.get_board(board.id).await.expect("board exists");

    assert_eq!(moved.status(), STATUS_OK);
    assert_eq!(reordered.body().message, "Lists reordered successfully");
    let payload = serde_json::to_value(details.body()).expect("serializable");
    assert_eq!(payload["title"], json!("Launch"));
    assert_eq!(payload["lists"][0]["title"], json!("Done"));
    assert_eq!(payload["lists"][0]["listOrder"], json!(1));
    assert_eq!(payload["lists"][0]["tasks"][0]["title"], json!("Build"));
    assert_eq!(payload["lists"][1]["tasks"][0]["title"], json!("Design"));
    assert_eq!(payload["lists"][1]["tasks"][1]["taskOrder"], json!(2));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn move_response_keys_updated_lists_by_id(api: TestApi) {
    let board: BoardDto = api
        .create_board(body(json!({"title": "Launch"})))
        .await
        .expect("board created")
        .into_body();
    let list: ListDto = api
        .create_list(body(json!({"title": "Todo", "boardId": board.id})))
        .await
        .expect("list created")
        .into_body();
    let first: TaskDto = api
        .create_task(body(json!({"title": "A", "listId": list.id})))
        .await
        .expect("task created")
        .into_body();
    let second: TaskDto = api
        .create_task(body(json!({"title": "B", "listId": list.id})))
        .await
        .expect("task created")
        .into_body();

    let response = api
        .move_task(body(json!({
            "taskId": second.id,
            "fromListId": list.id,
            "toListId": list.id,
            "targetTaskId": first.id,
        })))
        .await
        .expect("move succeeds");
    let payload = serde_json::to_value(response.body()).expect("serializable");

    assert_eq!(payload["message"], json!("Task moved successfully"));
    let updated = payload["updatedLists"][list.id.to_string()]
        .as_array()
        .expect("list entry present");
    let titles: Vec<&Value> = updated.iter().map(|task| &task["title"]).collect();
    assert_eq!(titles, vec![&json!("B"), &json!("A")]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_entities_surface_as_404(api: TestApi) {
    let missing_list = api
        .create_task(body(json!({
            "title": "Orphan",
            "listId": uuid::Uuid::new_v4(),
        })))
        .await;
    let missing_task = api
        .delete_task(TaskId::new())
        .await;

    assert_eq!(
        missing_list.map(|response| response.status()),
        Err(ApiError::new("List not found", STATUS_NOT_FOUND))
    );
    assert_eq!(
        missing_task.map(|response| response.status()),
        Err(ApiError::new("Task not found", STATUS_NOT_FOUND))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn action_log_lists_every_mutation(api: TestApi) {
    let board: BoardDto = api
        .create_board(body(json!({"title": "Launch"})))
        .await
        .expect("board created")
        .into_body();
    api.update_board(board.id, body(json!({"title": "Liftoff"})))
        .await
        .expect("board renamed");
    let created = api
        .create_list(body(json!({"title": "Todo", "boardId": board.id})))
        .await
        .expect("list created");

    let logs = api.action_logs().await.expect("read succeeds").into_body();

    assert_eq!(created.status(), STATUS_CREATED);
    let actions: Vec<&str> = logs.iter().map(|log| log.action.as_str()).collect();
    assert_eq!(
        actions,
        vec![
            "User created the board Launch",
            "User updated the board title to Liftoff",
            "User created the list Todo",
        ]
    );
}
