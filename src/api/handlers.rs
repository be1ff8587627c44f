//! Route handlers of the kanban HTTP boundary.

use super::{
    dto::{
        ActionLogDto, BoardDetailsDto, BoardDto, BoardTitleRequest, CreateListRequest,
        CreateTaskBody, ListDto, ListWithTasksDto, MessageResponse, MoveTaskBody,
        MoveTaskResponse, ReorderListsRequest, ReorderTasksRequest, TaskDto, UpdateListRequest,
        UpdateTaskBody,
    },
    error::ApiResult,
    STATUS_CREATED, STATUS_NO_CONTENT, STATUS_OK,
};
use crate::kanban::{
    domain::{BoardId, ListId, TaskId},
    ports::KanbanStore,
    services::{
        ActionLogService, BoardService, CreateTaskRequest, ListService, MoveTaskRequest,
        TaskService,
    },
};
use mockable::Clock;
use std::sync::Arc;

/// Successful route result: a status code and a JSON-serializable body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse<T> {
    status: u16,
    body: T,
}

impl<T> ApiResponse<T> {
    const fn ok(body: T) -> Self {
        Self {
            status: STATUS_OK,
            body,
        }
    }

    const fn created(body: T) -> Self {
        Self {
            status: STATUS_CREATED,
            body,
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the response body.
    #[must_use]
    pub const fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response and returns its body.
    #[must_use]
    pub fn into_body(self) -> T {
        self.body
    }
}

impl ApiResponse<()> {
    const fn no_content() -> Self {
        Self {
            status: STATUS_NO_CONTENT,
            body: (),
        }
    }
}

fn collect<T, D: From<T>>(items: Vec<T>) -> Vec<D> {
    items.into_iter().map(D::from).collect()
}

/// Facade exposing one method per REST route.
pub struct KanbanApi<S, C>
where
    S: KanbanStore,
    C: Clock + Send + Sync,
{
    boards: BoardService<S, C>,
    lists: ListService<S, C>,
    tasks: TaskService<S, C>,
    logs: ActionLogService<S, C>,
}

impl<S, C> KanbanApi<S, C>
where
    S: KanbanStore,
    C: Clock + Send + Sync + 'static,
{
    /// Wires every service to one store and clock.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            boards: BoardService::new(Arc::clone(&store), Arc::clone(&clock)),
            lists: ListService::new(Arc::clone(&store), Arc::clone(&clock)),
            tasks: TaskService::new(Arc::clone(&store), Arc::clone(&clock)),
            logs: ActionLogService::new(store, clock),
        }
    }

    /// `GET /boards`
    ///
    /// # Errors
    ///
    /// Returns a 500 [`super::ApiError`] when the store fails.
    pub async fn list_boards(&self) -> ApiResult<ApiResponse<Vec<BoardDto>>> {
        let boards = self.boards.list_boards().await?;
        Ok(ApiResponse::ok(collect(boards)))
    }

    /// `GET /boards/:id`
    ///
    /// # Errors
    ///
    /// Returns a 404 [`super::ApiError`] for an unknown board.
    pub async fn get_board(&self, id: BoardId) -> ApiResult<ApiResponse<BoardDetailsDto>> {
        let details = self.boards.get_board(id).await?;
        Ok(ApiResponse::ok(details.into()))
    }

    /// `POST /boards`
    ///
    /// # Errors
    ///
    /// Returns a 500 [`super::ApiError`] when the store fails.
    pub async fn create_board(
        &self,
        body: BoardTitleRequest,
    ) -> ApiResult<ApiResponse<BoardDto>> {
        let board = self.boards.create_board(body.title).await?;
        Ok(ApiResponse::created(board.into()))
    }

    /// `PUT /boards/:id`
    ///
    /// # Errors
    ///
    /// Returns a 404 [`super::ApiError`] for an unknown board.
    pub async fn update_board(
        &self,
        id: BoardId,
        body: BoardTitleRequest,
    ) -> ApiResult<ApiResponse<BoardDto>> {
        let board = self.boards.update_board(id, body.title).await?;
        Ok(ApiResponse::ok(board.into()))
    }

    /// `DELETE /boards/:id`
    ///
    /// # Errors
    ///
    /// Returns a 404 [`super::ApiError`] for an unknown board.
    pub async fn delete_board(&self, id: BoardId) -> ApiResult<ApiResponse<()>> {
        self.boards.delete_board(id).await?;
        Ok(ApiResponse::no_content())
    }

    /// `GET /lists/:boardId`
    ///
    /// # Errors
    ///
    /// Returns a 500 [`super::ApiError`] when the store fails.
    pub async fn lists_for_board(
        &self,
        board_id: BoardId,
    ) -> ApiResult<ApiResponse<Vec<ListWithTasksDto>>> {
        let lists = self.lists.lists_for_board(board_id).await?;
        Ok(ApiResponse::ok(collect(lists)))
    }

    /// `POST /lists`
    ///
    /// # Errors
    ///
    /// Returns a 404 [`super::ApiError`] for an unknown board.
    pub async fn create_list(&self, body: CreateListRequest) -> ApiResult<ApiResponse<ListDto>> {
        let list = self.lists.create_list(body.board_id, body.title).await?;
        Ok(ApiResponse::created(list.into()))
    }

    /// `PUT /lists/:id`
    ///
    /// # Errors
    ///
    /// Returns a 404 [`super::ApiError`] for an unknown list.
    pub async fn update_list(
        &self,
        id: ListId,
        body: UpdateListRequest,
    ) -> ApiResult<ApiResponse<ListDto>> {
        let list = self.lists.update_list(id, body.title).await?;
        Ok(ApiResponse::ok(list.into()))
    }

    /// `DELETE /lists/:id`
    ///
    /// # Errors
    ///
    /// Returns a 404 [`super::ApiError`] for an unknown list.
    pub async fn delete_list(&self, id: ListId) -> ApiResult<ApiResponse<()>> {
        self.lists.delete_list(id).await?;
        Ok(ApiResponse::no_content())
    }

    /// `POST /lists/:boardId/reorder`
    ///
    /// # Errors
    ///
    /// Returns a 500 [`super::ApiError`] when the store fails.
    pub async fn reorder_lists(
        &self,
        board_id: BoardId,
        body: ReorderListsRequest,
    ) -> ApiResult<ApiResponse<MessageResponse>> {
        self.lists
            .reorder_lists(board_id, body.ordered_list_ids)
            .await?;
        Ok(ApiResponse::ok(MessageResponse::new(
            "Lists reordered successfully",
        )))
    }

    /// `GET /tasks/:listId`
    ///
    /// # Errors
    ///
    /// Returns a 500 [`super::ApiError`] when the store fails.
    pub async fn tasks_for_list(&self, list_id: ListId) -> ApiResult<ApiResponse<Vec<TaskDto>>> {
        let tasks = self.tasks.tasks_for_list(list_id).await?;
        Ok(ApiResponse::ok(collect(tasks)))
    }

    /// `POST /tasks`
    ///
    /// # Errors
    ///
    /// Returns a 404 [`super::ApiError`] for an unknown list.
    pub async fn create_task(&self, body: CreateTaskBody) -> ApiResult<ApiResponse<TaskDto>> {
        let CreateTaskBody {
            title,
            description,
            list_id,
        } = body;
        let mut request = CreateTaskRequest::new(list_id, title);
        if let Some(text) = description {
            request = request.with_description(text);
        }
        let task = self.tasks.create_task(request).await?;
        Ok(ApiResponse::created(task.into()))
    }

    /// `PUT /tasks/:id`
    ///
    /// # Errors
    ///
    /// Returns a 404 [`super::ApiError`] for an unknown task.
    pub async fn update_task(
        &self,
        id: TaskId,
        body: UpdateTaskBody,
    ) -> ApiResult<ApiResponse<TaskDto>> {
        let task = self
            .tasks
            .update_task(id, body.title, body.description)
            .await?;
        Ok(ApiResponse::ok(task.into()))
    }

    /// `DELETE /tasks/:id`
    ///
    /// # Errors
    ///
    /// Returns a 404 [`super::ApiError`] for an unknown task.
    pub async fn delete_task(&self, id: TaskId) -> ApiResult<ApiResponse<()>> {
        self.tasks.delete_task(id).await?;
        Ok(ApiResponse::no_content())
    }

    /// `PUT /tasks/reorder/:listId`
    ///
    /// # Errors
    ///
    /// Returns a 500 [`super::ApiError`] when the store fails.
    pub async fn reorder_tasks(
        &self,
        list_id: ListId,
        body: ReorderTasksRequest,
    ) -> ApiResult<ApiResponse<MessageResponse>> {
        self.tasks
            .reorder_tasks(list_id, body.ordered_task_ids)
            .await?;
        Ok(ApiResponse::ok(MessageResponse::new(
            "Tasks reordered successfully",
        )))
    }

    /// `PUT /tasks/move`
    ///
    /// # Errors
    ///
    /// Returns a 404 [`super::ApiError`] for an unknown task or destination
    /// list.
    pub async fn move_task(&self, body: MoveTaskBody) -> ApiResult<ApiResponse<MoveTaskResponse>> {
        let request = MoveTaskRequest::new(body.task_id, body.from_list_id, body.to_list_id)
            .with_target(body.target_task_id);
        let outcome = self.tasks.move_task(request).await?;
        Ok(ApiResponse::ok(MoveTaskResponse::new(
            "Task moved successfully",
            &outcome,
        )))
    }

    /// `GET /user-action-logs`
    ///
    /// # Errors
    ///
    /// Returns a 500 [`super::ApiError`] when the store fails.
    pub async fn action_logs(&self) -> ApiResult<ApiResponse<Vec<ActionLogDto>>> {
        let entries = self.logs.entries().await?;
        Ok(ApiResponse::ok(collect(entries)))
    }
}
