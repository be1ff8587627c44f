//! Diesel schema for kanban persistence.

diesel::table! {
    /// Boards.
    boards (id) {
        /// Board identifier.
        id -> Uuid,
        /// Board title.
        title -> Text,
        /// Insertion sequence; boards list in creation order.
        created_seq -> Int8,
    }
}

diesel::table! {
    /// Lists owned by boards.
    lists (id) {
        /// List identifier.
        id -> Uuid,
        /// Owning board; rows cascade on board deletion.
        board_id -> Uuid,
        /// List title.
        title -> Text,
        /// One-based order within the board.
        list_order -> Int4,
    }
}

diesel::table! {
    /// Tasks owned by lists.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning list; rows cascade on list deletion.
        list_id -> Uuid,
        /// Task title.
        title -> Text,
        /// Optional description.
        description -> Nullable<Text>,
        /// One-based order within the list.
        task_order -> Int4,
    }
}

diesel::table! {
    /// Append-only user action log.
    user_action_logs (id) {
        /// Entry identifier.
        id -> Uuid,
        /// Human-readable action sentence.
        action -> Text,
        /// When the action was recorded.
        created_at -> Timestamptz,
    }
}
