use common::model::comment::Comment;

use super::state::QueueMode;
use crate::api::ApiError;

pub enum Msg {
    SetMode(QueueMode),
    Loaded(Vec<Comment>),
    LoadFailed(ApiError),
    Approve(i64),
    Reject(i64),
    /// Status call answered with the updated row.
    Moderated(Comment),
    ActionFailed(i64, ApiError),
    RequestDelete(i64),
    CancelDelete,
    ConfirmDelete,
    Deleted(i64),
    DeleteFailed(i64, ApiError),
}
