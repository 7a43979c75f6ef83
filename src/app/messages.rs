//! AppMessage enum for async results delivered to the event loop.

use crate::error::FlowResult;
use crate::flows::{DeleteOutcome, PostList};
use crate::models::{Id, Post};
use crate::session::Session;

use super::Screen;

/// Completion of a background request.
#[derive(Debug)]
pub enum AppMessage {
    /// The session store was read.
    SessionLoaded(Option<Session>),
    /// `GET /posts` finished.
    PostsLoaded(FlowResult<PostList>),
    /// `GET /posts/:id` finished.
    PostLoaded { id: Id, result: FlowResult<Post> },
    /// `DELETE /posts/:id` finished.
    PostDeleted {
        id: Id,
        origin: Screen,
        result: FlowResult<DeleteOutcome>,
    },
    /// The session was cleared.
    LoggedOut(FlowResult<()>),
}
