//! Post listing, reading and mutation.

use crate::api::BlogApi;
use crate::error::{BlogError, FlowError, FlowResult, ResultExt};
use crate::models::{client_date, Id, Post, PostFields, PostPatch, PostPayload, User};
use crate::traits::Confirm;

pub const LOAD_POSTS_FAILED: &str = "Failed to load posts";
pub const LOAD_POST_FAILED: &str = "Failed to load post";
pub const NO_POSTS: &str = "No posts available.";
pub const PUBLISH_OK: &str = "Post published";
pub const PUBLISH_FAILED: &str = "Error publishing post";
pub const UPDATE_OK: &str = "Post updated successfully";
pub const UPDATE_FAILED: &str = "Error updating post";
pub const DELETE_PROMPT: &str = "Delete this post?";
pub const DELETE_OK: &str = "Post deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete post";
/// Prompt and notice used when deleting from the detail view.
pub const DETAIL_DELETE_PROMPT: &str = "Are you sure?";
pub const DETAIL_DELETE_OK: &str = "Post deleted";

/// Result of a delete request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server accepted the delete.
    Deleted,
    /// The user declined the confirmation; nothing was sent.
    Declined,
}

/// Posts currently on screen, in server order.
///
/// Deletes edit this list in place instead of fetching again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostList {
    posts: Vec<Post>,
}

impl PostList {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Post> {
        self.posts.get(index)
    }

    /// Drop the post with `id`. Returns whether one was removed.
    pub fn remove(&mut self, id: &Id) -> bool {
        let before = self.posts.len();
        self.posts.retain(|post| &post.id != id);
        self.posts.len() != before
    }
}

/// Post CRUD flows.
///
/// Mutations stamp the payload with the signed-in user and today's date as
/// the client sees it. A failure never changes local state.
#[derive(Clone)]
pub struct PostFlow {
    api: BlogApi,
    today: fn() -> String,
}

impl PostFlow {
    pub fn new(api: BlogApi) -> Self {
        Self {
            api,
            today: client_date,
        }
    }

    /// Replace the date stamp source.
    pub fn with_date_source(mut self, today: fn() -> String) -> Self {
        self.today = today;
        self
    }

    pub async fn list(&self) -> FlowResult<PostList> {
        let posts = self.api.list_posts().await.or_notice(LOAD_POSTS_FAILED)?;
        tracing::debug!("Loaded {} posts", posts.len());
        Ok(PostList::new(posts))
    }

    pub async fn get(&self, id: &Id) -> FlowResult<Post> {
        self.api.get_post(id).await.or_notice(LOAD_POST_FAILED)
    }

    /// Validate and publish a new post.
    pub async fn create(&self, fields: PostFields) -> FlowResult<Post> {
        let payload = self.payload(fields).await?;
        let post = self
            .api
            .create_post(&payload)
            .await
            .or_notice(PUBLISH_FAILED)?;
        tracing::info!(post = %post.id, "Published post");
        Ok(post)
    }

    /// Validate and replace an existing post.
    pub async fn update(&self, id: &Id, fields: PostFields) -> FlowResult<Post> {
        let payload = self.payload(fields).await?;
        let post = self
            .api
            .update_post(id, &payload)
            .await
            .or_notice(UPDATE_FAILED)?;
        tracing::info!(post = %id, "Updated post");
        Ok(post)
    }

    /// Load the post, overlay `patch`, and send the result as a full
    /// replace.
    pub async fn edit(&self, id: &Id, patch: PostPatch) -> FlowResult<Post> {
        let current = self.get(id).await?;
        self.update(id, current.fields().apply(patch)).await
    }

    /// Delete after the user agrees to [`DELETE_PROMPT`].
    pub async fn delete(&self, id: &Id, confirm: &dyn Confirm) -> FlowResult<DeleteOutcome> {
        if !confirm.confirm(DELETE_PROMPT) {
            tracing::debug!(post = %id, "Delete declined");
            return Ok(DeleteOutcome::Declined);
        }
        self.api.delete_post(id).await.or_notice(DELETE_FAILED)?;
        tracing::info!(post = %id, "Deleted post");
        Ok(DeleteOutcome::Deleted)
    }

    /// [`PostFlow::delete`], then drop the post from `list` on success.
    pub async fn delete_from(
        &self,
        list: &mut PostList,
        id: &Id,
        confirm: &dyn Confirm,
    ) -> FlowResult<DeleteOutcome> {
        let outcome = self.delete(id, confirm).await?;
        if outcome == DeleteOutcome::Deleted {
            list.remove(id);
        }
        Ok(outcome)
    }

    async fn payload(&self, fields: PostFields) -> FlowResult<PostPayload> {
        fields
            .validate()
            .map_err(|err| FlowError::local(err.into()))?;
        let user = self.signed_in_user().await?;
        Ok(PostPayload::enrich(fields, &user, (self.today)()))
    }

    async fn signed_in_user(&self) -> FlowResult<User> {
        self.api
            .session()
            .user()
            .await
            .ok_or_else(|| FlowError::local(BlogError::NotSignedIn))
    }
}
