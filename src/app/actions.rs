//! Background requests started by the browser.
//!
//! Each action clones what it needs, spawns a task, and reports the result
//! as an [`AppMessage`]. Nothing here touches app state after the spawn.

use crate::adapters::Preanswered;
use crate::flows::posts::{DELETE_PROMPT, DETAIL_DELETE_PROMPT};
use crate::models::Id;

use super::{App, AppMessage, ConfirmDialog, DetailState, Screen};

impl App {
    /// Read the stored session.
    pub fn load_session(&self) {
        let store = self.session_store.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let session = match store.load().await {
                Ok(session) => session,
                Err(err) => {
                    tracing::warn!("Could not read session: {}", err);
                    None
                }
            };
            let _ = tx.send(AppMessage::SessionLoaded(session));
        });
    }

    /// Fetch the home list. The current list stays on screen until the new
    /// one arrives.
    pub fn load_posts(&self) {
        let flow = self.posts.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppMessage::PostsLoaded(flow.list().await));
        });
    }

    /// Fetch one post for the detail screen.
    pub fn load_post(&self, id: Id) {
        let flow = self.posts.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = flow.get(&id).await;
            let _ = tx.send(AppMessage::PostLoaded { id, result });
        });
    }

    /// Switch to the detail screen for `id` and start loading it.
    pub fn open_post(&mut self, id: Id) {
        self.detail = Some(DetailState::loading(id.clone()));
        self.screen = Screen::Detail;
        self.load_post(id);
        self.mark_dirty();
    }

    /// Ask for confirmation before deleting the focused post. Only the
    /// author is asked; for anyone else this does nothing.
    pub fn request_delete(&mut self) {
        if !self.can_modify_focused() {
            return;
        }
        let Some(post_id) = self.focused_post().map(|post| post.id.clone()) else {
            return;
        };
        let prompt = match self.screen {
            Screen::Home => DELETE_PROMPT,
            Screen::Detail => DETAIL_DELETE_PROMPT,
        };
        self.dialog = Some(ConfirmDialog {
            post_id,
            prompt,
            origin: self.screen,
        });
        self.mark_dirty();
    }

    /// Answer the open dialog. `false` closes it without any request.
    pub fn answer_dialog(&mut self, agreed: bool) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        self.mark_dirty();
        if !agreed {
            return;
        }

        let flow = self.posts.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = flow.delete(&dialog.post_id, &Preanswered(true)).await;
            let _ = tx.send(AppMessage::PostDeleted {
                id: dialog.post_id,
                origin: dialog.origin,
                result,
            });
        });
    }

    /// Clear the stored session.
    pub fn logout(&self) {
        if self.session.is_none() {
            return;
        }
        let flow = self.auth.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppMessage::LoggedOut(flow.logout().await));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::flows::PostList;
    use crate::view::HomeState;
    use serde_json::json;

    #[tokio::test]
    async fn test_initialize_loads_session_and_posts() {
        let (mut app, http) = app_with(Some(ada()));
        http.set_response(
            "GET",
            "http://api.test/posts",
            MockResponse::json(200, json!([{"id": 1, "title": "One", "userId": 1}])),
        );

        app.initialize();
        pump(&mut app).await;
        pump(&mut app).await;

        assert_eq!(app.session.as_ref().unwrap().user.name, "Ada");
        assert_eq!(app.home.list().unwrap().len(), 1);
        assert_eq!(http.request_count(), 1);
    }

    #[tokio::test]
    async fn test_request_delete_ignored_for_non_owner() {
        let (mut app, _) = app_with(Some(ada()));
        app.home = HomeState::Ready(PostList::new(vec![post(5, 2)]));

        app.request_delete();
        assert!(app.dialog.is_none());
    }

    #[tokio::test]
    async fn test_declined_dialog_sends_nothing() {
        let (mut app, http) = app_with(Some(ada()));
        app.home = HomeState::Ready(PostList::new(vec![post(5, 1)]));

        app.request_delete();
        let dialog = app.dialog.clone().unwrap();
        assert_eq!(dialog.prompt, "Delete this post?");
        assert_eq!(dialog.origin, Screen::Home);

        app.answer_dialog(false);
        assert!(app.dialog.is_none());
        tokio::task::yield_now().await;
        assert_eq!(http.request_count(), 0);
        assert_eq!(app.home.list().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_detail_delete_uses_detail_prompt() {
        let (mut app, http) = app_with(Some(ada()));
        http.set_response(
            "GET",
            "http://api.test/posts/5",
            MockResponse::json(200, serde_json::to_value(post(5, 1)).unwrap()),
        );

        app.open_post(Id::Number(5));
        pump(&mut app).await;
        app.request_delete();
        assert_eq!(app.dialog.as_ref().unwrap().prompt, "Are you sure?");
    }

    #[tokio::test]
    async fn test_logout_without_session_is_noop() {
        let (mut app, _) = app_with(None);
        app.logout();
        tokio::task::yield_now().await;
        assert!(app.message_rx.as_mut().unwrap().try_recv().is_err());
    }
}
