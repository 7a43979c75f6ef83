//! Key and message handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::flows::auth::LOGOUT_OK;
use crate::flows::posts::{DELETE_OK, DETAIL_DELETE_OK};
use crate::flows::{DeleteOutcome, Notice};
use crate::view::HomeState;

use super::{App, AppMessage, Screen};

impl App {
    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.dialog.is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.answer_dialog(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.answer_dialog(false)
                }
                _ => {}
            }
            return;
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Detail => self.handle_detail_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('r') => {
                self.load_posts();
                self.set_notice(Notice::info("Refreshing..."));
            }
            KeyCode::Char('d') => self.request_delete(),
            KeyCode::Char('e') => self.edit_hint(),
            KeyCode::Char('n') if self.session.is_some() => {
                self.set_notice(Notice::info("Publish with: blogdeck create"))
            }
            KeyCode::Char('x') => self.logout(),
            KeyCode::Char('l') if self.session.is_none() => {
                self.set_notice(Notice::info("Sign in with: blogdeck login --email <email>"))
            }
            KeyCode::Char('s') if self.session.is_none() => self.set_notice(Notice::info(
                "Sign up with: blogdeck signup --name <name> --email <email>",
            )),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                self.back_to_home()
            }
            KeyCode::Char('r') => {
                if let Some(id) = self.detail.as_ref().map(|d| d.id.clone()) {
                    self.load_post(id);
                }
            }
            KeyCode::Char('d') => self.request_delete(),
            KeyCode::Char('e') => self.edit_hint(),
            _ => {}
        }
    }

    fn edit_hint(&mut self) {
        if !self.can_modify_focused() {
            return;
        }
        if let Some(id) = self.focused_post().map(|post| post.id.to_string()) {
            self.set_notice(Notice::info(format!("Edit with: blogdeck edit {}", id)));
        }
    }

    /// Apply the result of a background request.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::SessionLoaded(session) => {
                self.session = session;
            }
            AppMessage::PostsLoaded(result) => {
                let (home, notice) = HomeState::resolve(result);
                self.home = home;
                self.clamp_selection();
                self.notice = notice;
            }
            AppMessage::PostLoaded { id, result } => {
                let Some(detail) = self.detail.as_mut().filter(|d| d.id == id) else {
                    tracing::debug!(post = %id, "Dropping stale post result");
                    return;
                };
                match result {
                    Ok(post) => detail.post = Some(post),
                    Err(err) => {
                        tracing::warn!("Post {} failed to load: {}", id, err.source_error());
                        self.notice = Some(Notice::from(&err));
                    }
                }
            }
            AppMessage::PostDeleted { id, origin, result } => match result {
                Ok(DeleteOutcome::Deleted) => {
                    if let Some(list) = self.home.list_mut() {
                        list.remove(&id);
                    }
                    self.clamp_selection();
                    let on_detail = self.screen == Screen::Detail
                        && self.detail.as_ref().is_some_and(|d| d.id == id);
                    if on_detail {
                        self.back_to_home();
                    }
                    let message = match origin {
                        Screen::Home => DELETE_OK,
                        Screen::Detail => DETAIL_DELETE_OK,
                    };
                    self.notice = Some(Notice::success(message));
                }
                Ok(DeleteOutcome::Declined) => {}
                Err(err) => {
                    tracing::warn!("Delete of {} failed: {}", id, err.source_error());
                    self.notice = Some(Notice::from(&err));
                }
            },
            AppMessage::LoggedOut(result) => match result {
                Ok(()) => {
                    self.session = None;
                    self.notice = Some(Notice::success(LOGOUT_OK));
                }
                Err(err) => self.notice = Some(Notice::from(&err)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::adapters::mock::MockResponse;
    use crate::error::{BlogError, FlowError};
    use crate::flows::PostList;
    use crate::models::Id;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_quits_even_with_dialog() {
        let (mut app, _) = app_with(None);
        app.dialog = Some(super::super::ConfirmDialog {
            post_id: Id::Number(1),
            prompt: "Delete this post?",
            origin: Screen::Home,
        });
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_posts_loaded_failure_shows_empty_state() {
        let (mut app, _) = app_with(None);
        let err = FlowError::new("Failed to load posts", BlogError::NotSignedIn);
        app.handle_message(AppMessage::PostsLoaded(Err(err)));

        assert_eq!(app.home.placeholder(), Some("No posts available."));
        assert_eq!(app.notice.as_ref().unwrap().message, "Failed to load posts");
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_post() {
        let (mut app, http) = app_with(Some(ada()));
        http.set_response("DELETE", "http://api.test/posts/1", MockResponse::status(200));
        app.home = HomeState::Ready(PostList::new(vec![post(1, 1), post(2, 1)]));

        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('y')));
        pump(&mut app).await;

        let ids: Vec<_> = app
            .home
            .list()
            .unwrap()
            .posts()
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(ids, vec![Id::Number(2)]);
        assert_eq!(app.notice.as_ref().unwrap().message, "Post deleted successfully");
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_list() {
        let (mut app, http) = app_with(Some(ada()));
        http.set_response("DELETE", "http://api.test/posts/1", MockResponse::status(500));
        app.home = HomeState::Ready(PostList::new(vec![post(1, 1)]));

        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('y')));
        pump(&mut app).await;

        assert_eq!(app.home.list().unwrap().len(), 1);
        let notice = app.notice.as_ref().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message, "Failed to delete post");
    }

    #[tokio::test]
    async fn test_delete_from_detail_returns_home() {
        let (mut app, http) = app_with(Some(ada()));
        http.set_response(
            "GET",
            "http://api.test/posts/1",
            MockResponse::json(200, serde_json::to_value(post(1, 1)).unwrap()),
        );
        http.set_response("DELETE", "http://api.test/posts/1", MockResponse::status(200));
        app.home = HomeState::Ready(PostList::new(vec![post(1, 1)]));

        app.handle_key(key(KeyCode::Enter));
        pump(&mut app).await;
        app.handle_key(key(KeyCode::Char('d')));
        app.handle_key(key(KeyCode::Char('y')));
        pump(&mut app).await;

        assert_eq!(app.screen, Screen::Home);
        assert!(app.home.list().unwrap().is_empty());
        assert_eq!(app.notice.as_ref().unwrap().message, "Post deleted");
    }

    #[test]
    fn test_stale_post_result_is_ignored() {
        let (mut app, _) = app_with(None);
        app.detail = Some(super::super::DetailState::loading(Id::Number(2)));
        app.handle_message(AppMessage::PostLoaded {
            id: Id::Number(1),
            result: Ok(post(1, 1)),
        });
        assert!(app.detail.as_ref().unwrap().post.is_none());
    }

    #[tokio::test]
    async fn test_logout_key_clears_session() {
        let (mut app, _) = app_with(Some(ada()));
        app.session = Some(ada());

        app.handle_key(key(KeyCode::Char('x')));
        pump(&mut app).await;

        assert!(app.session.is_none());
        assert!(!app.nav_bar().is_signed_in());
    }
}
