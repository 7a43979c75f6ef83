//! Navigation methods for the App.

use super::{App, Screen};

impl App {
    /// Move the home selection up.
    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    /// Move the home selection down.
    pub fn move_down(&mut self) {
        let count = self.home.list().map_or(0, |list| list.len());
        if count > 0 && self.selected < count - 1 {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    /// Keep the selection inside the list after it shrinks or reloads.
    pub fn clamp_selection(&mut self) {
        let count = self.home.list().map_or(0, |list| list.len());
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Open the post under the cursor.
    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_post().map(|post| post.id.clone()) {
            self.open_post(id);
        }
    }

    /// Leave the detail screen.
    pub fn back_to_home(&mut self) {
        self.screen = Screen::Home;
        self.detail = None;
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::flows::PostList;
    use crate::view::HomeState;

    #[test]
    fn test_selection_stays_in_bounds() {
        let (mut app, _) = app_with(None);
        app.move_down();
        assert_eq!(app.selected, 0);

        app.home = HomeState::Ready(PostList::new(vec![post(1, 1), post(2, 1)]));
        app.move_down();
        app.move_down();
        assert_eq!(app.selected, 1);
        app.move_up();
        app.move_up();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let (mut app, _) = app_with(None);
        app.home = HomeState::Ready(PostList::new(vec![post(1, 1)]));
        app.selected = 3;
        app.clamp_selection();
        assert_eq!(app.selected, 0);
    }

    #[tokio::test]
    async fn test_open_selected_and_back() {
        let (mut app, _) = app_with(None);
        app.home = HomeState::Ready(PostList::new(vec![post(1, 1), post(2, 1)]));
        app.selected = 1;

        app.open_selected();
        assert_eq!(app.screen, Screen::Detail);
        assert_eq!(app.detail.as_ref().unwrap().id, crate::models::Id::Number(2));

        app.back_to_home();
        assert_eq!(app.screen, Screen::Home);
        assert!(app.detail.is_none());
    }
}
