//! UI rendering for the browser.
//!
//! The screen is split into the navigation bar, the body (home list or post
//! detail), a notice line and a key hint line. The delete confirmation is
//! drawn as an overlay on top of everything else.

mod detail;
mod dialog;
mod home;
mod nav;
mod theme;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use crate::flows::NoticeKind;
use crate::view::PostAction;

use theme::{COLOR_DIM, COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS};

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &App) {
    let [nav_area, body, notice_area, hint_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    nav::render_nav(frame, nav_area, &app.nav_bar());

    let body = inset(body);
    match app.screen {
        Screen::Home => home::render_home(frame, body, app),
        Screen::Detail => detail::render_detail(frame, body, app),
    }

    render_notice(frame, notice_area, app);
    render_hints(frame, hint_area, app);

    if let Some(dialog) = &app.dialog {
        dialog::render_dialog(frame, dialog);
    }
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    }
}

/// `[e] Edit  [d] Delete` for the actions the viewer is offered.
fn action_spans(actions: &[PostAction]) -> Vec<Span<'static>> {
    actions
        .iter()
        .map(|action| {
            let (key, color) = match action {
                PostAction::Edit => ('e', COLOR_INFO),
                PostAction::Delete => ('d', COLOR_ERROR),
            };
            Span::styled(
                format!("  [{}] {}", key, action.label()),
                Style::default().fg(color),
            )
        })
        .collect()
}

fn render_notice(frame: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Success => COLOR_SUCCESS,
        NoticeKind::Error => COLOR_ERROR,
        NoticeKind::Info => COLOR_INFO,
    };
    let line = Line::from(Span::styled(
        format!(" {}", notice.message),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.screen {
        Screen::Home => " ↑/↓ select  Enter open  r refresh  q quit",
        Screen::Detail => " Esc back  r reload  q quit",
    };
    let line = Line::from(Span::styled(hints, Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{ConfirmDialog, DetailState};
    use crate::flows::{Notice, PostList};
    use crate::models::{Id, Post, User};
    use crate::session::Session;
    use crate::view::HomeState;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn create_test_app(session: Option<Session>) -> App {
        use crate::adapters::mock::{InMemorySession, MockHttpClient};
        use crate::api::BlogApi;

        let api = BlogApi::new(
            "http://api.test",
            Arc::new(MockHttpClient::new()),
            Arc::new(InMemorySession::new()),
        );
        let mut app = App::new(api);
        app.session = session;
        app
    }

    fn post(id: u64, user_id: u64, description: &str) -> Post {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Post {}", id),
            "description": description,
            "imageUrl": "https://example.com/i.png",
            "category": "General",
            "author": "Ada",
            "date": "1/2/2025",
            "userId": user_id
        }))
        .unwrap()
    }

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_signed_out_nav_and_loading() {
        let screen = draw(&create_test_app(None));
        assert!(screen.contains("Blog System"));
        assert!(screen.contains("Login"));
        assert!(screen.contains("Signup"));
        assert!(screen.contains("Loading..."));
    }

    #[test]
    fn test_signed_in_nav_shows_name() {
        let session = Session::new("t", User::new(1u64, "Ada", "a@x.io"));
        let screen = draw(&create_test_app(Some(session)));
        assert!(screen.contains("Ada"));
        assert!(screen.contains("New Post"));
        assert!(screen.contains("Logout"));
        assert!(!screen.contains("Signup"));
    }

    #[test]
    fn test_empty_list_placeholder() {
        let mut app = create_test_app(None);
        app.home = HomeState::Ready(PostList::default());
        assert!(draw(&app).contains("No posts available."));
    }

    #[test]
    fn test_cards_show_excerpt_and_owner_actions() {
        let session = Session::new("t", User::new(1u64, "Ada", "a@x.io"));
        let mut app = create_test_app(Some(session));
        let long = "x".repeat(60);
        app.home = HomeState::Ready(PostList::new(vec![post(1, 1, &long), post(2, 9, "short")]));

        let screen = draw(&app);
        assert!(screen.contains(&format!("{}...", "x".repeat(51))));
        assert!(!screen.contains(&"x".repeat(52)));
        assert!(screen.contains("Ada — 1/2/2025"));
        assert_eq!(screen.matches("[d] Delete").count(), 1);
    }

    #[test]
    fn test_detail_without_owner_has_no_actions() {
        let session = Session::new("t", User::new(1u64, "Ada", "a@x.io"));
        let mut app = create_test_app(Some(session));
        app.screen = Screen::Detail;
        app.detail = Some(DetailState {
            id: Id::Number(42),
            post: Some(post(42, 7, "Full body")),
        });

        let screen = draw(&app);
        assert!(screen.contains("Post 42"));
        assert!(screen.contains("General — 1/2/2025"));
        assert!(screen.contains("Full body"));
        assert!(!screen.contains("[e] Edit"));
        assert!(!screen.contains("[d] Delete"));
    }

    #[test]
    fn test_dialog_and_notice_overlay() {
        let mut app = create_test_app(None);
        app.home = HomeState::Ready(PostList::default());
        app.notice = Some(Notice::error("Failed to delete post"));
        app.dialog = Some(ConfirmDialog {
            post_id: Id::Number(1),
            prompt: "Delete this post?",
            origin: Screen::Home,
        });

        let screen = draw(&app);
        assert!(screen.contains("Delete this post?"));
        assert!(screen.contains("[y] Delete"));
        assert!(screen.contains("Failed to delete post"));
    }
}
