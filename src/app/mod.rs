//! Application state for the interactive browser.
//!
//! The [`App`] owns everything the renderer reads. Requests run on spawned
//! tasks and report back through [`AppMessage`]s, so the event loop never
//! blocks on the network.

mod actions;
mod event_loop;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use event_loop::run_app;
pub use messages::AppMessage;
pub use types::{ConfirmDialog, DetailState, Screen};

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::BlogApi;
use crate::flows::{AuthFlow, Notice, PostFlow};
use crate::models::{Post, User};
use crate::session::Session;
use crate::traits::SessionStore;
use crate::view::{can_modify, HomeState, NavBar};

/// Browser state.
pub struct App {
    /// Current screen
    pub screen: Screen,
    /// Home list
    pub home: HomeState,
    /// Index of the highlighted card on the home screen
    pub selected: usize,
    /// Post opened on the detail screen
    pub detail: Option<DetailState>,
    /// Signed-in session, read once at startup
    pub session: Option<Session>,
    /// Latest notice for the status line
    pub notice: Option<Notice>,
    /// Pending delete confirmation
    pub dialog: Option<ConfirmDialog>,
    /// Flag to quit the application
    pub should_quit: bool,
    /// Set whenever state changes; cleared after a draw
    pub needs_redraw: bool,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver drained by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    posts: PostFlow,
    auth: AuthFlow,
    session_store: Arc<dyn SessionStore>,
}

impl App {
    pub fn new(api: BlogApi) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let session_store = Arc::clone(api.session());
        Self {
            screen: Screen::Home,
            home: HomeState::Loading,
            selected: 0,
            detail: None,
            session: None,
            notice: None,
            dialog: None,
            should_quit: false,
            needs_redraw: true,
            message_tx,
            message_rx: Some(message_rx),
            posts: PostFlow::new(api.clone()),
            auth: AuthFlow::new(api),
            session_store,
        }
    }

    /// Kick off the startup reads: the stored session and the post list.
    pub fn initialize(&mut self) {
        self.load_session();
        self.load_posts();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn viewer(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn nav_bar(&self) -> NavBar {
        NavBar::for_session(self.session.as_ref())
    }

    /// Post under the cursor on the home screen.
    pub fn selected_post(&self) -> Option<&Post> {
        self.home.list().and_then(|list| list.get(self.selected))
    }

    /// Post the current screen is about.
    pub fn focused_post(&self) -> Option<&Post> {
        match self.screen {
            Screen::Home => self.selected_post(),
            Screen::Detail => self.detail.as_ref().and_then(|d| d.post.as_ref()),
        }
    }

    /// Whether edit/delete are offered for the focused post.
    pub fn can_modify_focused(&self) -> bool {
        self.focused_post()
            .is_some_and(|post| can_modify(post, self.viewer()))
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }
}
