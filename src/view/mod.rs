//! Presentation logic shared by the CLI printers and the browser: what the
//! navigation bar offers, which post actions are visible, and how post text
//! is shortened.

pub mod card;
pub mod home;
pub mod nav;

pub use card::{byline, can_modify, detail_subtitle, excerpt, post_actions, PostAction};
pub use home::HomeState;
pub use nav::{NavAction, NavBar, APP_TITLE};
