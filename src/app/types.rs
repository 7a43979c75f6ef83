//! Type definitions for the browser state.
//!
//! - [`Screen`] - Which screen is currently displayed
//! - [`DetailState`] - The post opened on the detail screen
//! - [`ConfirmDialog`] - Pending delete confirmation

use crate::models::{Id, Post};

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Detail,
}

/// The post shown on the detail screen. `post` is `None` until it loads.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    pub id: Id,
    pub post: Option<Post>,
}

impl DetailState {
    pub fn loading(id: Id) -> Self {
        Self { id, post: None }
    }
}

/// Yes/no dialog shown before a delete is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub post_id: Id,
    pub prompt: &'static str,
    /// Screen the delete was started from.
    pub origin: Screen,
}
