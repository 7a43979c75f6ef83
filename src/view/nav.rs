//! Navigation bar model.

use crate::session::Session;

/// Title shown at the left of the navigation bar.
pub const APP_TITLE: &str = "Blog System";

/// An entry of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Login,
    Signup,
    NewPost,
    Logout,
}

impl NavAction {
    pub fn label(&self) -> &'static str {
        match self {
            NavAction::Login => "Login",
            NavAction::Signup => "Signup",
            NavAction::NewPost => "New Post",
            NavAction::Logout => "Logout",
        }
    }
}

/// What the navigation bar shows for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub title: &'static str,
    /// Name of the signed-in user.
    pub user_name: Option<String>,
    pub actions: Vec<NavAction>,
}

impl NavBar {
    pub fn for_session(session: Option<&Session>) -> Self {
        match session {
            Some(session) => Self {
                title: APP_TITLE,
                user_name: Some(session.user.name.clone()),
                actions: vec![NavAction::NewPost, NavAction::Logout],
            },
            None => Self {
                title: APP_TITLE,
                user_name: None,
                actions: vec![NavAction::Login, NavAction::Signup],
            },
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user_name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    #[test]
    fn test_signed_out_offers_login_and_signup() {
        let nav = NavBar::for_session(None);
        assert_eq!(nav.title, "Blog System");
        assert_eq!(nav.actions, vec![NavAction::Login, NavAction::Signup]);
        assert!(!nav.is_signed_in());
    }

    #[test]
    fn test_signed_in_shows_name_and_actions() {
        let session = Session::new("t", User::new(1u64, "Ada", "a@x.io"));
        let nav = NavBar::for_session(Some(&session));
        assert_eq!(nav.user_name.as_deref(), Some("Ada"));
        let labels: Vec<_> = nav.actions.iter().map(|a| a.label()).collect();
        assert_eq!(labels, vec!["New Post", "Logout"]);
    }
}
