//! Home list state.

use crate::error::FlowResult;
use crate::flows::posts::NO_POSTS;
use crate::flows::{Notice, PostList};

/// State of the home list.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HomeState {
    /// The list call has not resolved yet.
    #[default]
    Loading,
    Ready(PostList),
}

impl HomeState {
    /// Settle the state from a list call. A failure shows the empty list
    /// and yields the error notice to display.
    pub fn resolve(result: FlowResult<PostList>) -> (Self, Option<Notice>) {
        match result {
            Ok(list) => (HomeState::Ready(list), None),
            Err(err) => {
                tracing::warn!("Post list failed: {}", err.source_error());
                (HomeState::Ready(PostList::default()), Some(Notice::from(&err)))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, HomeState::Loading)
    }

    pub fn list(&self) -> Option<&PostList> {
        match self {
            HomeState::Ready(list) => Some(list),
            HomeState::Loading => None,
        }
    }

    pub fn list_mut(&mut self) -> Option<&mut PostList> {
        match self {
            HomeState::Ready(list) => Some(list),
            HomeState::Loading => None,
        }
    }

    /// Placeholder text when there is nothing to list.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            HomeState::Loading => Some("Loading..."),
            HomeState::Ready(list) if list.is_empty() => Some(NO_POSTS),
            HomeState::Ready(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BlogError, FlowError};

    #[test]
    fn test_loading_placeholder() {
        assert_eq!(HomeState::default().placeholder(), Some("Loading..."));
        assert!(HomeState::default().is_loading());
    }

    #[test]
    fn test_empty_list_shows_no_posts() {
        let (state, notice) = HomeState::resolve(Ok(PostList::default()));
        assert_eq!(state.placeholder(), Some("No posts available."));
        assert!(notice.is_none());
    }

    #[test]
    fn test_failure_shows_empty_list_and_notice() {
        let err = FlowError::new("Failed to load posts", BlogError::NotSignedIn);
        let (state, notice) = HomeState::resolve(Err(err));
        assert_eq!(state.placeholder(), Some("No posts available."));
        assert_eq!(notice.unwrap().message, "Failed to load posts");
    }
}
