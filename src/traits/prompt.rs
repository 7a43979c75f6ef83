//! Blocking confirmation prompt abstraction.

/// Asks the user a yes/no question before a destructive action.
///
/// Implementations block until the user answers.
pub trait Confirm: Send + Sync {
    /// Returns `true` only if the user explicitly agreed.
    fn confirm(&self, prompt: &str) -> bool;
}
