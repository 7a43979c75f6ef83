//! Scripted confirmation prompt for testing.

use std::sync::{Arc, Mutex};

use crate::traits::Confirm;

/// Gives a fixed answer and remembers every question asked.
#[derive(Debug, Clone)]
pub struct ScriptedConfirm {
    answer: bool,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConfirm {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            asked: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Questions asked so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        self.asked.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}
