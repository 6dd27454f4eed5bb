use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

impl TodoItem {
    pub fn new(id: u64, text: String) -> Self {
        Self { id, text, done: false }
    }
}
