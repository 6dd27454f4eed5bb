use serde::Serialize;

use crate::domain::todo::TodoItem;

/// Everything the listing page needs for one response: the current page of
/// items, the active keyword, pagination numbers, and any flash message
/// carried through the redirect.
#[derive(Debug, Clone, Serialize)]
pub struct TodoPageView {
    pub todos: Vec<TodoItem>,
    pub keyword: String,
    pub page: usize,
    pub total_pages: usize,
    pub error: Option<String>,
    pub success: Option<String>,
}
