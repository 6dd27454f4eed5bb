use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{store::TodoStore, todo::TodoItem};

#[derive(Default)]
struct Inner {
    items: Vec<TodoItem>,
    next_id: u64,
}

/// Process-lifetime todo list behind a single coarse mutex. All five store
/// operations take the same lock, and nothing blocks or awaits while it is
/// held.
#[derive(Clone, Default)]
pub struct MemoryTodoStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self { Self::default() }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn append(&self, text: String) -> Result<TodoItem> {
        let mut inner = self.inner.lock();
        // Monotonic counter, never reset: ids stay unique for the process
        // lifetime even after deletes.
        inner.next_id += 1;
        let item = TodoItem::new(inner.next_id, text);
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn mark_done(&self, id: u64) -> Result<()> {
        let mut inner = self.inner.lock();
        if let Some(item) = inner.items.iter_mut().find(|t| t.id == id) {
            item.done = true;
        }
        Ok(())
    }

    async fn delete(&self, id: u64) -> Result<()> {
        let mut inner = self.inner.lock();
        if let Some(pos) = inner.items.iter().position(|t| t.id == id) {
            inner.items.remove(pos);
        }
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.inner.lock().items.clear();
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<TodoItem>> {
        Ok(self.inner.lock().items.clone())
    }
}
