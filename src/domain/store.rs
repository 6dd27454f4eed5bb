use async_trait::async_trait;

use super::todo::TodoItem;

/// Storage seam for the shared todo list. Implementations must make every
/// operation atomic with respect to concurrent callers: all five run inside
/// one exclusive section over the same list.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    async fn append(&self, text: String) -> anyhow::Result<TodoItem>;
    /// Marks the first item with this id done. Unknown id is a no-op.
    async fn mark_done(&self, id: u64) -> anyhow::Result<()>;
    /// Removes the first item with this id, keeping the order of the rest.
    /// Unknown id is a no-op.
    async fn delete(&self, id: u64) -> anyhow::Result<()>;
    async fn clear(&self) -> anyhow::Result<()>;
    /// Copy of the list taken atomically; safe to inspect after the
    /// exclusive section is released.
    async fn snapshot(&self) -> anyhow::Result<Vec<TodoItem>>;
}
