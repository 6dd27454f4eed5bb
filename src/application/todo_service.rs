use crate::application::query::{self, TodoPage, PAGE_SIZE};
use crate::domain::store::TodoStore;
use crate::domain::todo::TodoItem;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn add(&self, text: String) -> Result<TodoItem>;
    async fn mark_done(&self, id: u64) -> Result<()>;
    async fn delete(&self, id: u64) -> Result<()>;
    async fn clear(&self) -> Result<()>;
    async fn list_page(&self, keyword: &str, page: usize) -> Result<TodoPage>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> TodoServiceImpl<S> {
    pub fn new(store: S) -> Self { Self { store } }
}

#[async_trait]
impl<S: TodoStore> TodoService for TodoServiceImpl<S> {
    async fn add(&self, text: String) -> Result<TodoItem> { self.store.append(text).await }
    async fn mark_done(&self, id: u64) -> Result<()> { self.store.mark_done(id).await }
    async fn delete(&self, id: u64) -> Result<()> { self.store.delete(id).await }
    async fn clear(&self) -> Result<()> { self.store.clear().await }

    async fn list_page(&self, keyword: &str, page: usize) -> Result<TodoPage> {
        // Snapshot is taken inside the store's exclusive section; the pure
        // query runs on the copy after release.
        let items = self.store.snapshot().await?;
        Ok(query::paginate(&items, keyword, page, PAGE_SIZE))
    }
}
