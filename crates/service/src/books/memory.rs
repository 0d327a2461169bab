use std::sync::Arc;

use async_trait::async_trait;
use common::is_falsy;
use common::types::{Book, CreateBookRequest, UpdateBookRequest};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::BookStore;
use crate::errors::ServiceError;

struct Inner {
    books: Vec<Book>,
    next_id: u64,
}

/// Process-lifetime book collection. Nothing is persisted.
#[derive(Clone)]
pub struct InMemoryBookStore {
    inner: Arc<RwLock<Inner>>,
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(Inner { books: Vec::new(), next_id: 1 })) }
    }
}

fn names_match(stored: &str, wanted: &str) -> bool {
    stored.to_lowercase() == wanted.to_lowercase()
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn list(&self) -> Vec<Book> {
        self.inner.read().await.books.clone()
    }

    async fn find_by_name(&self, name: &str) -> Option<Book> {
        let inner = self.inner.read().await;
        inner.books.iter().find(|b| names_match(&b.name, name)).cloned()
    }

    async fn create(&self, input: CreateBookRequest) -> Result<Book, ServiceError> {
        if is_falsy(input.name.as_deref())
            || is_falsy(input.description.as_deref())
            || is_falsy(input.content.as_deref())
        {
            return Err(ServiceError::Validation("Missing required fields".into()));
        }
        let name = input.name.unwrap_or_default();
        let description = input.description.unwrap_or_default();
        let content = input.content.unwrap_or_default();

        let mut inner = self.inner.write().await;
        let book = Book { id: inner.next_id, name, description, content };
        inner.next_id += 1;
        inner.books.push(book.clone());
        info!(book_id = book.id, "book created");
        Ok(book)
    }

    async fn update(&self, id: i64, input: UpdateBookRequest) -> Result<Book, ServiceError> {
        if is_falsy(input.name.as_deref()) || is_falsy(input.content.as_deref()) {
            return Err(ServiceError::Validation("Missing name or content".into()));
        }
        let name = input.name.unwrap_or_default();
        let content = input.content.unwrap_or_default();

        let mut inner = self.inner.write().await;
        let book = inner
            .books
            .iter_mut()
            .find(|b| i64::try_from(b.id) == Ok(id))
            .ok_or_else(|| ServiceError::not_found("Book"))?;
        book.name = name;
        book.content = content;
        debug!(book_id = book.id, "book updated");
        Ok(book.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .books
            .iter()
            .position(|b| i64::try_from(b.id) == Ok(id))
            .ok_or_else(|| ServiceError::not_found("Book"))?;
        inner.books.remove(index);
        info!(book_id = id, "book deleted");
        Ok(())
    }
}
