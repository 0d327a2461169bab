use async_trait::async_trait;
use common::types::{Book, CreateBookRequest, UpdateBookRequest};

use crate::errors::ServiceError;

mod memory;

pub use memory::InMemoryBookStore;

/// Storage abstraction for books. Implementations must keep insertion order
/// and never reuse an id.
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn list(&self) -> Vec<Book>;
    /// First book whose name matches case-insensitively.
    async fn find_by_name(&self, name: &str) -> Option<Book>;
    async fn create(&self, input: CreateBookRequest) -> Result<Book, ServiceError>;
    async fn update(&self, id: i64, input: UpdateBookRequest) -> Result<Book, ServiceError>;
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}
