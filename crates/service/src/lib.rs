//! Service layer owning the process-wide book collection.
//! - `books::BookStore` is the storage seam the HTTP layer talks to.
//! - `books::InMemoryBookStore` keeps the list and id counter behind one lock.

pub mod errors;
pub mod books;
