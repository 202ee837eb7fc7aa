//! Google Books API module
//!
//! Provides the books client and the volume model it returns.

mod books;
pub mod books_api;

pub use books::{BooksClient, DEFAULT_MAX_RESULTS, DEFAULT_SUGGESTION_COUNT};
pub use books_api::DEFAULT_ENDPOINT;
pub use books_api::model::{IndustryIdentifier, Volume};
