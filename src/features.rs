//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod books;
pub mod calendar;
pub mod debounce;
pub mod search;
pub mod settings;

pub use debounce::Debouncer;
pub use search::{SearchState, SearchStatus};
pub use settings::Settings;
