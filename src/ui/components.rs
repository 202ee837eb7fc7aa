//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic.
//! They are the only layer that should import from `crate::app`.
//!
//! # Design Principles
//!
//! - **Business logic**: Components handle Message mapping and state access
//! - **Composition**: Build on widgets and iced's built-in elements
//! - **Application-specific**: Depend on `crate::app::Message` and state types

pub mod book_detail;
pub mod book_grid;
pub mod calendar_grid;
pub mod nav_bar;
pub mod search_bar;
