//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets combine basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Generic callbacks**: Use generic Message types
//! - **Reusable**: Can be used by multiple components
//!
//! # Relationship to Other Layers
//!
//! - **Widgets** (this module): Composable UI patterns
//! - **Components** (`crate::ui::components`): Business-specific UI with Message handling

pub mod book_card;
pub mod section_header;
mod toast;

pub use book_card::{CARD_WIDTH, CardLabels, cover_placeholder};
pub use toast::{Toast, view_toast};
