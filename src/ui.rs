//! UI module for the book finder
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): Full-page views built from components

pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;
