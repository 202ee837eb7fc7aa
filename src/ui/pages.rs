//! Pages module
//! Full-page views for the book finder

pub mod calendar;
pub mod search;
