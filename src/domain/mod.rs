//! Domain entities exposed to the search and service layers.

pub mod attachment;
pub mod comment;
pub mod document;
pub mod item;
pub mod types;
