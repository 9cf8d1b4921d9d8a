//! DTOs returned by listing and detail services.

pub mod attachment;
pub mod comment;
pub mod document;
pub mod item;
