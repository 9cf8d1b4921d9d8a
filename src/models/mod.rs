//! Database models for the board and catalog tables.

pub mod attachment;
pub mod comment;
pub mod config;
pub mod document;
pub mod item;
