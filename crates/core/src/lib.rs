//! Domain building blocks shared by the TaskDeck crates.
//!
//! Everything here is pure logic: identifier parsing, field validation and
//! prompt construction for the AI assistant. No database or network access.

pub mod error;
pub mod prompt;
pub mod types;
pub mod validation;
