//! Shared helpers for presenting content.

pub mod dates;
pub mod text;

pub use dates::arabic_long_date;
pub use text::{excerpt, paragraphs, word_count};
