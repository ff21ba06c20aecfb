//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `||`, `**`, `__`, `*`, `_` and their precedence
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Link`**: `[`, `](`, `)`
//! - **`TimeMarker`**: `<t:`, style flags
//! - **`MentionMarker`**: mention prefixes and snowflake id length
//!
//! The parser calls these constants; it never hardcodes delimiters.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod mention_marker;
pub mod time_marker;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
pub use mention_marker::MentionMarker;
pub use time_marker::TimeMarker;
