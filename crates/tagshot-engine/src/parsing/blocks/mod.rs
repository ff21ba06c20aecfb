//! # Block Classification
//!
//! Per-line decision between the three block forms and inline content.
//!
//! ## Modules
//!
//! - **`kinds`**: Block types with owned delimiters (Subscript, Header, Quote)
//! - **`classify`**: `BlockClassifier` produces a `LineClass` for each line
//!
//! ## Key Invariants
//!
//! - Priority is subscript, header, quote; only one block form applies per line
//! - Block markers must be the first character(s) of the line
//! - Levels are 1 to 3; four or more markers fall through to inline
//! - A marker with nothing after its space is literal text

pub mod classify;
pub mod kinds;

pub use classify::{BlockClassifier, LineClass};
