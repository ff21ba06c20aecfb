//! # Inline Tokenizing
//!
//! Cursor-based, single-pass tokenizing with explicit raw zones.
//!
//! ## Architecture
//!
//! Inline tokenizing runs over a whole line, or over the remainder of a block
//! line after its marker. A cursor moves left to right; at each position the
//! constructs are tried in precedence order and the first complete one is
//! emitted as a [`Segment`]. Bytes that start nothing accumulate into a
//! literal run that is flushed as `Node::Text` before the next construct.
//!
//! Output is therefore in source order: `*a* **b**` yields italic, text, bold.
//!
//! ## Modules
//!
//! - **`types`**: `Segment` (span + node)
//! - **`kinds`**: Inline types with owned delimiters
//! - **`cursor`**: `Cursor` for scanning with position tracking
//! - **`parser`**: `tokenize()` / `tokenize_segments()` with `try_parse_*` helpers
//!
//! ## Raw Zone Precedence
//!
//! Code span bodies are never scanned, and closer searches of the formatting
//! delimiters step over complete code spans: in `` **a `**` b** `` the bold
//! span closes at the last `**`.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{tokenize, tokenize_segments};
pub use types::Segment;
