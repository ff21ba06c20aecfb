//! # Block Kinds
//!
//! Block-specific types that own their syntax delimiters. The classifier
//! calls these; it never hardcodes `#`, `>` or `-# `.

pub mod header;
pub mod quote;
pub mod subscript;

pub use header::Header;
pub use quote::Quote;
pub use subscript::Subscript;

/// Shared matcher for `#`/`>` style markers: a run of 1..=`max` `prefix`
/// bytes, exactly one space, then at least one byte of text.
fn leveled_marker(line: &str, prefix: u8, max: u8) -> Option<(u8, usize)> {
    let b = line.as_bytes();
    let run = b.iter().take_while(|&&c| c == prefix).count();
    if run == 0 || run > usize::from(max) {
        return None;
    }
    if b.get(run) != Some(&b' ') || b.len() <= run + 1 {
        return None;
    }
    Some((run as u8, run + 1))
}
