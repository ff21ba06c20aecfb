//! # Markup Segmentation
//!
//! Turns raw tag content into an ordered `Vec<Node>`:
//!
//! raw string → [`lines`] → per line [`blocks`] or [`inline`] → [`compose`]
//!
//! Parsing is total over all strings, synchronous, and touches nothing but
//! the input and the injected [`RoleResolver`].

pub mod blocks;
pub mod compose;
pub mod inline;
pub mod invariants;
pub mod lines;
pub mod span;

#[cfg(test)]
mod tests;

use crate::{node::Node, roles::RoleResolver};

use blocks::{BlockClassifier, LineClass};
use compose::compose;
use inline::{Segment, tokenize, tokenize_segments};
use lines::{LineRef, split_lines};

/// Parses tag content into its node sequence.
pub fn parse_content(content: &str, roles: &dyn RoleResolver) -> Vec<Node> {
    let classifier = BlockClassifier;
    compose(split_lines(content).map(|line| {
        segment_line(&classifier, &line, roles)
            .into_iter()
            .map(|seg| seg.node)
            .collect()
    }))
}

/// Segments one line.
///
/// A block line becomes a single segment spanning the whole line, its
/// remainder tokenized as the block's children. Any other line is tokenized
/// inline.
pub fn segment_line(
    classifier: &BlockClassifier,
    line: &LineRef<'_>,
    roles: &dyn RoleResolver,
) -> Vec<Segment> {
    let node = match classifier.classify(line.text) {
        LineClass::Subscript { remainder } => Node::Subscript(tokenize(remainder, roles)),
        LineClass::Header { level, remainder } => Node::Header {
            level,
            children: tokenize(remainder, roles),
        },
        LineClass::Quote { level, remainder } => Node::Quote {
            level,
            children: tokenize(remainder, roles),
        },
        LineClass::Inline => return tokenize_segments(line.span.start, line.text, roles),
    };
    vec![Segment {
        span: line.span,
        node,
    }]
}
