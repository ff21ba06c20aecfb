use crate::{node::Node, parsing::span::Span};

/// A tokenized piece of a line: the byte range it was read from and the node
/// it resolves to.
///
/// The segments of one line are position-ordered and tile the line exactly;
/// see [`crate::parsing::invariants::check_segments`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Absolute span in the content, delimiters included.
    pub span: Span,
    pub node: Node,
}

impl Segment {
    pub fn new(start: usize, end: usize, node: Node) -> Self {
        Self {
            span: Span { start, end },
            node,
        }
    }
}
