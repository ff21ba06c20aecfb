use crate::node::Node;

/// Joins per-line node sequences with one [`Node::LineBreak`] between
/// consecutive lines (none after the last). Node contents are not touched.
pub fn compose<I>(lines: I) -> Vec<Node>
where
    I: IntoIterator<Item = Vec<Node>>,
{
    let mut out = Vec::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            out.push(Node::LineBreak);
        }
        out.extend(line);
    }
    out
}
