/// Subscript ("small print") block type.
pub struct Subscript;

impl Subscript {
    pub const MARKER: &'static str = "-# ";

    /// Returns the byte offset of the subscript text when `line` opens with
    /// the marker and has text after it.
    pub fn open(line: &str) -> Option<usize> {
        let rest = line.strip_prefix(Self::MARKER)?;
        (!rest.is_empty()).then_some(Self::MARKER.len())
    }
}
