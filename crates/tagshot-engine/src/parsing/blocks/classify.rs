use super::kinds::{Header, Quote, Subscript};

/// Block-level classification of a single line.
///
/// Block syntax must start at the first byte of the line; leading spaces are
/// not stripped. Each block variant carries the text after its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    Subscript { remainder: &'a str },
    Header { level: u8, remainder: &'a str },
    Quote { level: u8, remainder: &'a str },
    /// No block form applies; the whole line is inline content.
    Inline,
}

/// Classifies individual lines for the block phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockClassifier;

impl BlockClassifier {
    /// Classifies `line`, trying subscript, then header, then quote.
    ///
    /// First match wins; a block line never also gets inline tokenization of
    /// its marker.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(offset) = Subscript::open(line) {
            return LineClass::Subscript {
                remainder: &line[offset..],
            };
        }
        if let Some((level, offset)) = Header::open(line) {
            return LineClass::Header {
                level,
                remainder: &line[offset..],
            };
        }
        if let Some((level, offset)) = Quote::open(line) {
            return LineClass::Quote {
                level,
                remainder: &line[offset..],
            };
        }
        LineClass::Inline
    }
}
