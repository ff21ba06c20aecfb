/// Header block type with owned delimiter constant.
pub struct Header;

impl Header {
    pub const PREFIX: u8 = b'#';
    pub const MAX_LEVEL: u8 = 3;

    /// Matches `#`, `##` or `###` plus one space at the start of `line`,
    /// returning `(level, byte_offset_of_text)`.
    pub fn open(line: &str) -> Option<(u8, usize)> {
        super::leveled_marker(line, Self::PREFIX, Self::MAX_LEVEL)
    }
}
