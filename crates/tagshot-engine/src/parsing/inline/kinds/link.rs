/// Markdown link `[label](url)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const LABEL_END: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const CLOSE: u8 = b')';
}
