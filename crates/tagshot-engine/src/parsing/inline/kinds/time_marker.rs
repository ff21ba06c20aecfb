/// Chat-platform timestamp token `<t:SECONDS>` / `<t:SECONDS:STYLE>`.
pub struct TimeMarker;

impl TimeMarker {
    pub const OPEN: &'static [u8; 3] = b"<t:";
    pub const STYLE_SEP: u8 = b':';
    pub const CLOSE: u8 = b'>';
    /// Short time, long time, short date, long date, short/long date-time, relative.
    pub const STYLES: &'static [u8; 7] = b"tTdDfFR";

    pub fn is_style(b: u8) -> bool {
        Self::STYLES.contains(&b)
    }
}
