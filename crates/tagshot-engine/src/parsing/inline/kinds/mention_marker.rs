use std::ops::RangeInclusive;

use crate::node::MentionKind;

/// Syntax of typed mentions: `<@ID>`, `<#ID>`, `<@&ID>` and `</NAME:ID>`.
pub struct MentionMarker;

impl MentionMarker {
    pub const CLOSE: u8 = b'>';
    /// Separates a slash command's name from its id.
    pub const COMMAND_SEP: u8 = b':';
    /// Snowflake ids are always this many decimal digits.
    pub const ID_DIGITS: RangeInclusive<usize> = 18..=21;
    /// Command, subcommand group, subcommand.
    pub const MAX_COMMAND_WORDS: usize = 3;

    /// Prefixes in the order they are tried. `<@&` precedes `<@` so the role
    /// form is never mistaken for a malformed user mention.
    pub const PREFIXES: [(&'static [u8], MentionKind); 4] = [
        (b"<@&", MentionKind::Role),
        (b"<@", MentionKind::User),
        (b"<#", MentionKind::Channel),
        (b"</", MentionKind::SlashCommand),
    ];

    pub fn is_command_char(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
    }
}
