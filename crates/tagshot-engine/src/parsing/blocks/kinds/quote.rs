/// Quote block type with owned delimiter constant.
///
/// All quote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct Quote;

impl Quote {
    /// The quote prefix character.
    pub const PREFIX: u8 = b'>';

    /// Deepest quote level recognised (`>>>`).
    pub const MAX_LEVEL: u8 = 3;

    /// Matches a quote marker at the very start of `line`.
    ///
    /// # Returns
    /// - `level`: number of `>` characters (1 to 3)
    /// - `byte_offset`: index into `line` where the quoted text begins
    ///
    /// `None` when the line does not start with 1 to 3 `>` followed by a single
    /// space and at least one more character.
    pub fn open(line: &str) -> Option<(u8, usize)> {
        super::leveled_marker(line, Self::PREFIX, Self::MAX_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_quote() {
        assert_eq!(Quote::open("hello"), None);
    }

    #[test]
    fn single_quote() {
        assert_eq!(Quote::open("> hello"), Some((1, 2)));
    }

    #[test]
    fn triple_quote() {
        assert_eq!(Quote::open(">>> hello"), Some((3, 4)));
    }

    #[test]
    fn four_levels_is_not_a_quote() {
        assert_eq!(Quote::open(">>>> hello"), None);
    }

    #[test]
    fn marker_needs_space_and_text() {
        assert_eq!(Quote::open(">hello"), None);
        assert_eq!(Quote::open("> "), None);
        assert_eq!(Quote::open(">"), None);
    }

    #[test]
    fn leading_space_is_not_stripped() {
        assert_eq!(Quote::open(" > hello"), None);
    }
}
