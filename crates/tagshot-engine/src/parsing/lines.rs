use std::str::Split;

use super::span::Span;

/// A reference to a single line of the content with its byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of this line in the content (excludes the `\n`).
    pub span: Span,
    /// The line text. A trailing `\r` is kept as literal text.
    pub text: &'a str,
}

/// Lazy iterator over the lines of a string, split strictly on `\n`.
///
/// Cloning the iterator restarts nothing that has already been consumed, but a
/// fresh call to [`split_lines`] (or a clone taken up front) replays the input.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    inner: Split<'a, char>,
    offset: usize,
}

/// Splits `content` into lines.
///
/// Empty input yields a single empty line; `"a\n"` yields `"a"` and `""`.
pub fn split_lines(content: &str) -> Lines<'_> {
    Lines {
        inner: content.split('\n'),
        offset: 0,
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = LineRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.inner.next()?;
        let start = self.offset;
        let end = start + text.len();
        let line = LineRef {
            span: Span { start, end },
            text,
        };
        // Skip past the `\n` that terminated this line.
        self.offset = end + 1;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(s: &str) -> Vec<&str> {
        split_lines(s).map(|l| l.text).collect()
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(texts(""), vec![""]);
    }

    #[test]
    fn splits_on_newline_only() {
        assert_eq!(texts("a\r\nb\nc"), vec!["a\r", "b", "c"]);
    }

    #[test]
    fn trailing_newline_yields_trailing_empty_line() {
        assert_eq!(texts("a\n"), vec!["a", ""]);
        assert_eq!(texts("\n\n"), vec!["", "", ""]);
    }

    #[test]
    fn spans_index_into_content() {
        let content = "one\ntwo\n\nfour";
        for line in split_lines(content) {
            assert_eq!(&content[line.span.start..line.span.end], line.text);
        }
        let spans: Vec<_> = split_lines(content).map(|l| l.span).collect();
        assert_eq!(
            spans,
            vec![
                Span::new(0, 3),
                Span::new(4, 7),
                Span::new(8, 8),
                Span::new(9, 13)
            ]
        );
    }

    #[test]
    fn clone_replays_from_the_same_point() {
        let mut lines = split_lines("a\nb\nc");
        lines.next();
        let replay = lines.clone();
        assert_eq!(
            lines.map(|l| l.text).collect::<Vec<_>>(),
            replay.map(|l| l.text).collect::<Vec<_>>()
        );
    }
}
