use crate::node::Node;

/// Paired delimiters whose bodies are tokenized recursively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Spoiler,
    Bold,
    Underline,
    Italic,
    /// `_text_`, the alternative italic form.
    ItalicUnderscore,
}

impl Emphasis {
    /// Order in which openers are tried at the same position.
    pub const PRECEDENCE: [Emphasis; 5] = [
        Emphasis::Spoiler,
        Emphasis::Bold,
        Emphasis::Underline,
        Emphasis::Italic,
        Emphasis::ItalicUnderscore,
    ];

    pub fn delimiter(self) -> &'static [u8] {
        match self {
            Emphasis::Spoiler => b"||",
            Emphasis::Bold => b"**",
            Emphasis::Underline => b"__",
            Emphasis::Italic => b"*",
            Emphasis::ItalicUnderscore => b"_",
        }
    }

    /// Byte that makes up the delimiter.
    pub fn byte(self) -> u8 {
        self.delimiter()[0]
    }

    pub fn is_doubled(self) -> bool {
        self.delimiter().len() == 2
    }

    /// Underscore italics do not open or close inside a word.
    pub fn is_word_bound(self) -> bool {
        matches!(self, Emphasis::ItalicUnderscore)
    }

    pub fn wrap(self, children: Vec<Node>) -> Node {
        match self {
            Emphasis::Spoiler => Node::Spoiler(children),
            Emphasis::Bold => Node::Bold(children),
            Emphasis::Underline => Node::Underline(children),
            Emphasis::Italic | Emphasis::ItalicUnderscore => Node::Italic(children),
        }
    }
}
