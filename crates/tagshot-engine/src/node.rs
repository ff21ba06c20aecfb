//! # Node Model
//!
//! The typed output of the segmentation engine. A parse result is an ordered
//! `Vec<Node>`; formatting wrappers own their children so nesting composes to
//! any depth. Nodes are plain data: they are built fresh per parse and carry
//! no identity beyond it.

use serde::Serialize;

/// A renderable piece of tag content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Node {
    /// Literal, unformatted run.
    Text(String),
    Bold(Vec<Node>),
    Italic(Vec<Node>),
    Underline(Vec<Node>),
    Spoiler(Vec<Node>),
    /// Inline code. Holds raw text; never re-parsed.
    Code(String),
    Link {
        label: String,
        url: String,
    },
    Timestamp(Timestamp),
    Mention(Mention),
    /// `#`, `##` or `###` heading line.
    Header {
        level: u8,
        children: Vec<Node>,
    },
    /// `>`, `>>` or `>>>` quoted line.
    Quote {
        level: u8,
        children: Vec<Node>,
    },
    /// `-# ` small-print line.
    Subscript(Vec<Node>),
    /// Separator between two source lines.
    LineBreak,
}

/// What a [`Mention`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionKind {
    User,
    Channel,
    Role,
    SlashCommand,
}

/// A typed reference to a user, channel, role or slash command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mention {
    pub kind: MentionKind,
    /// Snowflake id, 18 to 21 decimal digits.
    pub id: String,
    /// Display label: the resolved role name for roles, the command name for
    /// slash commands. `None` means "display the id".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Mention {
    /// The text a renderer should show for this mention.
    pub fn display(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// Reconstructs the source syntax of the mention.
    pub fn raw(&self) -> String {
        match self.kind {
            MentionKind::User => format!("<@{}>", self.id),
            MentionKind::Channel => format!("<#{}>", self.id),
            MentionKind::Role => format!("<@&{}>", self.id),
            MentionKind::SlashCommand => {
                format!("</{}:{}>", self.label.as_deref().unwrap_or_default(), self.id)
            }
        }
    }
}

/// A chat-platform time marker such as `<t:1700000000:R>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timestamp {
    /// The token exactly as written, angle brackets included.
    pub raw: String,
    /// Unix seconds.
    pub seconds: u64,
    /// Display style flag (`t`, `T`, `d`, `D`, `f`, `F` or `R`), if given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<char>,
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    /// Child nodes of a formatting wrapper; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Bold(c)
            | Node::Italic(c)
            | Node::Underline(c)
            | Node::Spoiler(c)
            | Node::Subscript(c)
            | Node::Header { children: c, .. }
            | Node::Quote { children: c, .. } => c,
            _ => &[],
        }
    }

    /// Appends this node's plain-text reconstruction to `out`.
    pub fn push_plain_text(&self, out: &mut String) {
        match self {
            Node::Text(s) | Node::Code(s) => out.push_str(s),
            Node::Link { label, .. } => out.push_str(label),
            Node::Timestamp(ts) => out.push_str(&ts.raw),
            Node::Mention(m) => out.push_str(&m.raw()),
            Node::LineBreak => out.push('\n'),
            wrapper => {
                for child in wrapper.children() {
                    child.push_plain_text(out);
                }
            }
        }
    }
}

/// Concatenates the visible text of `nodes`, ignoring formatting wrappers and
/// writing one `\n` per [`Node::LineBreak`].
pub fn plain_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.push_plain_text(&mut out);
    }
    out
}
