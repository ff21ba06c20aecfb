//! # Rendering Adapters
//!
//! Turn a parsed node sequence into visual markup for the snapshot step.
//! Adapters see every [`Node`] variant, including arbitrary nesting and the
//! `level` of headers and quotes.

pub mod html;

pub use html::{CAPTURE_ELEMENT_ID, DiscordHtml};

use crate::node::Node;

/// Who the rendered message appears to come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    /// Avatar image URL.
    pub avatar: String,
}

impl Author {
    pub const DEFAULT_AVATAR: &'static str = "https://cdn.discordapp.com/embed/avatars/0.png";

    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

pub trait RenderAdapter {
    /// Markup for a single chat message holding `nodes`.
    fn render_message(&self, author: &Author, nodes: &[Node]) -> String;

    /// Complete document handed to the snapshot service.
    fn render_page(&self, author: &Author, nodes: &[Node]) -> String {
        self.render_message(author, nodes)
    }
}
