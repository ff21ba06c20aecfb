use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::node::{MentionKind, Node};

use super::{Author, RenderAdapter};

/// Id of the element the snapshot service captures.
pub const CAPTURE_ELEMENT_ID: &str = "tag-image-preview";

/// Renders nodes as chat-message web components (`<discord-bold>`,
/// `<discord-mention>`, ...).
///
/// The components library itself is not bundled; supply the tags that load it
/// through `head_html`.
#[derive(Debug, Clone, Default)]
pub struct DiscordHtml {
    /// Raw fragment inserted into the page `<head>`.
    pub head_html: Option<String>,
}

impl DiscordHtml {
    pub fn new(head_html: Option<String>) -> Self {
        Self { head_html }
    }
}

impl RenderAdapter for DiscordHtml {
    fn render_message(&self, author: &Author, nodes: &[Node]) -> String {
        let mut out = String::new();
        out.push_str("<discord-messages><discord-message author=\"");
        out.push_str(&encode_double_quoted_attribute(&author.name));
        out.push_str("\" avatar=\"");
        out.push_str(&encode_double_quoted_attribute(&author.avatar));
        out.push_str("\">");
        render_nodes(&mut out, nodes);
        out.push_str("</discord-message></discord-messages>");
        out
    }

    fn render_page(&self, author: &Author, nodes: &[Node]) -> String {
        let head = self.head_html.as_deref().unwrap_or_default();
        let message = self.render_message(author, nodes);
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n<meta charset=\"utf-8\">\n{head}\n</head>\n\
             <body style=\"margin:0;background:transparent\">\n\
             <div id=\"{CAPTURE_ELEMENT_ID}\" style=\"max-width:500px;transform:scale(2);transform-origin:top left\">\n\
             <div style=\"background:transparent;padding-left:15px;padding-top:15px;padding-bottom:15px\">\n\
             {message}\n\
             </div>\n</div>\n</body>\n</html>\n"
        )
    }
}

fn render_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        render_node(out, node);
    }
}

fn wrap(out: &mut String, tag: &str, children: &[Node]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    render_nodes(out, children);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn render_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(s) => out.push_str(&encode_text(s)),
        Node::Bold(c) => wrap(out, "discord-bold", c),
        Node::Italic(c) => wrap(out, "discord-italic", c),
        Node::Underline(c) => wrap(out, "discord-underlined", c),
        Node::Spoiler(c) => wrap(out, "discord-spoiler", c),
        Node::Subscript(c) => wrap(out, "discord-subscript", c),
        Node::Code(s) => {
            out.push_str("<discord-code>");
            out.push_str(&encode_text(s));
            out.push_str("</discord-code>");
        }
        Node::Link { label, url } => {
            out.push_str("<discord-link href=\"");
            out.push_str(&encode_double_quoted_attribute(url));
            out.push_str("\" target=\"_blank\" rel=\"noreferrer\">");
            out.push_str(&encode_text(label));
            out.push_str("</discord-link>");
        }
        Node::Timestamp(ts) => {
            out.push_str("<discord-time>");
            out.push_str(&encode_text(&ts.raw));
            out.push_str("</discord-time>");
        }
        Node::Mention(m) => {
            let kind = match m.kind {
                MentionKind::User => "user",
                MentionKind::Channel => "channel",
                MentionKind::Role => "role",
                MentionKind::SlashCommand => "slash",
            };
            out.push_str("<discord-mention type=\"");
            out.push_str(kind);
            out.push_str("\">");
            out.push_str(&encode_text(m.display()));
            out.push_str("</discord-mention>");
        }
        Node::Header { level, children } => {
            out.push_str(&format!("<discord-header level=\"{level}\">"));
            render_nodes(out, children);
            out.push_str("</discord-header>");
        }
        Node::Quote { level, children } => {
            // One quote bar per level.
            let level = usize::from(*level).max(1);
            out.push_str(&"<discord-quote>".repeat(level));
            render_nodes(out, children);
            out.push_str(&"</discord-quote>".repeat(level));
        }
        Node::LineBreak => out.push_str("<br>"),
    }
}
