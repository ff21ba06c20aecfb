pub mod node;
pub mod parsing;
pub mod pipeline;
pub mod render;
pub mod roles;
pub mod snapshot;

// Re-export key types for easier usage
pub use node::{Mention, MentionKind, Node, Timestamp, plain_text};
pub use parsing::parse_content;
pub use pipeline::{RenderError, TagImage, TagImagePipeline, TagRequest};
pub use render::{Author, DiscordHtml, RenderAdapter};
pub use roles::{NoRoles, RoleResolver};
pub use snapshot::{CommandSnapshotter, SnapshotError, SnapshotService};
