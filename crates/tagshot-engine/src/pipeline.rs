//! # Tag Image Pipeline
//!
//! Parse, render, snapshot. Each phase finishes before the next begins; the
//! only fallible step is the snapshot.

use std::time::Duration;

use log::{debug, warn};

use crate::{
    node::Node,
    parsing::parse_content,
    render::{Author, RenderAdapter},
    roles::RoleResolver,
    snapshot::{DEFAULT_TIMEOUT, SnapshotService},
};

/// What a caller sees when rendering fails, whatever the cause.
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while processing your request. Please try again later.";

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

impl RenderError {
    /// Message safe to show an end user. Details go to the log instead.
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRequest {
    pub author: String,
    /// Avatar URL; the default avatar is used when `None`.
    pub avatar: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct TagImage {
    pub nodes: Vec<Node>,
    /// The document handed to the snapshot service.
    pub markup: String,
    pub image: Vec<u8>,
}

pub struct TagImagePipeline<R, A, S> {
    pub roles: R,
    pub adapter: A,
    pub snapshots: S,
    pub timeout: Duration,
}

impl<R, A, S> TagImagePipeline<R, A, S>
where
    R: RoleResolver,
    A: RenderAdapter,
    S: SnapshotService,
{
    pub fn new(roles: R, adapter: A, snapshots: S) -> Self {
        Self {
            roles,
            adapter,
            snapshots,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parses and renders `content` to markup without taking a snapshot.
    pub fn render_markup(&self, author: &Author, content: &str) -> (Vec<Node>, String) {
        let nodes = parse_content(content, &self.roles);
        debug!("Parsed tag content into {} top-level nodes", nodes.len());
        let markup = self.adapter.render_page(author, &nodes);
        (nodes, markup)
    }

    pub fn render(&self, request: &TagRequest) -> Result<TagImage, RenderError> {
        if request.author.is_empty() {
            return Err(RenderError::MissingField("author"));
        }
        if request.content.is_empty() {
            return Err(RenderError::MissingField("content"));
        }

        let author = Author::new(
            request.author.as_str(),
            request.avatar.as_deref().unwrap_or(Author::DEFAULT_AVATAR),
        );
        let (nodes, markup) = self.render_markup(&author, &request.content);

        debug!("Capturing snapshot ({} bytes of markup)", markup.len());
        let image = self
            .snapshots
            .capture(&markup, self.timeout)
            .map_err(|e| {
                warn!("Snapshot failed: {e}");
                RenderError::RenderFailed(e.to_string())
            })?;

        Ok(TagImage {
            nodes,
            markup,
            image,
        })
    }
}
