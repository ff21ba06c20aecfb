//! # Snapshot Services
//!
//! A snapshot service turns rendered markup into image bytes. The engine
//! only defines the seam; [`CommandSnapshotter`] drives any external program
//! that reads markup on stdin and writes an image to stdout.

mod command;

pub use command::CommandSnapshotter;

use std::{process::ExitStatus, time::Duration};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to start snapshot command {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error talking to snapshot command: {0}")]
    Io(#[from] std::io::Error),
    #[error("Snapshot timed out after {0:?}")]
    TimedOut(Duration),
    #[error("Snapshot command exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
    #[error("Snapshot command produced no image")]
    EmptyImage,
}

pub trait SnapshotService {
    /// Captures `markup` as an image, giving up after `timeout`.
    fn capture(&self, markup: &str, timeout: Duration) -> Result<Vec<u8>, SnapshotError>;
}

impl<T: SnapshotService + ?Sized> SnapshotService for &T {
    fn capture(&self, markup: &str, timeout: Duration) -> Result<Vec<u8>, SnapshotError> {
        (**self).capture(markup, timeout)
    }
}

impl<T: SnapshotService + ?Sized> SnapshotService for Box<T> {
    fn capture(&self, markup: &str, timeout: Duration) -> Result<Vec<u8>, SnapshotError> {
        (**self).capture(markup, timeout)
    }
}
