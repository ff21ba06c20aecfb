use std::{
    io::{self, Read, Write},
    process::{Command, Stdio},
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread,
    time::{Duration, Instant},
};

use log::{debug, warn};

use super::{SnapshotError, SnapshotService};

const POLL_INTERVAL: Duration = Duration::from_millis(40);

/// Runs an external program per capture: markup goes to its stdin, image
/// bytes come back on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSnapshotter {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSnapshotter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl SnapshotService for CommandSnapshotter {
    fn capture(&self, markup: &str, timeout: Duration) -> Result<Vec<u8>, SnapshotError> {
        debug!("Running snapshot command {} {:?}", self.program, self.args);
        let deadline = Instant::now() + timeout;
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SnapshotError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Pipes are served on detached threads so a full pipe buffer cannot
        // stall the child. A thread whose pipe is still held open by a
        // leftover process exits once that process closes it; the deadline
        // never waits on it.
        if let Some(mut stdin) = child.stdin.take() {
            let input = markup.as_bytes().to_vec();
            thread::spawn(move || {
                if let Err(e) = stdin.write_all(&input)
                    && e.kind() != io::ErrorKind::BrokenPipe
                {
                    debug!("Writing markup to snapshot command failed: {e}");
                }
            });
        }
        let (tx, rx) = mpsc::channel();
        if let Some(stdout) = child.stdout.take() {
            spawn_reader(Pipe::Stdout, stdout, tx.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            spawn_reader(Pipe::Stderr, stderr, tx.clone());
        }
        drop(tx);

        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            let now = Instant::now();
            if now >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(self.timed_out(timeout));
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        };

        let mut image = Vec::new();
        let mut stderr = Vec::new();
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match rx.recv_timeout(remaining) {
                Ok((Pipe::Stdout, bytes)) => image = bytes?,
                Ok((Pipe::Stderr, bytes)) => stderr = bytes?,
                // Every reader has finished.
                Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => return Err(self.timed_out(timeout)),
            }
        }

        if !status.success() {
            return Err(SnapshotError::Failed {
                status,
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }
        if image.is_empty() {
            return Err(SnapshotError::EmptyImage);
        }
        debug!("Snapshot produced {} bytes", image.len());
        Ok(image)
    }
}

impl CommandSnapshotter {
    fn timed_out(&self, timeout: Duration) -> SnapshotError {
        warn!("Snapshot command {} timed out after {timeout:?}", self.program);
        SnapshotError::TimedOut(timeout)
    }
}

#[derive(Debug, Clone, Copy)]
enum Pipe {
    Stdout,
    Stderr,
}

fn spawn_reader<R: Read + Send + 'static>(
    pipe: Pipe,
    mut source: R,
    tx: Sender<(Pipe, io::Result<Vec<u8>>)>,
) {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let result = source.read_to_end(&mut buf).map(|_| buf);
        // The receiver is gone once the capture has given up.
        let _ = tx.send((pipe, result));
    });
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sh(script: &str) -> CommandSnapshotter {
        CommandSnapshotter::new("sh", vec!["-c".into(), script.into()])
    }

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn image_is_read_from_stdout() {
        let image = CommandSnapshotter::new("cat", vec![])
            .capture("<b>hi</b>", 10 * SECOND)
            .unwrap();
        assert_eq!(image, b"<b>hi</b>");
    }

    #[test]
    fn runs_script_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("shot.sh");
        std::fs::write(&script, "cat >/dev/null\nprintf 'PNG'\n").unwrap();

        let snapshotter = CommandSnapshotter::new("sh", vec![script.display().to_string()]);
        assert_eq!(snapshotter.capture("x", 10 * SECOND).unwrap(), b"PNG");
    }

    #[test]
    fn non_zero_exit_reports_stderr() {
        let err = sh("echo boom >&2; exit 3")
            .capture("x", 10 * SECOND)
            .unwrap_err();
        match err {
            SnapshotError::Failed { status, stderr } => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_output_is_an_error() {
        let err = sh("cat >/dev/null").capture("x", 10 * SECOND).unwrap_err();
        assert!(matches!(err, SnapshotError::EmptyImage));
    }

    #[test]
    fn slow_command_times_out() {
        let started = Instant::now();
        let err = sh("sleep 5").capture("x", Duration::from_millis(100)).unwrap_err();
        assert!(matches!(err, SnapshotError::TimedOut(_)));
        assert!(started.elapsed() < 4 * SECOND);
    }

    #[test]
    fn leftover_process_holding_stdout_does_not_outlast_timeout() {
        let started = Instant::now();
        let err = sh("cat >/dev/null; (sleep 4 &); printf PNG")
            .capture("x", Duration::from_millis(300))
            .unwrap_err();
        assert!(matches!(err, SnapshotError::TimedOut(_)));
        assert!(started.elapsed() < 2 * SECOND);
    }

    #[test]
    fn large_output_is_drained_while_waiting() {
        let image = sh("cat >/dev/null; head -c 1000000 /dev/zero")
            .capture("x", 10 * SECOND)
            .unwrap();
        assert_eq!(image.len(), 1_000_000);
    }

    #[test]
    fn missing_program_fails_to_spawn() {
        let err = CommandSnapshotter::new("/nonexistent/tagshot-snapper", vec![])
            .capture("x", SECOND)
            .unwrap_err();
        assert!(matches!(err, SnapshotError::Spawn { .. }));
    }
}
