use crate::error::{QuipsError, Result};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long a copy acknowledgment stays visible.
pub const ACK_DURATION: Duration = Duration::from_secs(1);

/// Copies text to the system clipboard in an OS-specific way.
/// - macOS: uses pbcopy
/// - Linux: uses xclip or xsel
/// - Windows: uses clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to(Command::new("pbcopy"), text)
    }

    #[cfg(target_os = "linux")]
    {
        copy_linux(text)
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to(Command::new("clip"), text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(QuipsError::Api(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn copy_linux(text: &str) -> Result<()> {
    let mut xclip = Command::new("xclip");
    xclip.args(["-selection", "clipboard"]);
    if pipe_to(xclip, text).is_ok() {
        return Ok(());
    }

    let mut xsel = Command::new("xsel");
    xsel.args(["--clipboard", "--input"]);
    pipe_to(xsel, text)
        .map_err(|e| QuipsError::Api(format!("{}. Install xclip or xsel.", e)))
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(mut command: Command, text: &str) -> Result<()> {
    use std::io::Write;

    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| QuipsError::Api(format!("Failed to spawn clipboard command: {}", e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| QuipsError::Api(format!("Failed to write to clipboard: {}", e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| QuipsError::Api(format!("Failed to wait for clipboard command: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(QuipsError::Api(
            "Clipboard command exited with error".to_string(),
        ))
    }
}

/// Transient acknowledgment for the most recent successful copy, keyed by
/// snippet id. Holds at most one entry; a newer copy overwrites the older
/// one (last-writer-wins), and the entry expires after [`ACK_DURATION`]
/// with no further action required.
#[derive(Debug, Default)]
pub struct CopyAck {
    current: Option<(Uuid, Instant)>,
}

impl CopyAck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, id: Uuid) {
        self.mark_at(id, Instant::now());
    }

    /// The snippet id whose acknowledgment is still live, if any.
    pub fn current(&self) -> Option<Uuid> {
        self.current_at(Instant::now())
    }

    fn mark_at(&mut self, id: Uuid, now: Instant) {
        self.current = Some((id, now));
    }

    fn current_at(&self, now: Instant) -> Option<Uuid> {
        match self.current {
            Some((id, at)) if now.duration_since(at) < ACK_DURATION => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_is_live_within_the_duration() {
        let mut ack = CopyAck::new();
        let id = Uuid::new_v4();
        let start = Instant::now();

        ack.mark_at(id, start);
        assert_eq!(ack.current_at(start), Some(id));
        assert_eq!(ack.current_at(start + Duration::from_millis(999)), Some(id));
    }

    #[test]
    fn ack_expires_without_further_action() {
        let mut ack = CopyAck::new();
        let id = Uuid::new_v4();
        let start = Instant::now();

        ack.mark_at(id, start);
        assert_eq!(ack.current_at(start + ACK_DURATION), None);
        assert_eq!(ack.current_at(start + Duration::from_secs(60)), None);
    }

    #[test]
    fn newer_copy_overwrites_older_ack() {
        let mut ack = CopyAck::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let start = Instant::now();

        ack.mark_at(first, start);
        ack.mark_at(second, start + Duration::from_millis(500));
        assert_eq!(ack.current_at(start + Duration::from_millis(600)), Some(second));
    }

    #[test]
    fn unmarked_ack_is_empty() {
        let ack = CopyAck::new();
        assert_eq!(ack.current(), None);
    }
}
