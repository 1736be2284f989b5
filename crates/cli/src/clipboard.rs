//! System clipboard access through `pbcopy`.

use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;

const PBCOPY: &str = "pbcopy";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("failed to start pbcopy: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("failed to write to pbcopy: {0}")]
    Write(#[source] std::io::Error),

    #[error("pbcopy has no stdin")]
    NoStdin,

    #[error("failed to wait for pbcopy: {0}")]
    Wait(#[source] std::io::Error),

    #[error("pbcopy exited with {0}")]
    Failed(std::process::ExitStatus),
}

fn command_exists(name: &str) -> bool {
    Command::new("sh")
        .arg("-c")
        .arg(format!("command -v {name} >/dev/null 2>&1"))
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub fn is_available() -> bool {
    command_exists(PBCOPY)
}

pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(PBCOPY)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(ClipboardError::Spawn)?;

    let mut stdin = child.stdin.take().ok_or(ClipboardError::NoStdin)?;
    stdin.write_all(text.as_bytes()).map_err(ClipboardError::Write)?;
    drop(stdin);

    let status = child.wait().map_err(ClipboardError::Wait)?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Failed(status))
    }
}
