//! System clipboard access through the platform's copy utility.
//!
//! - macOS: `pbcopy`
//! - Linux: `xclip`, falling back to `xsel`
//! - Windows: `clip`

use crate::error::{Result, TasklineError};
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

/// Copies `text` to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_to("xclip", &["-selection", "clipboard"], text)
            .or_else(|_| pipe_to("xsel", &["--clipboard", "--input"], text))
            .map_err(|e| match e {
                TasklineError::Clipboard(msg) => {
                    TasklineError::Clipboard(format!("{}. Install xclip or xsel.", msg))
                }
                other => other,
            })
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(TasklineError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

/// Joins item descriptions the way `tl copy` places them on the clipboard: one per line.
pub fn format_descriptions<T: AsRef<str>>(descriptions: &[T]) -> String {
    descriptions
        .iter()
        .map(|d| d.as_ref())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg_attr(
    not(any(target_os = "macos", target_os = "linux", target_os = "windows")),
    allow(dead_code)
)]
fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| TasklineError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| {
            TasklineError::Clipboard(format!("Failed to write to {}: {}", program, e))
        })?;
    }

    let status = child
        .wait()
        .map_err(|e| TasklineError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;
    if !status.success() {
        return Err(TasklineError::Clipboard(format!("{} exited with {}", program, status)));
    }

    debug!(program, bytes = text.len(), "copied to clipboard");
    Ok(())
}
