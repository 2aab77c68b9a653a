use crate::error::ClipboardError;
use std::future::Future;
use std::io::ErrorKind;
use std::pin::Pin;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

const CLIPBOARD_TIMEOUT_SECS: u64 = 5;

/// Platform clipboard tools, tried in order. The first one that starts wins.
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("clip", &[]),
];

pub trait ClipboardBackend: Send + Sync {
    fn write_text<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), ClipboardError>> + Send + 'a>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing to copy.
    Skipped,
    Copied,
}

/// Copy `text` to the clipboard. Empty text is a no-op.
pub async fn copy_to_clipboard(
    backend: &dyn ClipboardBackend,
    text: &str,
) -> Result<CopyOutcome, ClipboardError> {
    if text.is_empty() {
        return Ok(CopyOutcome::Skipped);
    }
    backend.write_text(text).await?;
    tracing::debug!(chars = text.chars().count(), "copied to clipboard");
    Ok(CopyOutcome::Copied)
}

/// Pipes text into whichever clipboard command the system provides.
pub struct SystemClipboard;

impl SystemClipboard {
    async fn pipe_into(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        match tokio::time::timeout(Duration::from_secs(CLIPBOARD_TIMEOUT_SECS), child.wait()).await
        {
            Ok(status) => Ok(status?.success()),
            Err(_) => Err(std::io::Error::new(
                ErrorKind::TimedOut,
                format!("{program} did not exit within {CLIPBOARD_TIMEOUT_SECS}s"),
            )),
        }
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<(), ClipboardError>> + Send + 'a>> {
        Box::pin(async move {
            let mut last_failure = None;
            for (program, args) in CLIPBOARD_TOOLS {
                match Self::pipe_into(program, args, text).await {
                    Ok(true) => {
                        tracing::debug!(tool = program, "clipboard write succeeded");
                        return Ok(());
                    }
                    Ok(false) => {
                        last_failure = Some(format!("{program} exited with an error"));
                    }
                    Err(err) if err.kind() == ErrorKind::NotFound => {}
                    Err(err) => last_failure = Some(format!("{program}: {err}")),
                }
            }
            Err(last_failure.map_or(ClipboardError::Unavailable, ClipboardError::Write))
        })
    }
}
