//! Two-tier clipboard: try the primary sink, fall back to the secondary, and
//! only confirm to the user when one of them succeeded.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Arc;

use adcraft_core::config::ClipboardConfig;
use adcraft_core::{AdCraftError, AdCraftResult};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::notifier::Notifier;

pub const COPIED_NOTICE: &str = "Copied to clipboard";

/// A destination that can receive copied text.
pub trait ClipboardSink: Send + Sync {
    fn name(&self) -> &str;
    fn write_text(&self, text: &str) -> AdCraftResult<()>;
}

/// Pipes text into an external command such as `xclip` or `pbcopy`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Parse a whitespace-separated command line. Returns `None` when empty.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl ClipboardSink for CommandClipboard {
    fn name(&self) -> &str {
        &self.program
    }

    fn write_text(&self, text: &str) -> AdCraftResult<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                // Reap the child before reporting the failed write.
                let _ = child.kill();
                let _ = child.wait();
                return Err(err.into());
            }
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(AdCraftError::Clipboard(format!(
                "{} exited with {status}",
                self.program
            )))
        }
    }
}

/// Writes copied text to a file.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ClipboardSink for FileClipboard {
    fn name(&self) -> &str {
        "file"
    }

    fn write_text(&self, text: &str) -> AdCraftResult<()> {
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Sink that always fails; stands in for a missing clipboard command.
struct Unavailable;

impl ClipboardSink for Unavailable {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn write_text(&self, _text: &str) -> AdCraftResult<()> {
        Err(AdCraftError::Clipboard(
            "no clipboard command configured".to_string(),
        ))
    }
}

/// Result of a copy action, used to drive "Copied!" feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyOutcome {
    /// Written by the primary sink.
    Primary,
    /// Primary failed; written by the secondary sink.
    Fallback,
    /// Both sinks failed; nothing was confirmed to the user.
    Failed,
    /// Nothing to copy.
    Skipped,
}

impl CopyOutcome {
    pub fn copied(&self) -> bool {
        matches!(self, CopyOutcome::Primary | CopyOutcome::Fallback)
    }
}

pub struct Clipboard {
    primary: Box<dyn ClipboardSink>,
    fallback: Box<dyn ClipboardSink>,
    notifier: Arc<Notifier>,
}

impl Clipboard {
    pub fn new(
        primary: Box<dyn ClipboardSink>,
        fallback: Box<dyn ClipboardSink>,
        notifier: Arc<Notifier>,
    ) -> Self {
        Self {
            primary,
            fallback,
            notifier,
        }
    }

    /// Command sink first, fallback file second, as configured.
    pub fn from_config(config: &ClipboardConfig, notifier: Arc<Notifier>) -> Self {
        let primary: Box<dyn ClipboardSink> =
            match CommandClipboard::from_command_line(&config.command) {
                Some(command) => Box::new(command),
                None => Box::new(Unavailable),
            };
        Self::new(
            primary,
            Box::new(FileClipboard::new(&config.fallback_path)),
            notifier,
        )
    }

    /// Copy `text`, degrading to the fallback sink on failure.
    pub fn copy(&self, text: &str) -> CopyOutcome {
        if text.is_empty() {
            return CopyOutcome::Skipped;
        }

        let outcome = match self.primary.write_text(text) {
            Ok(()) => {
                debug!(sink = self.primary.name(), bytes = text.len(), "copied text");
                CopyOutcome::Primary
            }
            Err(primary_err) => {
                warn!(
                    sink = self.primary.name(),
                    error = %primary_err,
                    "primary clipboard failed, trying fallback"
                );
                match self.fallback.write_text(text) {
                    Ok(()) => {
                        debug!(sink = self.fallback.name(), bytes = text.len(), "copied text");
                        CopyOutcome::Fallback
                    }
                    Err(fallback_err) => {
                        error!(
                            sink = self.fallback.name(),
                            error = %fallback_err,
                            "copy failed"
                        );
                        CopyOutcome::Failed
                    }
                }
            }
        };

        if outcome.copied() {
            self.notifier.show(COPIED_NOTICE);
        }
        outcome
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::notifier::tests::CaptureSink;
    use std::time::Duration;

    /// In-memory sink that can be told to fail.
    pub(crate) struct MemorySink {
        pub(crate) fail: bool,
        pub(crate) written: Arc<parking_lot::Mutex<Vec<String>>>,
    }

    impl MemorySink {
        pub(crate) fn new(fail: bool) -> Self {
            Self {
                fail,
                written: Arc::new(parking_lot::Mutex::new(Vec::new())),
            }
        }
    }

    impl ClipboardSink for MemorySink {
        fn name(&self) -> &str {
            "memory"
        }

        fn write_text(&self, text: &str) -> AdCraftResult<()> {
            if self.fail {
                return Err(AdCraftError::Clipboard("denied".to_string()));
            }
            self.written.lock().push(text.to_string());
            Ok(())
        }
    }

    fn notifier() -> (Arc<CaptureSink>, Arc<Notifier>) {
        let sink = Arc::new(CaptureSink::default());
        let notifier = Arc::new(Notifier::new(sink.clone(), Duration::from_millis(1800)));
        (sink, notifier)
    }

    #[tokio::test]
    async fn test_primary_success() {
        let (notices, notifier) = notifier();
        let primary = MemorySink::new(false);
        let written = primary.written.clone();
        let clipboard = Clipboard::new(Box::new(primary), Box::new(MemorySink::new(false)), notifier);

        assert_eq!(clipboard.copy("hello"), CopyOutcome::Primary);
        assert_eq!(*written.lock(), vec!["hello"]);
        assert_eq!(*notices.shown.lock(), vec![COPIED_NOTICE]);
    }

    #[tokio::test]
    async fn test_falls_back_when_primary_fails() {
        let (notices, notifier) = notifier();
        let fallback = MemorySink::new(false);
        let written = fallback.written.clone();
        let clipboard = Clipboard::new(Box::new(MemorySink::new(true)), Box::new(fallback), notifier);

        assert_eq!(clipboard.copy("hello"), CopyOutcome::Fallback);
        assert_eq!(*written.lock(), vec!["hello"]);
        assert_eq!(notices.shown.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_no_notice_when_both_fail() {
        let (notices, notifier) = notifier();
        let clipboard = Clipboard::new(
            Box::new(MemorySink::new(true)),
            Box::new(MemorySink::new(true)),
            notifier.clone(),
        );

        assert_eq!(clipboard.copy("hello"), CopyOutcome::Failed);
        assert!(notices.shown.lock().is_empty());
        assert!(notifier.current().is_none());
    }

    #[tokio::test]
    async fn test_empty_text_is_skipped() {
        let (_, notifier) = notifier();
        let primary = MemorySink::new(false);
        let written = primary.written.clone();
        let clipboard = Clipboard::new(Box::new(primary), Box::new(MemorySink::new(false)), notifier);

        assert_eq!(clipboard.copy(""), CopyOutcome::Skipped);
        assert!(written.lock().is_empty());
    }

    #[test]
    fn test_command_line_parsing() {
        let command = CommandClipboard::from_command_line("xclip -selection clipboard").unwrap();
        assert_eq!(command.name(), "xclip");
        assert_eq!(command.args, vec!["-selection", "clipboard"]);
        assert!(CommandClipboard::from_command_line("   ").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_that_stops_reading_fails_without_hanging() {
        let command = CommandClipboard::from_command_line("true").unwrap();
        let text = "x".repeat(1024 * 1024);

        let err = command.write_text(&text).unwrap_err();
        assert!(matches!(
            err,
            AdCraftError::Io(_) | AdCraftError::Clipboard(_)
        ));
    }

    #[tokio::test]
    async fn test_missing_command_uses_fallback_file() {
        let (_, notifier) = notifier();
        let path = std::env::temp_dir().join(format!("adcraft-clip-{}.txt", std::process::id()));
        let config = ClipboardConfig {
            command: "adcraft-definitely-not-a-real-clipboard-binary".to_string(),
            fallback_path: path.to_string_lossy().into_owned(),
        };
        let clipboard = Clipboard::from_config(&config, notifier);

        assert_eq!(clipboard.copy("fallback text"), CopyOutcome::Fallback);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fallback text");
        std::fs::remove_file(&path).ok();
    }
}
