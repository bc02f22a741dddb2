//! Caller-side studio for the ad-copy generator: input validation, a
//! swappable generation backend, toast notices, clipboard with fallback
//! and plain-text result cards.

pub mod backend;
pub mod clipboard;
pub mod notifier;
pub mod render;
pub mod session;

pub use backend::{GenerationBackend, GenerationBatch, MockBackend};
pub use clipboard::{Clipboard, ClipboardSink, CopyOutcome};
pub use notifier::{LogSink, NoticeSink, Notifier};
pub use session::StudioSession;
