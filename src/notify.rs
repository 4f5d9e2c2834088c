//! User-facing status notifications
//!
//! Fire-and-forget: the board reports operation outcomes here and never
//! inspects the result. Presentation (duration, placement) is the
//! implementation's concern.

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Sink for short-lived status messages
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Notifier that routes messages to the log facade
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Info => log::info!("{}", message),
            NoticeKind::Error => log::error!("{}", message),
        }
    }
}
