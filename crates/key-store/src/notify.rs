//! User-facing notifications.
//!
//! The store itself never notifies; callers report the outcome of each
//! operation through a [`Notifier`].

use std::fmt;

/// Severity class of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient message with a severity class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }
}

/// Displays notifications to the user.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Notifier that forwards everything to the `log` facade.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Success => log::info!("{}", notification.message),
            Severity::Warning => log::warn!("{}", notification.message),
            Severity::Error => log::error!("{}", notification.message),
        }
    }
}

/// Collects notifications in memory.
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::Success.to_string(), "success");
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_vec_collects_in_order() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.notify(Notification::success("created"));
        sink.notify(Notification::warning("missing"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0], Notification::success("created"));
        assert_eq!(sink[1].severity, Severity::Warning);
    }

    #[test]
    fn test_log_notifier_accepts_all_severities() {
        let mut notifier = LogNotifier;
        notifier.notify(Notification::success("ok"));
        notifier.notify(Notification::warning("hmm"));
        notifier.notify(Notification::error("bad"));
    }
}
