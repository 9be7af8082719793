use acai_shared::{Notification, Severity};
use tracing::Level;

/// Receives the outcome of every user action
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Surfaces notifications as log events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    fn level(severity: Severity) -> Level {
        match severity {
            Severity::Success | Severity::Info => Level::INFO,
            Severity::Warning => Level::WARN,
            Severity::Error => Level::ERROR,
        }
    }
}

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: Notification) {
        let Notification { title, message, .. } = &notification;
        let level = Self::level(notification.severity);
        if level == Level::ERROR {
            tracing::error!(%title, %message, "notification");
        } else if level == Level::WARN {
            tracing::warn!(%title, %message, "notification");
        } else {
            tracing::info!(%title, %message, "notification");
        }
    }
}

/// Keeps every notification in order; handy for replaying a session
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notification: Notification) {
        (**self).notify(notification);
    }
}
