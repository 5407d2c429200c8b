use std::time::Duration;

use crate::FormValues;

/// External side effect fired once per accepted submission.
pub trait SubmitHandler {
    fn submitted(&mut self, values: &FormValues);
}

impl<F: FnMut(&FormValues)> SubmitHandler for F {
    fn submitted(&mut self, values: &FormValues) {
        self(values)
    }
}

/// Logs the accepted payload and nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmission;

impl SubmitHandler for LogSubmission {
    fn submitted(&mut self, values: &FormValues) {
        match serde_json::to_string(values) {
            Ok(payload) => tracing::info!(%payload, "Contact form submitted"),
            Err(err) => tracing::error!(error = %err, "Failed to serialize contact form payload"),
        }
    }
}

/// Transient acknowledgement shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            title: "Message Sent!".to_owned(),
            description: "Thanks for completing the form. We'll be in touch soon!".to_owned(),
            duration: Duration::from_secs(5),
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: &Notification) {
        tracing::info!(
            title = %notification.title,
            description = %notification.description,
            duration = ?notification.duration,
            "Showing notification"
        );
    }
}
