use serde::Serialize;
use tracing::info;

/// A structured application event for the survey lifecycle.
///
/// Emitted via `tracing` so the embedding application's subscriber decides
/// where they go; the session itself never performs I/O.
#[derive(Debug, Clone, Serialize)]
pub struct SessionEvent {
    pub action: String,
    pub details: Option<serde_json::Value>,
}

impl SessionEvent {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this event via tracing.
    pub fn emit(&self) {
        info!(
            session.action = %self.action,
            session.details = ?self.details,
            "session event"
        );
    }
}
