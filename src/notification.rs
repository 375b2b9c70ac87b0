//! Toast notifications
//!
//! User-visible, non-fatal messages produced by the form, submission and
//! review workflows. Rendering is left to the hosting surface.

use std::fmt;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl NotificationType {
    /// Get the icon/prefix for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    /// Whether the notification reports something the user has to act on
    pub fn is_problem(&self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

/// A toast notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline, e.g. "Request Submitted"
    pub title: String,
    /// Longer explanation
    pub description: String,
    /// Type of notification
    pub notification_type: NotificationType,
}

impl Notification {
    /// Create a new notification
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        notification_type: NotificationType,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            notification_type,
        }
    }

    /// Create an info notification
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationType::Info)
    }

    /// Create a success notification
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationType::Success)
    }

    /// Create a warning notification
    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationType::Warning)
    }

    /// Create an error notification
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NotificationType::Error)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.notification_type.icon(),
            self.title,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::success("Request Submitted", "Done.");
        assert_eq!(n.title, "Request Submitted");
        assert_eq!(n.notification_type, NotificationType::Success);
        assert!(!n.notification_type.is_problem());
    }

    #[test]
    fn test_display() {
        let n = Notification::warning("Cannot Remove Row", "At least one row must remain");
        assert_eq!(
            n.to_string(),
            "[!] Cannot Remove Row: At least one row must remain"
        );
        assert!(n.notification_type.is_problem());
    }
}
