//! Error category classification.
//!
//! Categories drive retry decisions and the hint shown next to an error.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection failures and timeouts. Retryable.
    Network,

    /// Backend answered with a 5xx. Retryable after a delay.
    Server,

    /// Malformed responses or programming errors. Not retryable.
    Client,

    /// The request itself was wrong (unknown folder, invalid move).
    /// Not retryable until the user changes it.
    User,

    /// Missing or invalid settings.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Short label for logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::Configuration => "configuration",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::Server => "Server-side issue",
            ErrorCategory::Client => "Application error",
            ErrorCategory::User => "User action required",
            ErrorCategory::Configuration => "Configuration problem",
        }
    }

    /// Suggested recovery action for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the MediaHub API is reachable and try again",
            ErrorCategory::Server => {
                "The server may be experiencing issues. Please try again later"
            }
            ErrorCategory::Client => "This may be a bug. Please report this issue if it persists",
            ErrorCategory::User => "Please check the folder and try again",
            ErrorCategory::Configuration => "Check MEDIAHUB_API_URL and related settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Network.is_retryable());
        assert!(ErrorCategory::Server.is_retryable());
        assert!(!ErrorCategory::Client.is_retryable());
        assert!(!ErrorCategory::User.is_retryable());
        assert!(!ErrorCategory::Configuration.is_retryable());
    }

    #[test]
    fn test_category_as_str_and_display() {
        assert_eq!(ErrorCategory::Network.as_str(), "network");
        assert_eq!(ErrorCategory::Configuration.as_str(), "configuration");
        assert_eq!(format!("{}", ErrorCategory::Server), "server");
    }

    #[test]
    fn test_category_hints() {
        assert!(ErrorCategory::Network.recovery_hint().contains("reachable"));
        assert!(ErrorCategory::Configuration
            .recovery_hint()
            .contains("MEDIAHUB_API_URL"));
        assert!(ErrorCategory::Server.description().contains("Server"));
    }
}
