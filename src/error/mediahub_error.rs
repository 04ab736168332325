//! Unified error type for the MediaHub client.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::folder::FolderError;
use super::network::NetworkError;
use crate::traits::FolderLookupError;

/// Every error the client can surface, with categorization and user
/// messaging on top.
#[derive(Debug)]
pub enum MediaHubError {
    /// Transport and HTTP status errors.
    Network(NetworkError),

    /// Folder domain errors.
    Folder(FolderError),

    /// Invalid settings.
    Config(ConfigError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<MediaHubError>,
        context: ErrorContext,
    },
}

impl MediaHubError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MediaHubError::Network(err) => match err {
                NetworkError::HttpStatus { status, .. } if *status >= 500 => ErrorCategory::Server,
                NetworkError::HttpStatus { .. } => ErrorCategory::User,
                NetworkError::InvalidResponse { .. } => ErrorCategory::Client,
                NetworkError::InvalidUrl { .. } => ErrorCategory::Configuration,
                _ => ErrorCategory::Network,
            },
            MediaHubError::Folder(_) => ErrorCategory::User,
            MediaHubError::Config(_) => ErrorCategory::Configuration,
            MediaHubError::WithContext { error, .. } => error.category(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            MediaHubError::Network(err) => err.is_retryable(),
            MediaHubError::Folder(_) | MediaHubError::Config(_) => false,
            MediaHubError::WithContext { error, .. } => error.is_retryable(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            MediaHubError::Network(err) => err.user_message(),
            MediaHubError::Folder(err) => err.user_message(),
            MediaHubError::Config(err) => err.user_message(),
            MediaHubError::WithContext { error, context } => {
                format!("{}\n\nContext: {}", error.user_message(), context)
            }
        }
    }

    /// Short code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            MediaHubError::Network(err) => err.error_code(),
            MediaHubError::Folder(err) => err.error_code(),
            MediaHubError::Config(err) => err.error_code(),
            MediaHubError::WithContext { error, .. } => error.error_code(),
        }
    }

    pub fn with_context(self, ctx: ErrorContext) -> Self {
        MediaHubError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            MediaHubError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The innermost error, with all context layers stripped.
    pub fn inner(&self) -> &MediaHubError {
        match self {
            MediaHubError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self.inner(),
            MediaHubError::Folder(FolderError::NotFound { .. })
                | MediaHubError::Network(NetworkError::HttpStatus { status: 404, .. })
        )
    }
}

impl fmt::Display for MediaHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaHubError::Network(err) => write!(f, "{}", err),
            MediaHubError::Folder(err) => write!(f, "{}", err),
            MediaHubError::Config(err) => write!(f, "{}", err),
            MediaHubError::WithContext { error, context } => write!(f, "{} ({})", error, context),
        }
    }
}

impl std::error::Error for MediaHubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MediaHubError::Network(err) => Some(err),
            MediaHubError::Folder(err) => Some(err),
            MediaHubError::Config(err) => Some(err),
            MediaHubError::WithContext { error, .. } => error.source(),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<NetworkError> for MediaHubError {
    fn from(err: NetworkError) -> Self {
        MediaHubError::Network(err)
    }
}

impl From<FolderError> for MediaHubError {
    fn from(err: FolderError) -> Self {
        MediaHubError::Folder(err)
    }
}

impl From<ConfigError> for MediaHubError {
    fn from(err: ConfigError) -> Self {
        MediaHubError::Config(err)
    }
}

impl From<serde_json::Error> for MediaHubError {
    fn from(err: serde_json::Error) -> Self {
        MediaHubError::Network(NetworkError::InvalidResponse {
            message: err.to_string(),
        })
    }
}

/// Collapse a client error into the narrower lookup error the hierarchy and
/// breadcrumb code deals in.
impl From<MediaHubError> for FolderLookupError {
    fn from(err: MediaHubError) -> Self {
        if err.is_not_found() {
            let folder_id = match err.inner() {
                MediaHubError::Folder(FolderError::NotFound { folder_id }) => folder_id.clone(),
                _ => err
                    .context()
                    .and_then(|ctx| ctx.folder_id.clone())
                    .unwrap_or_default(),
            };
            return FolderLookupError::NotFound(folder_id);
        }
        match err.inner() {
            MediaHubError::Network(NetworkError::InvalidResponse { message }) => {
                FolderLookupError::InvalidResponse(message.clone())
            }
            inner => FolderLookupError::Transport(inner.to_string()),
        }
    }
}
