//! Result type alias for MediaHub operations.

use super::context::ErrorContext;
use super::mediahub_error::MediaHubError;

/// Type alias for Results using MediaHubError.
pub type MediaHubResult<T> = Result<T, MediaHubError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    ///
    /// ```ignore
    /// use mediahub::error::{ErrorContext, ResultExt};
    ///
    /// let folder = client
    ///     .get_folder(id)
    ///     .await
    ///     .context(ErrorContext::new("get_folder").with_folder_id(id))?;
    /// ```
    fn context(self, ctx: ErrorContext) -> MediaHubResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> MediaHubResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<MediaHubError>,
{
    fn context(self, ctx: ErrorContext) -> MediaHubResult<T> {
        self.map_err(|e| e.into().with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> MediaHubResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.into().with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn test_context_on_err() {
        let result: Result<(), NetworkError> = Err(NetworkError::InvalidUrl {
            url: "::".to_string(),
        });
        let err = result.context(ErrorContext::new("list_folders")).unwrap_err();
        assert_eq!(err.context().unwrap().operation, "list_folders");
    }

    #[test]
    fn test_with_context_not_called_on_ok() {
        let result: MediaHubResult<u8> = Ok(1);
        let value = result
            .with_context(|| panic!("context built for Ok value"))
            .unwrap();
        assert_eq!(value, 1);
    }
}
