//! Error context for enriched error information.

use chrono::{DateTime, Utc};

/// Where and when an error happened.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Operation that failed, e.g. `list_folders`.
    pub operation: String,
    /// Folder the operation was about, if any.
    pub folder_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Component the error originated in.
    pub component: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            folder_id: None,
            timestamp: Utc::now(),
            component: None,
        }
    }

    pub fn with_folder_id(mut self, folder_id: impl Into<String>) -> Self {
        self.folder_id = Some(folder_id.into());
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// `key=value` form for structured logs.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];
        if let Some(ref folder_id) = self.folder_id {
            parts.push(format!("folder_id={}", folder_id));
        }
        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }
        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));
        parts.join(" ")
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;
        if let Some(ref folder_id) = self.folder_id {
            write!(f, " folder={}", folder_id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder() {
        let ctx = ErrorContext::new("get_folder")
            .with_folder_id("f-1")
            .with_component("folder_api");
        assert_eq!(ctx.operation, "get_folder");
        assert_eq!(ctx.folder_id.as_deref(), Some("f-1"));
        assert_eq!(ctx.component.as_deref(), Some("folder_api"));
    }

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("get_folder").with_folder_id("f-1");
        assert_eq!(format!("{}", ctx), "[get_folder] folder=f-1");
        assert_eq!(format!("{}", ErrorContext::new("list")), "[list]");
    }

    #[test]
    fn test_context_to_log_string() {
        let log = ErrorContext::new("delete_folder")
            .with_component("cli")
            .to_log_string();
        assert!(log.contains("operation=delete_folder"));
        assert!(log.contains("component=cli"));
        assert!(log.contains("timestamp="));
        assert!(!log.contains("folder_id="));
    }

    #[test]
    fn test_context_default() {
        assert_eq!(ErrorContext::default().operation, "unknown");
    }
}
