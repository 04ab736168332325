//! Unified error handling for the MediaHub client.
//!
//! - **Error categories** decide retry behavior and recovery hints
//! - **Domain errors**: network, folder, configuration
//! - **`MediaHubError`** wraps them all and can carry an [`ErrorContext`]
//! - **`MediaHubResult<T>`** and [`ResultExt`] for attaching context
//!
//! The hierarchy and breadcrumb code never surface these to the user: a
//! dangling parent or a failed lookup degrades to less output instead. They
//! exist for the API client and the command-line front end.
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection failures, timeouts | Yes |
//! | Server | Backend errors (5xx) | Yes |
//! | Client | Undecodable responses | No |
//! | User | Unknown folder, invalid move | No |
//! | Configuration | Bad settings | No |

mod category;
mod config;
mod context;
mod folder;
mod mediahub_error;
mod network;
mod result;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use folder::FolderError;
pub use mediahub_error::MediaHubError;
pub use network::NetworkError;
pub use result::{MediaHubResult, ResultExt};
