//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`FolderLookup`] - Read access to folders, consumed by the hierarchy
//!   and breadcrumb code
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE)

pub mod folders;
pub mod http;

pub use folders::{FolderLookup, FolderLookupError};
pub use http::{Headers, HttpClient, HttpError, Response};
