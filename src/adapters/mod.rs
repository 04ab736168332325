//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! The folder API client in [`crate::api`] is the production
//! [`FolderLookup`](crate::traits::FolderLookup).
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::InMemoryFolders`] - In-memory folder store with failure injection

pub mod mock;
pub mod reqwest_http;

pub use mock::{InMemoryFolders, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
