//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryFolders`] - Folder lookup backed by a vector

pub mod folders;
pub mod http;

pub use folders::InMemoryFolders;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
