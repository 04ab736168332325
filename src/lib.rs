//! MediaHub folder client.
//!
//! Builds the folder tree shown by the explorer, computes valid destinations
//! for the move dialog, and resolves breadcrumb trails, all on top of the
//! backend's folder API.
//!
//! This library exposes modules for use in integration tests and the CLI.

pub mod adapters;
pub mod api;
pub mod breadcrumbs;
pub mod cli;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod models;
pub mod state;
pub mod traits;

pub use breadcrumbs::{resolve_breadcrumbs, BreadcrumbError, BreadcrumbResolver};
pub use hierarchy::{build_hierarchy, prune_descendants, MoveSubject};
