//! Version command for the mediahub CLI.

/// The current version of mediahub, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("mediahub {}", VERSION)
}
