//! Integration tests for Doceria.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront with a throwaway data dir
//! DOCERIA_DATA_DIR=$(mktemp -d) cargo run -p doceria-storefront
//!
//! # Run integration tests
//! cargo test -p doceria-integration-tests -- --ignored
//! ```
//!
//! Tests talk to a running server over HTTP (`DOCERIA_BASE_URL`,
//! default `http://localhost:3000`) and are `#[ignore]`d so plain
//! `cargo test` stays hermetic.

/// Base URL for the storefront API (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("DOCERIA_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}
