//! Doceria Storefront library.
//!
//! This crate provides the storefront service as a library, allowing it to
//! be tested and reused by the binary entrypoint.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
