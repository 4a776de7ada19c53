//! WordPress content client library
//!
//! This module exposes the response cache, HTTP client wrapper, and
//! resource accessors for use by the CLI binary and integration tests.

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod data;
pub mod text;
