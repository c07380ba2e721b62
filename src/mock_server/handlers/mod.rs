//! HTTP request handlers for the mock server.

pub mod posts;

pub use posts::*;
