//! Shared hello-bucket fixture primitives.
//!
//! This crate owns fixture profiles, environment naming conventions and the
//! object key/payload contract. It intentionally excludes AWS SDK and Lambda
//! runtime concerns.

pub mod config;
pub mod payload;
