//! AWS-oriented adapters and handlers for the hello-bucket fixtures.
//!
//! This crate owns runtime integration details (Lambda handler, S3 adapter and
//! structured log lines). Each binary under `src/bin` is one deployable
//! fixture and differs from its siblings only in its `FixtureProfile`.

pub mod adapters;
pub mod handlers;
pub mod logging;
pub mod runtime;
