//! Shared test helpers for `evolution-core` integration tests.
//!
//! Modules are exercised against an in-memory transport so that paths,
//! bodies and call counts can be asserted without a network.

pub mod transport;
