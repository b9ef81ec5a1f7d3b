//! # Evolution Core
//!
//! Transport-agnostic client logic - no HTTP code.
//!
//! This crate contains:
//! - The `Transport` port and its verb helpers
//! - Failure classification, the fixed-delay retry loop and error
//!   normalization used by transport adapters
//! - The instance-scope capability shared by every module
//! - The gateway resource modules, written against the port
//!
//! ## Architecture Principles
//! - Only depends on `evolution-domain`
//! - All network I/O goes through `Transport`
//! - Modules are plain structs with an injected transport

pub mod failure;
pub mod modules;
pub mod retry;
pub mod scope;
pub mod transport;

pub use failure::{classify, normalize, Classification, FailureKind, TransportFailure};
pub use modules::{
    CallModule, ChatModule, GroupModule, InstanceModule, IntegrationsModule, LabelModule,
    MessageModule, ProfileModule, ProxyModule, SettingsModule,
};
pub use retry::{run_with_retry, RetryError, RetryPolicy};
pub use scope::{InstanceScope, Scoped};
pub use transport::Transport;
