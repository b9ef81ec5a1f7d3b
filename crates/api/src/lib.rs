//! # Evolution API
//!
//! Typed async client for the Evolution API WhatsApp gateway.
//!
//! This crate contains:
//! - The `EvolutionApi` facade composing every resource module
//! - Re-exports of the types needed to call it
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the HTTP transport into the transport-agnostic modules
//!
//! ```no_run
//! use evolution_api::{ClientConfig, EvolutionApi, SendTextOptions};
//!
//! # async fn run() -> evolution_api::Result<()> {
//! let api = EvolutionApi::new(ClientConfig::new("https://gateway.example").with_api_key("key"))?;
//! api.use_instance("sales");
//! api.message().send_text(&SendTextOptions::new("5511999999999", "hi"), None).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;

pub use client::EvolutionApi;
pub use evolution_core::modules::{
    CallModule, ChatModule, GroupModule, InstanceModule, IntegrationsModule, LabelModule,
    MessageModule, ProfileModule, ProxyModule, SettingsModule,
};
pub use evolution_core::{InstanceScope, RetryPolicy, Scoped, Transport};
pub use evolution_domain::*;
pub use evolution_infra::{config, init_tracing, HttpTransport, HttpTransportBuilder, LogFormat};
pub use serde_json::Value;
pub use tokio_util::sync::CancellationToken;
