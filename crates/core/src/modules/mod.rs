//! Gateway resource modules
//!
//! Each module resolves the target instance first and then issues a single
//! request through the shared [`Transport`](crate::transport::Transport).

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use evolution_domain::Result;

pub mod call;
pub mod chat;
pub mod group;
pub mod instance;
pub mod integrations;
pub mod label;
pub mod message;
pub mod profile;
pub mod proxy;
pub mod settings;

pub use call::CallModule;
pub use chat::ChatModule;
pub use group::GroupModule;
pub use instance::InstanceModule;
pub use integrations::IntegrationsModule;
pub use label::LabelModule;
pub use message::MessageModule;
pub use profile::ProfileModule;
pub use proxy::ProxyModule;
pub use settings::SettingsModule;

/// Constructor and [`Scoped`](crate::scope::Scoped) impl for a module struct
/// with `transport` and `scope` fields.
macro_rules! impl_scoped_module {
    ($module:ident) => {
        impl $module {
            pub fn new(transport: std::sync::Arc<dyn $crate::transport::Transport>) -> Self {
                Self { transport, scope: $crate::scope::InstanceScope::new() }
            }
        }

        impl $crate::scope::Scoped for $module {
            fn scope(&self) -> &$crate::scope::InstanceScope {
                &self.scope
            }
        }

        impl std::fmt::Debug for $module {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($module)).field("scope", &self.scope).finish()
            }
        }
    };
}

pub(crate) use impl_scoped_module;

pub(crate) fn to_body<T: Serialize>(payload: &T) -> Result<Value> {
    Ok(serde_json::to_value(payload)?)
}

pub(crate) fn from_body<T: DeserializeOwned>(body: Value) -> Result<T> {
    Ok(serde_json::from_value(body)?)
}
