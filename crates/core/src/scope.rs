//! Instance scoping shared by every domain module
//!
//! Each module holds one [`InstanceScope`]: an optional default instance name
//! that any call can override. Resolution happens before the request is
//! built, so a missing instance never reaches the network.

use evolution_domain::{EvolutionError, Result};
use parking_lot::RwLock;

/// Optional default instance for one module
///
/// Reads and writes are serialized through a lock; the last `set` wins.
#[derive(Debug, Default)]
pub struct InstanceScope {
    current: RwLock<Option<String>>,
}

impl InstanceScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start already scoped to `name`.
    pub fn with_instance(name: impl Into<String>) -> Self {
        Self { current: RwLock::new(Some(name.into())) }
    }

    /// Replace the default instance. Empty names are stored but never
    /// resolve.
    pub fn set(&self, name: impl Into<String>) {
        *self.current.write() = Some(name.into());
    }

    /// The stored default instance.
    pub fn get(&self) -> Result<String> {
        self.current
            .read()
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .ok_or(EvolutionError::InstanceNotSet)
    }

    pub fn has(&self) -> bool {
        self.current.read().as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Prefer a non-empty per-call override, else the stored default.
    pub fn resolve(&self, instance: Option<&str>) -> Result<String> {
        match instance.filter(|name| !name.is_empty()) {
            Some(name) => Ok(name.to_owned()),
            None => self.get(),
        }
    }
}

/// A module that carries an [`InstanceScope`]
pub trait Scoped {
    fn scope(&self) -> &InstanceScope;

    /// Set the default instance and hand the module back for chaining.
    fn set_instance(&self, name: impl Into<String>) -> &Self
    where
        Self: Sized,
    {
        self.scope().set(name);
        self
    }

    fn instance(&self) -> Result<String> {
        self.scope().get()
    }

    fn has_instance(&self) -> bool {
        self.scope().has()
    }
}

/// `{prefix}/{instance}` with the instance percent-encoded.
pub(crate) fn instance_path(prefix: &str, instance: &str) -> String {
    format!("{prefix}/{}", urlencoding::encode(instance))
}
