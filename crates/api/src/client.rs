//! Client facade - one transport shared by every module

use std::sync::Arc;

use evolution_core::{
    CallModule, ChatModule, GroupModule, InstanceModule, IntegrationsModule, LabelModule,
    MessageModule, ProfileModule, ProxyModule, Scoped, SettingsModule, Transport,
};
use evolution_domain::{ClientConfig, Result};
use evolution_infra::{config, HttpTransport};
use tracing::info;

/// Entry point of the SDK
///
/// Holds one module per gateway resource area. All modules share the same
/// transport; each keeps its own default instance.
pub struct EvolutionApi {
    config: Option<ClientConfig>,
    transport: Arc<dyn Transport>,
    instance: InstanceModule,
    settings: SettingsModule,
    message: MessageModule,
    chat: ChatModule,
    group: GroupModule,
    profile: ProfileModule,
    label: LabelModule,
    proxy: ProxyModule,
    integrations: IntegrationsModule,
    call: CallModule,
}

impl EvolutionApi {
    /// Validate `config` and connect every module to a fresh HTTP transport.
    ///
    /// # Errors
    /// Returns `EvolutionError::Config` when the base address is empty or
    /// the API key cannot be sent as a header. Nothing is built in that case.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let config = config.validate()?;
        let transport = HttpTransport::from_config(&config)?;

        info!(
            base_url = %config.base_url,
            authenticated = config.api_key.is_some(),
            max_retries = config.max_retries,
            "evolution api client ready"
        );

        let mut api = Self::with_transport(Arc::new(transport));
        api.config = Some(config);
        Ok(api)
    }

    /// Build the modules on top of a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            config: None,
            instance: InstanceModule::new(Arc::clone(&transport)),
            settings: SettingsModule::new(Arc::clone(&transport)),
            message: MessageModule::new(Arc::clone(&transport)),
            chat: ChatModule::new(Arc::clone(&transport)),
            group: GroupModule::new(Arc::clone(&transport)),
            profile: ProfileModule::new(Arc::clone(&transport)),
            label: LabelModule::new(Arc::clone(&transport)),
            proxy: ProxyModule::new(Arc::clone(&transport)),
            integrations: IntegrationsModule::new(Arc::clone(&transport)),
            call: CallModule::new(Arc::clone(&transport)),
            transport,
        }
    }

    /// Configure from `.env`, the environment, or `evolution.{toml,json}`.
    ///
    /// When `EVOLUTION_API_INSTANCE` is set, every module starts scoped to it.
    pub fn from_env() -> Result<Self> {
        let api = Self::new(config::load()?)?;
        if let Some(instance) = config::default_instance_from_env() {
            api.use_instance(instance);
        }
        Ok(api)
    }

    /// Set the default instance on every module.
    ///
    /// Each module is updated in turn; a concurrent call may observe some
    /// modules before the switch and some after.
    pub fn use_instance(&self, name: impl Into<String>) -> &Self {
        let name = name.into();
        self.instance.set_instance(name.as_str());
        self.settings.set_instance(name.as_str());
        self.message.set_instance(name.as_str());
        self.chat.set_instance(name.as_str());
        self.group.set_instance(name.as_str());
        self.profile.set_instance(name.as_str());
        self.label.set_instance(name.as_str());
        self.proxy.set_instance(name.as_str());
        self.integrations.set_instance(name.as_str());
        self.call.set_instance(name);
        self
    }

    /// The validated configuration, absent when built from a custom transport.
    pub const fn config(&self) -> Option<&ClientConfig> {
        self.config.as_ref()
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub const fn instance(&self) -> &InstanceModule {
        &self.instance
    }

    pub const fn settings(&self) -> &SettingsModule {
        &self.settings
    }

    pub const fn message(&self) -> &MessageModule {
        &self.message
    }

    pub const fn chat(&self) -> &ChatModule {
        &self.chat
    }

    pub const fn group(&self) -> &GroupModule {
        &self.group
    }

    pub const fn profile(&self) -> &ProfileModule {
        &self.profile
    }

    pub const fn label(&self) -> &LabelModule {
        &self.label
    }

    pub const fn proxy(&self) -> &ProxyModule {
        &self.proxy
    }

    pub const fn integrations(&self) -> &IntegrationsModule {
        &self.integrations
    }

    pub const fn call(&self) -> &CallModule {
        &self.call
    }
}

impl std::fmt::Debug for EvolutionApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvolutionApi")
            .field("base_url", &self.config.as_ref().map(|c| c.base_url.as_str()))
            .finish_non_exhaustive()
    }
}
