use std::{fmt, rc::Rc, sync::Arc};

use crate::{
    entities::ProviderKind,
    gateways::{
        geocode::{GeocodingProvider, ProviderError},
        http::HttpTransport,
    },
    settings::{config_key, ProviderParams},
};

pub type ConstructProvider = dyn Fn(Rc<dyn HttpTransport>, &ProviderParams) -> Result<Box<dyn GeocodingProvider>, ProviderError>
    + Send
    + Sync;

/// Everything needed to set up a provider.
#[derive(Clone)]
pub struct ProviderDescriptor {
    kind: ProviderKind,
    construct: Arc<ConstructProvider>,
}

impl ProviderDescriptor {
    pub fn new<F>(kind: ProviderKind, construct: F) -> Self
    where
        F: Fn(Rc<dyn HttpTransport>, &ProviderParams) -> Result<Box<dyn GeocodingProvider>, ProviderError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            kind,
            construct: Arc::new(construct),
        }
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The parameters after the transport, in constructor order.
    pub fn required_params(&self) -> &'static [&'static str] {
        self.kind.params()
    }

    pub fn config_keys(&self) -> Vec<String> {
        self.required_params()
            .iter()
            .map(|param| config_key(self.name(), param))
            .collect()
    }

    pub fn construct(
        &self,
        transport: Rc<dyn HttpTransport>,
        params: &ProviderParams,
    ) -> Result<Box<dyn GeocodingProvider>, ProviderError> {
        (self.construct)(transport, params)
    }
}

impl fmt::Debug for ProviderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ProviderDescriptor")
            .field("kind", &self.kind)
            .field("params", &self.required_params())
            .finish_non_exhaustive()
    }
}

/// The providers that are available in this deployment.
///
/// The registry is populated once at startup and is read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    descriptors: Vec<ProviderDescriptor>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider, replacing a previous registration of the same kind.
    pub fn register(&mut self, descriptor: ProviderDescriptor) {
        match self
            .descriptors
            .iter_mut()
            .find(|d| d.kind == descriptor.kind)
        {
            Some(existing) => *existing = descriptor,
            None => self.descriptors.push(descriptor),
        }
    }

    pub fn with(mut self, descriptor: ProviderDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    pub fn get(&self, kind: ProviderKind) -> Option<&ProviderDescriptor> {
        self.descriptors.iter().find(|d| d.kind == kind)
    }

    /// Look up a provider by its name, e.g. `google_maps`.
    pub fn resolve(&self, name: &str) -> Option<&ProviderDescriptor> {
        name.trim()
            .parse::<ProviderKind>()
            .ok()
            .and_then(|kind| self.get(kind))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProviderDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
