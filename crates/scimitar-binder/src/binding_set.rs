//! Per-target binding aggregate and its configuration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::binding::{Binding, BindingError, BindingKind, push_unique};
use crate::factory::{FactoryMap, FactoryResolver};
use crate::hierarchy::{TypeHierarchy, TypeId};
use crate::methods::MethodRegistry;

/// Which `ViewModelProviders` class generated code targets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderFlavor {
    /// `androidx.lifecycle`
    AndroidX,
    /// `android.arch.lifecycle`
    #[default]
    ArchLifecycle,
}

impl ProviderFlavor {
    pub const fn from_use_androidx(use_androidx: bool) -> Self {
        if use_androidx {
            Self::AndroidX
        } else {
            Self::ArchLifecycle
        }
    }

    pub const fn package(self) -> &'static str {
        match self {
            Self::AndroidX => "androidx.lifecycle",
            Self::ArchLifecycle => "android.arch.lifecycle",
        }
    }

    pub fn provider_class(self) -> String {
        format!("{}.ViewModelProviders", self.package())
    }
}

/// What to do when a type declares more than one factory.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguityPolicy {
    /// Pick the lexicographically first factory and report a warning.
    #[default]
    Warn,
    /// Fail synthesis for the target type.
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindingConfig {
    pub provider: ProviderFlavor,
    pub ambiguity: AmbiguityPolicy,
    /// Target member that receives each synthesized dispatch object.
    pub observer_slot: String,
    /// Name of the initializer's sole parameter.
    pub target_param: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            provider: ProviderFlavor::default(),
            ambiguity: AmbiguityPolicy::default(),
            observer_slot: "stateObserver".to_string(),
            target_param: "target".to_string(),
        }
    }
}

impl BindingConfig {
    pub fn new(use_androidx: bool) -> Self {
        Self {
            provider: ProviderFlavor::from_use_androidx(use_androidx),
            ..Self::default()
        }
    }

    pub const fn with_ambiguity(mut self, ambiguity: AmbiguityPolicy) -> Self {
        self.ambiguity = ambiguity;
        self
    }

    pub fn with_observer_slot(mut self, slot: impl Into<String>) -> Self {
        self.observer_slot = slot.into();
        self
    }
}

/// Everything bound on one target type.
///
/// Filled during collection, then read-only while the initializer is built.
/// The factory map is shared with the other binding sets of the same pass.
#[derive(Debug, Clone)]
pub struct BindingSet {
    target: TypeId,
    config: BindingConfig,
    factories: Arc<FactoryMap>,
    view_models: Vec<Binding>,
    observers: Vec<Binding>,
    methods: MethodRegistry,
}

impl BindingSet {
    pub fn new(target: TypeId, config: BindingConfig) -> Self {
        Self {
            target,
            config,
            factories: Arc::new(FactoryMap::new()),
            view_models: Vec::new(),
            observers: Vec::new(),
            methods: MethodRegistry::new(),
        }
    }

    pub fn set_factories(&mut self, factories: Arc<FactoryMap>) {
        self.factories = factories;
    }

    /// Add a view-model binding. Returns `false` if it was already present.
    pub fn add_view_model(&mut self, binding: Binding) -> Result<bool, BindingError> {
        let binding =
            binding.expect_kind("view model", |kind| matches!(kind, BindingKind::ViewModel))?;
        Ok(push_unique(&mut self.view_models, binding))
    }

    /// Add an observer binding. Returns `false` if it was already present.
    pub fn add_observer(&mut self, binding: Binding) -> Result<bool, BindingError> {
        let binding =
            binding.expect_kind("observer", |kind| matches!(kind, BindingKind::Observer))?;
        Ok(push_unique(&mut self.observers, binding))
    }

    /// Add a lifecycle method under state id `id`; see [`MethodRegistry::insert`].
    pub fn add_method(
        &mut self,
        id: impl Into<String>,
        binding: Binding,
    ) -> Result<Option<Binding>, BindingError> {
        self.methods.insert(id, binding)
    }

    pub fn set_methods(&mut self, methods: MethodRegistry) {
        self.methods = methods;
    }

    pub const fn target(&self) -> TypeId {
        self.target
    }

    pub const fn config(&self) -> &BindingConfig {
        &self.config
    }

    pub fn factories(&self) -> &FactoryMap {
        &self.factories
    }

    pub fn view_models(&self) -> &[Binding] {
        &self.view_models
    }

    pub fn observers(&self) -> &[Binding] {
        &self.observers
    }

    pub const fn methods(&self) -> &MethodRegistry {
        &self.methods
    }

    /// Nothing to emit: no view models and no method triples. Observer
    /// members alone produce no statements.
    pub fn is_empty(&self) -> bool {
        self.view_models.is_empty() && self.methods.is_empty()
    }

    pub fn factory_resolver<'a>(&'a self, hierarchy: &'a dyn TypeHierarchy) -> FactoryResolver<'a> {
        FactoryResolver::new(&self.factories, hierarchy)
    }
}

#[cfg(test)]
#[path = "../tests/binding_set_tests.rs"]
mod tests;
