//! Lifecycle method triples.
//!
//! Methods annotated for the same lifecycle-state id are grouped into one
//! [`MethodTriple`]; each id later becomes one dispatch object.

use indexmap::IndexMap;
use tracing::debug;

use crate::binding::{Binding, BindingError, BindingKind, LifecycleRole};

/// Up to one method per lifecycle role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodTriple {
    pub loading: Option<Binding>,
    pub success: Option<Binding>,
    pub error: Option<Binding>,
}

impl MethodTriple {
    pub const fn get(&self, role: LifecycleRole) -> Option<&Binding> {
        match role {
            LifecycleRole::Loading => self.loading.as_ref(),
            LifecycleRole::Success => self.success.as_ref(),
            LifecycleRole::Error => self.error.as_ref(),
        }
    }

    /// Store `binding` under `role`, returning the binding it displaced.
    pub fn set(&mut self, role: LifecycleRole, binding: Binding) -> Option<Binding> {
        let slot = match role {
            LifecycleRole::Loading => &mut self.loading,
            LifecycleRole::Success => &mut self.success,
            LifecycleRole::Error => &mut self.error,
        };
        slot.replace(binding)
    }

    /// Populated roles in contract order (loading, success, error).
    pub fn iter(&self) -> impl Iterator<Item = (LifecycleRole, &Binding)> {
        LifecycleRole::ALL
            .into_iter()
            .filter_map(|role| self.get(role).map(|binding| (role, binding)))
    }

    pub fn populated(&self) -> usize {
        self.iter().count()
    }

    pub const fn is_empty(&self) -> bool {
        self.loading.is_none() && self.success.is_none() && self.error.is_none()
    }
}

/// Lifecycle-state id -> method triple, in first-declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodRegistry {
    entries: IndexMap<String, MethodTriple>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a lifecycle method under `id`. The role comes from the binding's
    /// kind. Returns the method previously bound to the same role, which the
    /// collection layer should report as a duplicate.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        binding: Binding,
    ) -> Result<Option<Binding>, BindingError> {
        let binding = binding.expect_kind("lifecycle method", |kind| {
            matches!(kind, BindingKind::LifecycleMethod { .. })
        })?;
        let Some(role) = binding.role() else {
            return Ok(None);
        };
        let id = id.into();
        debug!(id = %id, role = %role, method = %binding.name, "bind lifecycle method");
        Ok(self.entries.entry(id).or_default().set(role, binding))
    }

    /// Install a triple assembled elsewhere, replacing any entry under `id`.
    pub fn insert_triple(&mut self, id: impl Into<String>, triple: MethodTriple) {
        self.entries.insert(id.into(), triple);
    }

    pub fn get(&self, id: &str) -> Option<&MethodTriple> {
        self.entries.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MethodTriple)> {
        self.entries.iter().map(|(id, triple)| (id.as_str(), triple))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/methods_tests.rs"]
mod tests;
