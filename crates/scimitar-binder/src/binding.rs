//! Binding descriptors.
//!
//! A [`Binding`] is one annotated member or method as reported by the
//! collection phase. Descriptors are immutable once built; `(name, owner)`
//! identifies a binding within one collection pass.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::hierarchy::TypeId;

/// Role a lifecycle method plays inside its method triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleRole {
    Loading,
    Success,
    Error,
}

impl LifecycleRole {
    /// Roles in callback contract order.
    pub const ALL: [Self; 3] = [Self::Loading, Self::Success, Self::Error];

    /// Name of the `StateObserver` callback this role forwards from.
    pub const fn callback_name(self) -> &'static str {
        match self {
            Self::Loading => "onLoading",
            Self::Success => "onSuccess",
            Self::Error => "onError",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LifecycleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BindingKind {
    ViewModel,
    Observer,
    Factory { use_as_default: bool },
    LifecycleMethod { role: LifecycleRole },
}

impl BindingKind {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::ViewModel => "view model",
            Self::Observer => "observer",
            Self::Factory { .. } => "factory",
            Self::LifecycleMethod { .. } => "lifecycle method",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    pub name: String,
    pub owner: TypeId,
    pub kind: BindingKind,
    /// Declared type token: the member type for view models, the data
    /// parameter type for success methods.
    pub declared_type: Option<String>,
}

impl Binding {
    fn new(name: impl Into<String>, owner: TypeId, kind: BindingKind) -> Self {
        Self {
            name: name.into(),
            owner,
            kind,
            declared_type: None,
        }
    }

    pub fn view_model(
        name: impl Into<String>,
        owner: TypeId,
        declared_type: impl Into<String>,
    ) -> Self {
        Self::new(name, owner, BindingKind::ViewModel).with_declared_type(declared_type)
    }

    pub fn observer(name: impl Into<String>, owner: TypeId) -> Self {
        Self::new(name, owner, BindingKind::Observer)
    }

    pub fn factory(name: impl Into<String>, owner: TypeId, use_as_default: bool) -> Self {
        Self::new(name, owner, BindingKind::Factory { use_as_default })
    }

    pub fn lifecycle(name: impl Into<String>, owner: TypeId, role: LifecycleRole) -> Self {
        Self::new(name, owner, BindingKind::LifecycleMethod { role })
    }

    pub fn with_declared_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = Some(declared_type.into());
        self
    }

    /// Whether this is a factory marked as the fallback for subclasses.
    pub const fn use_as_default(&self) -> bool {
        matches!(
            self.kind,
            BindingKind::Factory {
                use_as_default: true
            }
        )
    }

    pub const fn role(&self) -> Option<LifecycleRole> {
        match self.kind {
            BindingKind::LifecycleMethod { role } => Some(role),
            _ => None,
        }
    }

    pub(crate) fn expect_kind(
        self,
        expected: &'static str,
        matches: impl FnOnce(BindingKind) -> bool,
    ) -> Result<Self, BindingError> {
        if matches(self.kind) {
            Ok(self)
        } else {
            Err(BindingError::UnexpectedKind {
                name: self.name,
                expected,
                found: self.kind.describe(),
            })
        }
    }
}

/// Shape errors raised while accumulating bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("binding '{name}' is a {found}, expected a {expected}")]
    UnexpectedKind {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Insert keyed on `(name, owner)`; the first declaration wins.
pub(crate) fn push_unique(bindings: &mut Vec<Binding>, binding: Binding) -> bool {
    if bindings
        .iter()
        .any(|existing| existing.name == binding.name && existing.owner == binding.owner)
    {
        debug!(name = %binding.name, "duplicate binding ignored");
        return false;
    }
    bindings.push(binding);
    true
}
