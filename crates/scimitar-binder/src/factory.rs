//! Factory resolution.
//!
//! A view model is constructed with the factory declared in its enclosing
//! type when there is one. Otherwise the enclosing type's ancestors are
//! searched, nearest first, for a factory marked `use_as_default`.
//!
//! The [`FactoryMap`] only ever holds factories declared lexically on a type.
//! Inheritance is decided here, at lookup time.

use rustc_hash::{FxHashMap, FxHashSet};
use scimitar_common::limits::{MAX_HIERARCHY_DEPTH, VISITED_SET_CAPACITY};
use tracing::{debug, trace, warn};

use crate::binding::{Binding, BindingError, BindingKind, push_unique};
use crate::hierarchy::{TypeHierarchy, TypeId};

/// Factories declared directly on each type.
#[derive(Debug, Clone, Default)]
pub struct FactoryMap {
    by_owner: FxHashMap<TypeId, Vec<Binding>>,
}

impl FactoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a factory on its owner type. A second declaration with the
    /// same name on the same owner is ignored.
    pub fn declare(&mut self, binding: Binding) -> Result<(), BindingError> {
        let binding = binding.expect_kind("factory", |kind| {
            matches!(kind, BindingKind::Factory { .. })
        })?;
        push_unique(self.by_owner.entry(binding.owner).or_default(), binding);
        Ok(())
    }

    /// Make `ty` part of the map's domain even if it declares no factory.
    pub fn declare_type(&mut self, ty: TypeId) {
        self.by_owner.entry(ty).or_default();
    }

    pub fn factories_of(&self, ty: TypeId) -> &[Binding] {
        self.by_owner.get(&ty).map_or(&[], Vec::as_slice)
    }

    pub fn contains_type(&self, ty: TypeId) -> bool {
        self.by_owner.contains_key(&ty)
    }

    /// Number of types in the map's domain.
    pub fn len(&self) -> usize {
        self.by_owner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_owner.is_empty()
    }
}

/// Where a resolved factory came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FactorySource {
    /// Declared in the view model's own enclosing type.
    Local,
    /// A `use_as_default` factory on an ancestor, `depth` levels up.
    Inherited { ancestor: TypeId, depth: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryResolution<'a> {
    pub factory: &'a Binding,
    pub source: FactorySource,
    /// Number of equally eligible factories the pick was made from.
    pub candidates: usize,
}

impl FactoryResolution<'_> {
    /// More than one factory qualified; the pick is deterministic but the
    /// declaration is suspect and should be reported.
    pub const fn is_ambiguous(&self) -> bool {
        self.candidates > 1
    }
}

/// Full outcome of one lookup, including why nothing was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryLookup<'a> {
    Found(FactoryResolution<'a>),
    /// Chain exhausted; `visited` ancestors were inspected.
    NotFound { visited: usize },
    /// Walk stopped at `at` on a revisit or the depth limit.
    Aborted { at: TypeId },
}

impl<'a> FactoryLookup<'a> {
    pub fn found(self) -> Option<FactoryResolution<'a>> {
        match self {
            Self::Found(resolution) => Some(resolution),
            Self::NotFound { .. } | Self::Aborted { .. } => None,
        }
    }
}

/// Lexicographically smallest name wins among several candidates.
fn pick<'a>(candidates: impl Iterator<Item = &'a Binding>) -> Option<(&'a Binding, usize)> {
    let mut count = 0;
    let chosen = candidates
        .inspect(|_| count += 1)
        .min_by(|a, b| a.name.cmp(&b.name));
    chosen.map(|factory| (factory, count))
}

pub struct FactoryResolver<'a> {
    factories: &'a FactoryMap,
    hierarchy: &'a dyn TypeHierarchy,
}

impl<'a> FactoryResolver<'a> {
    pub fn new(factories: &'a FactoryMap, hierarchy: &'a dyn TypeHierarchy) -> Self {
        Self {
            factories,
            hierarchy,
        }
    }

    /// Factory to construct `view_model` with, or `None` for the
    /// factory-less provider form.
    pub fn resolve(&self, view_model: &Binding) -> Option<FactoryResolution<'a>> {
        self.lookup(view_model).found()
    }

    pub fn lookup(&self, view_model: &Binding) -> FactoryLookup<'a> {
        let owner = view_model.owner;

        if let Some((factory, candidates)) = pick(self.factories.factories_of(owner).iter()) {
            if candidates > 1 {
                warn!(
                    view_model = %view_model.name,
                    owner = self.hierarchy.name_of(owner),
                    candidates,
                    chosen = %factory.name,
                    "ambiguous local factory"
                );
            }
            debug!(view_model = %view_model.name, factory = %factory.name, "local factory");
            return FactoryLookup::Found(FactoryResolution {
                factory,
                source: FactorySource::Local,
                candidates,
            });
        }

        self.walk_ancestors(view_model, owner)
    }

    fn walk_ancestors(&self, view_model: &Binding, owner: TypeId) -> FactoryLookup<'a> {
        let mut visited: FxHashSet<TypeId> =
            FxHashSet::with_capacity_and_hasher(VISITED_SET_CAPACITY, Default::default());
        visited.insert(owner);

        let mut current = owner;
        let mut depth = 0;
        while let Some(ancestor) = self.hierarchy.ancestor_of(current) {
            depth += 1;
            if depth > MAX_HIERARCHY_DEPTH || !visited.insert(ancestor) {
                warn!(
                    view_model = %view_model.name,
                    at = self.hierarchy.name_of(ancestor),
                    depth,
                    "factory walk aborted"
                );
                return FactoryLookup::Aborted { at: ancestor };
            }
            trace!(ancestor = self.hierarchy.name_of(ancestor), depth, "visit ancestor");

            let defaults = self
                .factories
                .factories_of(ancestor)
                .iter()
                .filter(|factory| factory.use_as_default());
            if let Some((factory, candidates)) = pick(defaults) {
                debug!(
                    view_model = %view_model.name,
                    factory = %factory.name,
                    ancestor = self.hierarchy.name_of(ancestor),
                    "inherited default factory"
                );
                return FactoryLookup::Found(FactoryResolution {
                    factory,
                    source: FactorySource::Inherited { ancestor, depth },
                    candidates,
                });
            }
            current = ancestor;
        }

        debug!(view_model = %view_model.name, visited = depth, "no factory");
        FactoryLookup::NotFound { visited: depth }
    }
}

#[cfg(test)]
#[path = "../tests/factory_tests.rs"]
mod tests;
