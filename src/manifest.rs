//! Binding manifest: the collection phase's output as JSON.
//!
//! A manifest lists declared types with their superclass and the bindings
//! declared on each. Loading it produces the shared type table, the shared
//! factory map, and one [`BindingSet`] per type that has anything to bind.
//!
//! ```json
//! {
//!   "config": { "provider": "android-x" },
//!   "types": [
//!     { "name": "com.example.BaseActivity",
//!       "factories": [{ "name": "factory", "use_as_default": true }] },
//!     { "name": "com.example.MainActivity",
//!       "superclass": "com.example.BaseActivity",
//!       "view_models": [{ "name": "viewModel", "type": "com.example.UserViewModel" }],
//!       "methods": [{ "name": "showUsers", "state": "users", "role": "success",
//!                     "data_type": "com.example.User" }] }
//!   ]
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use scimitar_binder::{
    Binding, BindingConfig, BindingError, BindingSet, FactoryMap, LifecycleRole, TypeArena,
    TypeId,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed manifest")]
    Parse(#[from] serde_json::Error),
    #[error("type '{0}' is declared more than once")]
    DuplicateType(String),
    #[error("too many types: no id left for '{0}'")]
    TooManyTypes(String),
    #[error("invalid binding on '{ty}'")]
    Binding {
        ty: String,
        #[source]
        source: BindingError,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub config: BindingConfig,
    pub types: Vec<TypeDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub factories: Vec<FactoryDecl>,
    #[serde(default)]
    pub view_models: Vec<ViewModelDecl>,
    #[serde(default)]
    pub observers: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactoryDecl {
    pub name: String,
    #[serde(default)]
    pub use_as_default: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewModelDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MethodDecl {
    pub name: String,
    /// Lifecycle-state id shared by the methods of one triple.
    pub state: String,
    pub role: LifecycleRole,
    #[serde(default)]
    pub data_type: Option<String>,
}

/// Everything one synthesis pass needs, built from a manifest.
#[derive(Debug)]
pub struct Collected {
    pub types: TypeArena,
    pub factories: Arc<FactoryMap>,
    pub sets: Vec<BindingSet>,
}

impl Manifest {
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Build the type table, the shared factory map, and the binding sets.
    /// `config` applies to every binding set.
    pub fn collect(&self, config: &BindingConfig) -> Result<Collected, ManifestError> {
        let mut types = TypeArena::new();
        let mut seen = FxHashSet::default();
        let mut ids = Vec::with_capacity(self.types.len());
        for decl in &self.types {
            if !seen.insert(decl.name.as_str()) {
                return Err(ManifestError::DuplicateType(decl.name.clone()));
            }
            ids.push(alloc(&mut types, &decl.name)?);
        }
        // Superclasses may be declared later in the list or not at all.
        for (decl, &id) in self.types.iter().zip(&ids) {
            let superclass = match decl.superclass.as_deref() {
                Some(name) => Some(alloc(&mut types, name)?),
                None => None,
            };
            types.set_superclass(id, superclass);
        }

        let mut factories = FactoryMap::new();
        for (decl, &id) in self.types.iter().zip(&ids) {
            factories.declare_type(id);
            for factory in &decl.factories {
                factories
                    .declare(Binding::factory(
                        factory.name.as_str(),
                        id,
                        factory.use_as_default,
                    ))
                    .map_err(|source| binding_error(decl, source))?;
            }
        }
        let factories = Arc::new(factories);

        let mut sets = Vec::new();
        for (decl, &id) in self.types.iter().zip(&ids) {
            let set = Self::collect_set(decl, id, config, &factories)?;
            if set.is_empty() {
                continue;
            }
            sets.push(set);
        }

        debug!(
            types = types.len(),
            targets = sets.len(),
            "collected binding manifest"
        );
        Ok(Collected {
            types,
            factories,
            sets,
        })
    }

    fn collect_set(
        decl: &TypeDecl,
        id: TypeId,
        config: &BindingConfig,
        factories: &Arc<FactoryMap>,
    ) -> Result<BindingSet, ManifestError> {
        let mut set = BindingSet::new(id, config.clone());
        set.set_factories(Arc::clone(factories));

        for vm in &decl.view_models {
            set.add_view_model(Binding::view_model(vm.name.as_str(), id, vm.ty.as_str()))
                .map_err(|source| binding_error(decl, source))?;
        }
        for observer in &decl.observers {
            set.add_observer(Binding::observer(observer.as_str(), id))
                .map_err(|source| binding_error(decl, source))?;
        }
        for method in &decl.methods {
            let mut binding = Binding::lifecycle(method.name.as_str(), id, method.role);
            if let Some(data_type) = &method.data_type {
                binding = binding.with_declared_type(data_type.as_str());
            }
            let displaced = set
                .add_method(method.state.as_str(), binding)
                .map_err(|source| binding_error(decl, source))?;
            if let Some(displaced) = displaced {
                debug!(
                    target_type = %decl.name,
                    state = %method.state,
                    replaced = %displaced.name,
                    "duplicate lifecycle role, last declaration wins"
                );
            }
        }
        Ok(set)
    }
}

fn alloc(types: &mut TypeArena, name: &str) -> Result<TypeId, ManifestError> {
    types
        .alloc(name)
        .ok_or_else(|| ManifestError::TooManyTypes(name.to_string()))
}

fn binding_error(decl: &TypeDecl, source: BindingError) -> ManifestError {
    ManifestError::Binding {
        ty: decl.name.clone(),
        source,
    }
}

#[cfg(test)]
#[path = "tests/manifest_tests.rs"]
mod tests;
