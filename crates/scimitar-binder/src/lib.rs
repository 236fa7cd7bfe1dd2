//! Binding model and resolution for the scimitar generator.
//!
//! The collection phase (annotation scanning, or a manifest) fills a
//! [`BindingSet`] per target type. This crate owns everything that is decided
//! before any code is synthesized:
//!
//! - **Descriptors**: [`Binding`] values naming a member or method and its kind
//! - **Hierarchy**: opaque [`TypeId`] handles and the [`TypeHierarchy`] query
//! - **Method triples**: loading/success/error methods grouped per state id
//! - **Factory resolution**: local scope first, then the nearest
//!   `use_as_default` factory up the ancestor chain

pub mod binding;
pub use binding::{Binding, BindingError, BindingKind, LifecycleRole};

pub mod hierarchy;
pub use hierarchy::{TypeArena, TypeHierarchy, TypeId};

pub mod methods;
pub use methods::{MethodRegistry, MethodTriple};

pub mod factory;
pub use factory::{FactoryLookup, FactoryMap, FactoryResolution, FactoryResolver, FactorySource};

mod binding_set;
pub use binding_set::{AmbiguityPolicy, BindingConfig, BindingSet, ProviderFlavor};
