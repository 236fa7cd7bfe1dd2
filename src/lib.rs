//! Scimitar: generated view-model and state-observer bindings.
//!
//! The pipeline is split across workspace crates and re-exported here:
//!
//! - [`common`]: diagnostics and limits
//! - [`binder`]: binding model, method triples, and factory resolution
//! - [`emitter`]: observer synthesis, initializer assembly, Java printing
//!
//! This crate adds the binding manifest loader and the `scimitar` CLI.

pub use scimitar_binder as binder;
pub use scimitar_common as common;
pub use scimitar_emitter as emitter;

pub use scimitar_binder::{BindingConfig, BindingSet, TypeArena, TypeHierarchy};
pub use scimitar_emitter::{IRPrinter, InitializerSpec, SynthesisError, build_initializer};

pub mod cli;
pub mod manifest;
pub mod tracing_config;
