//! Code synthesis for scimitar binding sets.
//!
//! Turns a resolved [`BindingSet`](scimitar_binder::BindingSet) into an
//! [`InitializerSpec`]: provider assignments for every view model and one
//! synthesized `StateObserver` per lifecycle-state id, expressed in a small
//! backend-agnostic IR. [`IRPrinter`] renders that IR as Java source.

pub mod error;
pub use error::SynthesisError;

pub mod transforms;
pub use transforms::initializer::{InitializerSpec, build_initializer};
pub use transforms::ir::{IRMethod, IRNode, IRParam, IRType};
pub use transforms::ir_printer::IRPrinter;
pub use transforms::observer::{Callback, DispatchSpec, synthesize};
