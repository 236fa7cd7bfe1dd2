//! Observer synthesis.
//!
//! Each method triple becomes one anonymous `StateObserver<T>` whose
//! callbacks forward to the user's bound methods. Callbacks for unbound roles
//! are left out entirely; `StateObserver` supplies no-op defaults for them.
//!
//! ```text
//! new StateObserver<User>() {
//!     @Override public final void onSuccess(User data) { target.showUsers(data); }
//!     @Override public final void onError(Throwable error) { target.showError(error); }
//! }
//! ```

use scimitar_binder::{LifecycleRole, MethodTriple};
use serde::Serialize;
use tracing::debug;

use super::ir::{IRMethod, IRNode, IRParam, IRType};
use crate::error::SynthesisError;

pub const STATE_OBSERVER_TYPE: &str = "com.creations.scimitar_runtime.state.StateObserver";
pub const THROWABLE_TYPE: &str = "java.lang.Throwable";
/// Data type used when the success method does not declare one.
pub const OBJECT_TYPE: &str = "java.lang.Object";

/// One overriding callback of a dispatch object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Callback {
    pub role: LifecycleRole,
    /// Bound user method the callback forwards to.
    pub method: String,
    pub parameter: Option<IRParam>,
    /// The single forwarding statement.
    pub body: IRNode,
}

impl Callback {
    pub const fn name(&self) -> &'static str {
        self.role.callback_name()
    }

    pub fn to_ir(&self) -> IRMethod {
        IRMethod::override_final(
            self.name(),
            self.parameter.iter().cloned().collect(),
            vec![self.body.clone()],
        )
    }
}

/// Anonymous dispatch object for one lifecycle-state id.
///
/// Holds nothing but a reference to the initializer's target parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchSpec {
    pub state_id: String,
    pub data_type: IRType,
    pub callbacks: Vec<Callback>,
}

impl DispatchSpec {
    pub fn superclass(&self) -> IRType {
        IRType::generic(STATE_OBSERVER_TYPE, vec![self.data_type.clone()])
    }

    pub fn callback(&self, role: LifecycleRole) -> Option<&Callback> {
        self.callbacks.iter().find(|callback| callback.role == role)
    }

    pub fn to_ir(&self) -> IRNode {
        IRNode::AnonymousClass {
            superclass: self.superclass(),
            methods: self.callbacks.iter().map(Callback::to_ir).collect(),
        }
    }
}

/// Parameter a callback receives for `role`. `onLoading` takes none.
/// The name never shadows `target_param`.
fn callback_parameter(
    role: LifecycleRole,
    data_type: &IRType,
    target_param: &str,
) -> Option<IRParam> {
    let (name, ty) = match role {
        LifecycleRole::Loading => return None,
        LifecycleRole::Success => ("data", data_type.clone()),
        LifecycleRole::Error => ("error", IRType::named(THROWABLE_TYPE)),
    };
    Some(IRParam::new(payload_name(name, target_param), ty))
}

fn payload_name(base: &str, target_param: &str) -> String {
    let mut name = base.to_string();
    while name == target_param {
        name.push('_');
    }
    name
}

/// Build the dispatch object for `triple`, forwarding through `target_param`.
pub fn synthesize(
    state_id: &str,
    triple: &MethodTriple,
    target_param: &str,
) -> Result<DispatchSpec, SynthesisError> {
    if triple.is_empty() {
        return Err(SynthesisError::EmptyMethodTriple {
            state_id: state_id.to_string(),
        });
    }

    let data_type = triple
        .success
        .as_ref()
        .and_then(|binding| binding.declared_type.as_deref())
        .map_or_else(|| IRType::named(OBJECT_TYPE), IRType::named);

    let callbacks: Vec<Callback> = triple
        .iter()
        .map(|(role, binding)| {
            let parameter = callback_parameter(role, &data_type, target_param);
            let arguments = parameter
                .iter()
                .map(|param| IRNode::id(param.name.as_str()))
                .collect();
            let body = IRNode::expr_stmt(IRNode::call(
                IRNode::id(target_param),
                binding.name.as_str(),
                arguments,
            ));
            Callback {
                role,
                method: binding.name.clone(),
                parameter,
                body,
            }
        })
        .collect();

    debug!(
        state_id,
        callbacks = callbacks.len(),
        data_type = %data_type.qualified_name,
        "synthesized dispatch object"
    );

    Ok(DispatchSpec {
        state_id: state_id.to_string(),
        data_type,
        callbacks,
    })
}

#[cfg(test)]
#[path = "../../tests/observer.rs"]
mod tests;
