//! Initializer assembly.
//!
//! Combines every binding of one target type into a single initializer that
//! takes the target instance as its only parameter:
//!
//! ```text
//! public MainActivity_Binding(MainActivity target) {
//!     target.viewModel = ViewModelProviders.of(target, target.factory).get(UserViewModel.class);
//!     target.stateObserver = new StateObserver<User>() { ... };
//! }
//! ```
//!
//! View models come first, in declaration order, then one observer
//! assignment per lifecycle-state id in registry order. Running the build
//! twice over the same binding set yields identical output.

use scimitar_binder::{
    AmbiguityPolicy, Binding, BindingSet, FactoryLookup, FactoryResolution, FactorySource,
    TypeHierarchy,
};
use scimitar_common::{
    Diagnostic, DiagnosticCategory, diagnostic_codes, diagnostic_messages, format_message,
};
use serde::Serialize;
use tracing::debug;

use super::ir::{IRNode, IRParam, IRType};
use super::observer::{DispatchSpec, synthesize};
use crate::error::SynthesisError;

pub const BINDING_CLASS_SUFFIX: &str = "_Binding";
const GENERATED_COMMENT: &str = "Generated by scimitar. Do not modify!";

/// Backend-agnostic initializer for one target type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitializerSpec {
    pub target_type: IRType,
    pub parameter: IRParam,
    pub statements: Vec<IRNode>,
    /// Dispatch objects referenced by the observer assignments, in order.
    pub dispatches: Vec<DispatchSpec>,
    /// Non-fatal findings for the diagnostics layer.
    pub diagnostics: Vec<Diagnostic>,
}

impl InitializerSpec {
    /// Simple name of the generated class, e.g. `MainActivity_Binding`.
    /// Nested targets join their class path with `$`: `Outer$Inner_Binding`.
    pub fn binding_class_name(&self) -> String {
        format!(
            "{}{BINDING_CLASS_SUFFIX}",
            self.target_type.class_path().replace('.', "$")
        )
    }

    pub fn to_constructor_ir(&self) -> IRNode {
        IRNode::Constructor {
            class_name: self.binding_class_name(),
            parameters: vec![self.parameter.clone()],
            body: self.statements.clone(),
        }
    }

    /// Generated unit wrapping the initializer, placed in the target's package.
    pub fn to_class_ir(&self) -> IRNode {
        IRNode::ClassDecl {
            package: self.target_type.package().to_string(),
            name: self.binding_class_name(),
            members: vec![
                IRNode::Comment(GENERATED_COMMENT.to_string()),
                self.to_constructor_ir(),
            ],
        }
    }
}

/// Build the initializer for `set`, resolving factories against `hierarchy`.
pub fn build_initializer(
    set: &BindingSet,
    hierarchy: &dyn TypeHierarchy,
) -> Result<InitializerSpec, SynthesisError> {
    let config = set.config();
    let target_name = hierarchy.name_of(set.target());
    debug!(
        target_type = target_name,
        view_models = set.view_models().len(),
        method_triples = set.methods().len(),
        "build initializer"
    );

    let provider = IRType::named(config.provider.provider_class());
    let resolver = set.factory_resolver(hierarchy);
    let target = || IRNode::id(config.target_param.as_str());

    let mut statements = Vec::new();
    let mut diagnostics = Vec::new();

    for view_model in set.view_models() {
        let declared_type = view_model.declared_type.as_deref().ok_or_else(|| {
            SynthesisError::MissingViewModelType {
                member: view_model.name.clone(),
            }
        })?;

        let resolution = match resolver.lookup(view_model) {
            FactoryLookup::Found(resolution) => Some(resolution),
            FactoryLookup::NotFound { .. } => None,
            FactoryLookup::Aborted { at } => {
                diagnostics.push(Diagnostic::warning(
                    target_name,
                    view_model.name.as_str(),
                    format_message(
                        diagnostic_messages::HIERARCHY_WALK_ABORTED,
                        &[view_model.name.as_str(), hierarchy.name_of(at)],
                    ),
                    diagnostic_codes::HIERARCHY_WALK_ABORTED,
                ));
                None
            }
        };

        let mut of_args = vec![target()];
        if let Some(resolution) = resolution {
            if resolution.is_ambiguous() {
                let err = ambiguity_error(set, hierarchy, view_model, &resolution);
                match config.ambiguity {
                    AmbiguityPolicy::Deny => return Err(err),
                    AmbiguityPolicy::Warn => {
                        let mut diag = err.to_diagnostic(target_name);
                        diag.category = DiagnosticCategory::Warning;
                        diagnostics.push(diag);
                    }
                }
            }
            of_args.push(IRNode::prop(target(), resolution.factory.name.as_str()));
        }

        let provided = IRNode::call(
            IRNode::static_call(provider.clone(), "of", of_args),
            "get",
            vec![IRNode::class_literal(declared_type)],
        );
        statements.push(IRNode::expr_stmt(IRNode::assign(
            IRNode::prop(target(), view_model.name.as_str()),
            provided,
        )));
    }

    let mut dispatches = Vec::with_capacity(set.methods().len());
    for (state_id, triple) in set.methods().iter() {
        let dispatch = synthesize(state_id, triple, &config.target_param)?;
        statements.push(IRNode::expr_stmt(IRNode::assign(
            IRNode::prop(target(), config.observer_slot.as_str()),
            dispatch.to_ir(),
        )));
        dispatches.push(dispatch);
    }

    Ok(InitializerSpec {
        target_type: IRType::named(target_name),
        parameter: IRParam::new(config.target_param.as_str(), IRType::named(target_name)),
        statements,
        dispatches,
        diagnostics,
    })
}

/// Candidates sorted by name, so the first entry is the one that was used.
fn ambiguity_error(
    set: &BindingSet,
    hierarchy: &dyn TypeHierarchy,
    view_model: &Binding,
    resolution: &FactoryResolution<'_>,
) -> SynthesisError {
    let (scope, defaults_only) = match resolution.source {
        FactorySource::Local => (view_model.owner, false),
        FactorySource::Inherited { ancestor, .. } => (ancestor, true),
    };
    let mut factories: Vec<String> = set
        .factories()
        .factories_of(scope)
        .iter()
        .filter(|factory| !defaults_only || factory.use_as_default())
        .map(|factory| factory.name.clone())
        .collect();
    factories.sort();

    SynthesisError::AmbiguousFactory {
        view_model: view_model.name.clone(),
        owner: hierarchy.name_of(scope).to_string(),
        factories,
    }
}

#[cfg(test)]
#[path = "../../tests/initializer.rs"]
mod tests;
