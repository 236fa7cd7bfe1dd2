use scimitar_common::{Diagnostic, diagnostic_codes, diagnostic_messages, format_message};
use thiserror::Error;

/// Failures that abort synthesis for a single target type.
///
/// Sibling target types are unaffected; callers collect these per target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// A method triple with no populated role reached the synthesizer.
    /// The collection phase never builds one, so this is an internal fault.
    #[error("lifecycle state '{state_id}' has no bound methods")]
    EmptyMethodTriple { state_id: String },

    /// A view-model binding without the declared type its provider call needs.
    #[error("view model '{member}' has no declared type")]
    MissingViewModelType { member: String },

    /// Several candidate factories under `AmbiguityPolicy::Deny`.
    #[error("view model '{view_model}' has {} candidate factories in '{owner}'", factories.len())]
    AmbiguousFactory {
        view_model: String,
        owner: String,
        factories: Vec<String>,
    },
}

impl SynthesisError {
    /// Report form for the diagnostics layer.
    pub fn to_diagnostic(&self, target: &str) -> Diagnostic {
        match self {
            Self::EmptyMethodTriple { state_id } => Diagnostic::error(
                target,
                state_id.as_str(),
                format_message(diagnostic_messages::EMPTY_METHOD_TRIPLE, &[state_id.as_str()]),
                diagnostic_codes::EMPTY_METHOD_TRIPLE,
            ),
            Self::MissingViewModelType { member } => Diagnostic::error(
                target,
                member.as_str(),
                format_message(diagnostic_messages::MISSING_VIEW_MODEL_TYPE, &[member.as_str()]),
                diagnostic_codes::MISSING_VIEW_MODEL_TYPE,
            ),
            Self::AmbiguousFactory {
                view_model,
                owner,
                factories,
            } => {
                let count = factories.len().to_string();
                let chosen = factories.first().map_or("", String::as_str);
                let message = format_message(
                    diagnostic_messages::AMBIGUOUS_FACTORY_BINDING,
                    &[view_model.as_str(), count.as_str(), owner.as_str(), chosen],
                );
                factories.iter().skip(1).fold(
                    Diagnostic::error(
                        target,
                        view_model.as_str(),
                        message,
                        diagnostic_codes::AMBIGUOUS_FACTORY_BINDING,
                    ),
                    |diag, other| {
                        diag.with_related(owner.as_str(), other.as_str(), "also declared here")
                    },
                )
            }
        }
    }
}
