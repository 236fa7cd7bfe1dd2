use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Message,
}

/// Stable codes for the conditions the generator reports upward.
pub mod diagnostic_codes {
    /// More than one factory declared in the view model's enclosing type.
    pub const AMBIGUOUS_FACTORY_BINDING: u32 = 1001;
    /// Factory ancestor walk stopped on a revisited type or the depth limit.
    pub const HIERARCHY_WALK_ABORTED: u32 = 1002;
    /// A lifecycle method triple reached synthesis with no populated role.
    pub const EMPTY_METHOD_TRIPLE: u32 = 1003;
    /// A view-model binding arrived without its declared type.
    pub const MISSING_VIEW_MODEL_TYPE: u32 = 1004;
}

/// Message templates keyed by the codes above. `{0}`, `{1}` are positional.
pub mod diagnostic_messages {
    pub const AMBIGUOUS_FACTORY_BINDING: &str =
        "View model '{0}' has {1} candidate factories in '{2}'; using '{3}'.";
    pub const HIERARCHY_WALK_ABORTED: &str =
        "Factory lookup for '{0}' stopped at '{1}': hierarchy is cyclic or too deep.";
    pub const EMPTY_METHOD_TRIPLE: &str =
        "Lifecycle state '{0}' has no loading, success, or error method.";
    pub const MISSING_VIEW_MODEL_TYPE: &str = "View model '{0}' has no declared type.";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnosticRelatedInformation {
    pub category: DiagnosticCategory,
    pub target: String,
    pub member: String,
    pub message_text: String,
}

/// A report attached to one target type. Formatting and source locations
/// belong to the collection layer; this only carries the facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub target: String,
    pub member: String,
    pub message_text: String,
    pub related_information: Vec<DiagnosticRelatedInformation>,
}

impl Diagnostic {
    pub fn warning(
        target: impl Into<String>,
        member: impl Into<String>,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code,
            target: target.into(),
            member: member.into(),
            message_text: message.into(),
            related_information: Vec::new(),
        }
    }

    pub fn error(
        target: impl Into<String>,
        member: impl Into<String>,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            ..Self::warning(target, member, message, code)
        }
    }

    pub fn with_related(
        mut self,
        target: impl Into<String>,
        member: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.related_information.push(DiagnosticRelatedInformation {
            category: DiagnosticCategory::Message,
            target: target.into(),
            member: member.into(),
            message_text: message.into(),
        });
        self
    }

    pub const fn is_error(&self) -> bool {
        matches!(self.category, DiagnosticCategory::Error)
    }
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_positional() {
        let text = format_message(
            diagnostic_messages::AMBIGUOUS_FACTORY_BINDING,
            &["vm", "2", "MainActivity", "alpha"],
        );
        assert_eq!(
            text,
            "View model 'vm' has 2 candidate factories in 'MainActivity'; using 'alpha'."
        );
    }

    #[test]
    fn test_related_information_is_message_category() {
        let diag = Diagnostic::warning("Main", "vm", "ambiguous", 1001).with_related(
            "Main",
            "beta",
            "also declared here",
        );
        assert!(!diag.is_error());
        assert_eq!(diag.related_information.len(), 1);
        assert_eq!(
            diag.related_information[0].category,
            DiagnosticCategory::Message
        );
    }
}
