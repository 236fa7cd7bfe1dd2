use colored::Colorize;

use scimitar_common::{Diagnostic, DiagnosticCategory};
use scimitar_emitter::SynthesisError;

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub const fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(diagnostic));
        }
        out
    }

    /// `com.example.Main.vm - warning SC1001: message`, then one indented
    /// line per related location.
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let mut output = format!(
            "{} - {} {}: {}",
            location(&diagnostic.target, &diagnostic.member),
            self.format_category(diagnostic.category),
            self.format_code(diagnostic.code),
            diagnostic.message_text
        );
        for related in &diagnostic.related_information {
            output.push_str("\n    ");
            output.push_str(&location(&related.target, &related.member));
            output.push_str(": ");
            output.push_str(&related.message_text);
        }
        output
    }

    /// Report a synthesis failure for `target` as an error diagnostic.
    pub fn format_failure(&self, target: &str, error: &SynthesisError) -> String {
        self.format_diagnostic(&error.to_diagnostic(target))
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let text = match category {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Message => "message",
        };
        if !self.color {
            return text.to_string();
        }
        match category {
            DiagnosticCategory::Warning => text.yellow().to_string(),
            DiagnosticCategory::Error => text.red().to_string(),
            DiagnosticCategory::Message => text.blue().to_string(),
        }
    }

    fn format_code(&self, code: u32) -> String {
        let text = format!("SC{code}");
        if self.color {
            text.bright_black().to_string()
        } else {
            text
        }
    }
}

fn location(target: &str, member: &str) -> String {
    if member.is_empty() {
        target.to_string()
    } else {
        format!("{target}.{member}")
    }
}
