//! Diagnostics produced by the module rewriter.
//!
//! Mirrors this codebase's own diagnostics crate: a single struct built on
//! `miette`, with `::error`/`::warn` constructors and a fluent
//! `.with_help()`/`.with_label()` builder, plus a stable string `code()` so
//! tooling and tests can match on diagnostics without parsing message text.

mod code;
mod sink;

pub use code::DiagnosticCode;
pub use sink::{CollectingSink, DiagnosticsSink};

use miette::{Diagnostic, LabeledSpan, Severity};
use rw_span::Span;

/// One diagnostic raised by the rewriter.
#[derive(Debug, Clone)]
pub struct RewriterDiagnostic {
    code: DiagnosticCode,
    severity: Severity,
    message: String,
    help: Option<String>,
    labels: Vec<LabeledSpan>,
}

impl RewriterDiagnostic {
    #[must_use]
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            message: message.into(),
            help: None,
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn warn(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message: message.into(),
            help: None,
            labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, span: Span) -> Self {
        self.labels.push(LabeledSpan::underline(span));
        self
    }

    /// Whether this diagnostic is disabled by default (§6:
    /// "`USELESS_USE_STRICT_DIRECTIVE` is disabled by default").
    #[must_use]
    pub fn is_enabled_by_default(&self) -> bool {
        self.code != DiagnosticCode::UselessUseStrictDirective
    }

    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Whether the compiler should treat this batch of diagnostics as
    /// halting: §7, "After Recorder finishes, if the compiler indicates
    /// halting errors, Updater is skipped." An error-severity diagnostic
    /// always halts; a warning never does.
    #[must_use]
    pub fn is_halting(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for RewriterDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RewriterDiagnostic {}

impl Diagnostic for RewriterDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(self.code.as_str()))
    }

    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.help.as_ref().map(|h| Box::new(h.as_str()) as Box<dyn std::fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.labels.is_empty() {
            None
        } else {
            Some(Box::new(self.labels.iter().cloned()))
        }
    }
}
