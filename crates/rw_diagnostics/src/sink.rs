use crate::RewriterDiagnostic;

/// The external collaborator of §2: "receives structured errors; identified
/// by a stable key and a parameterized message." The rewriter is generic
/// over this trait so a driver can redirect diagnostics to its own
/// reporter instead of collecting them in memory.
pub trait DiagnosticsSink {
    fn report(&mut self, diagnostic: RewriterDiagnostic);

    /// Whether any diagnostic reported so far is halting (§7): if so, the
    /// Updater phase must be skipped.
    fn has_halting_errors(&self) -> bool;
}

/// The default sink: collects every diagnostic in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Vec<RewriterDiagnostic>,
}

impl CollectingSink {
    #[must_use]
    pub const fn new() -> Self {
        Self { diagnostics: Vec::new() }
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[RewriterDiagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<RewriterDiagnostic> {
        self.diagnostics
    }
}

impl DiagnosticsSink for CollectingSink {
    fn report(&mut self, diagnostic: RewriterDiagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn has_halting_errors(&self) -> bool {
        self.diagnostics.iter().any(RewriterDiagnostic::is_halting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::DiagnosticCode;

    #[test]
    fn halting_error_is_detected() {
        let mut sink = CollectingSink::new();
        assert!(!sink.has_halting_errors());
        sink.report(RewriterDiagnostic::error(DiagnosticCode::DuplicateModule, "dup"));
        assert!(sink.has_halting_errors());
    }

    #[test]
    fn warnings_alone_do_not_halt() {
        let mut sink = CollectingSink::new();
        sink.report(RewriterDiagnostic::warn(
            DiagnosticCode::UselessUseStrictDirective,
            "redundant",
        ));
        assert!(!sink.has_halting_errors());
    }
}
