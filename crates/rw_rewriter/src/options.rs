use rw_ast::Identifier;
use rw_span::{Atom, Span};

/// The external collaborator of §6: "a consumer that receives references to
/// `goog.module` and its string argument nodes before they are removed."
pub trait SymbolTableSink {
    fn record_module_declaration(&mut self, namespace: &Atom, name_node: &Identifier, span: Span);
}

/// The one piece of real configuration spec.md implies (§5): whether the
/// stylistic `USELESS_USE_STRICT_DIRECTIVE` diagnostic is enabled, and an
/// optional symbol-table sink. Mirrors this codebase's `*Config` structs
/// handed to a transform plugin's constructor rather than read from the
/// environment.
#[derive(Default)]
pub struct RewriterOptions {
    pub(crate) report_useless_use_strict: bool,
    pub(crate) symbol_table_sink: Option<Box<dyn SymbolTableSink>>,
}

impl RewriterOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_useless_use_strict_reporting(mut self, enabled: bool) -> Self {
        self.report_useless_use_strict = enabled;
        self
    }

    #[must_use]
    pub fn with_symbol_table_sink(mut self, sink: Box<dyn SymbolTableSink>) -> Self {
        self.symbol_table_sink = Some(sink);
        self
    }
}

impl std::fmt::Debug for RewriterOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriterOptions")
            .field("report_useless_use_strict", &self.report_useless_use_strict)
            .field("symbol_table_sink", &self.symbol_table_sink.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_disable_use_strict_reporting() {
        let options = RewriterOptions::new();
        assert!(!options.report_useless_use_strict);
        assert!(options.symbol_table_sink.is_none());
    }
}
