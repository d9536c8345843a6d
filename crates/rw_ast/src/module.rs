use rw_span::{Atom, Span};

use crate::statement::Statement;

/// A full compilation: every script handed to the rewriter in one batch.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub scripts: Vec<ScriptUnit>,
}

/// One source file ("script"), at script scope.
///
/// A script that calls `goog.module(...)` or `goog.provide(...)` as one of
/// its direct statements is, for the purposes of this AST, indistinguishable
/// from a plain script until the Recorder classifies it — see
/// `rw_semantic::ScriptDescription`.
#[derive(Debug, Clone, Default)]
pub struct ScriptUnit {
    pub span: Span,
    pub directives: Vec<Atom>,
    pub statements: Vec<Statement>,
}

impl ScriptUnit {
    #[must_use]
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { span, directives: Vec::new(), statements }
    }

    pub fn set_directives(&mut self, directives: Vec<Atom>) {
        self.directives = directives;
    }

    pub fn ensure_use_strict(&mut self) -> crate::statement::UseStrictOutcome {
        if self.directives.iter().any(|d| d.as_str() == "use strict") {
            crate::statement::UseStrictOutcome::AlreadyPresent
        } else {
            self.directives.push(Atom::new("use strict"));
            crate::statement::UseStrictOutcome::Added
        }
    }
}

/// A synthetic module body, produced by the Unwrapper from
/// `goog.loadModule(function(exports){ … return exports; })` (§4.1). It is
/// attached directly under the owning script as a [`Statement::ModuleBody`]
/// until the Updater flattens it back into the script at module-body exit
/// (§4.3).
#[derive(Debug, Clone, Default)]
pub struct ModuleBody {
    pub span: Span,
    pub statements: Vec<Statement>,
}

impl ModuleBody {
    #[must_use]
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { span, statements }
    }
}
