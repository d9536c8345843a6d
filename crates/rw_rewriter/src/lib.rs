//! Rewrites `goog.module`/`goog.provide` namespace declarations into flat,
//! fully-qualified names (binary namespaces and content-prefixed private
//! bindings), inlining aliases and runtime-checking destructuring imports
//! along the way.
//!
//! The pass runs in four stages over one compilation batch (§2, §7):
//! [`unwrap::unwrap_load_modules`] turns `goog.loadModule` calls into
//! synthetic module bodies, [`recorder::record_program`] classifies every
//! script and builds the cross-script [`GlobalRewriteState`],
//! [`unresolved::report_unrecognized_requires`] reports any `goog.require`
//! that never resolved, and — only if nothing halting was reported —
//! [`updater::update_program`] rewrites the AST using the now-complete
//! state.

mod change_tracker;
mod jsdoc_rewrite;
mod options;
mod recorder;
mod unresolved;
mod unwrap;
mod updater;

pub use change_tracker::{ChangeTracker, LoggingChangeTracker, NoopChangeTracker};
pub use options::{RewriterOptions, SymbolTableSink};

use rw_ast::Program;
use rw_diagnostics::{CollectingSink, DiagnosticsSink, RewriterDiagnostic};
use rw_semantic::{GlobalRewriteState, RootId};

/// The result of running [`Rewriter::run`]: whether Updater actually ran,
/// and every diagnostic collected along the way.
#[derive(Debug)]
pub struct RewriterOutput {
    pub diagnostics: Vec<RewriterDiagnostic>,
    pub updated: bool,
}

/// Entry point tying the four stages together over one compilation batch,
/// owning the [`GlobalRewriteState`] across calls so a driver can run a
/// whole program once and then hot-swap individual scripts afterwards (§3
/// Lifecycle).
#[derive(Default)]
pub struct Rewriter {
    state: GlobalRewriteState,
}

impl Rewriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &GlobalRewriteState {
        &self.state
    }

    /// Runs all four stages over `program` in place. Updater is skipped
    /// (§7: "if the compiler indicates halting errors, Updater is skipped")
    /// whenever Recorder or the unrecognized-require reporter raised an
    /// error-severity diagnostic; `RewriterOutput::updated` reflects that.
    pub fn run(&mut self, program: &mut Program, options: &RewriterOptions, tracker: &mut dyn ChangeTracker) -> RewriterOutput {
        let mut sink = CollectingSink::new();
        let updated = self.run_with_sink(program, options, tracker, &mut sink);
        RewriterOutput { diagnostics: sink.into_diagnostics(), updated }
    }

    /// Same as [`Self::run`] but reports through a caller-supplied sink
    /// instead of collecting diagnostics in memory, for a driver that wants
    /// its own reporter (§2).
    pub fn run_with_sink(&mut self, program: &mut Program, options: &RewriterOptions, tracker: &mut dyn ChangeTracker, sink: &mut dyn DiagnosticsSink) -> bool {
        unwrap::unwrap_load_modules(program, tracker);
        let descriptions = recorder::record_program(program, &mut self.state, options, sink, tracker);
        unresolved::report_unrecognized_requires(program, &mut self.state, sink);
        if sink.has_halting_errors() {
            return false;
        }
        updater::update_program(program, descriptions, &self.state, tracker, sink);
        true
    }

    /// Withdraws a single script's registrations so it can be re-recorded
    /// and re-updated on its own (§3 Lifecycle: hot-swap). The caller is
    /// responsible for re-running [`Self::run_with_sink`] against just that
    /// script's `Program` afterwards.
    pub fn forget_script(&mut self, root_id: RootId) {
        self.state.remove_script_root(root_id);
    }
}
