//! Cross-script symbol table for the module rewriter.
//!
//! Holds the two pieces of state that outlive a single AST traversal: the
//! process-lifetime [`GlobalRewriteState`] (every declared namespace, shared
//! by every script in one compilation) and the per-script
//! [`ScriptDescription`] that Recorder fills in and Updater consumes.

mod export;
mod root_id;
mod script;
mod state;

pub use export::{DeclKind, ExportDefinition};
pub use root_id::RootId;
pub use script::{exported_namespace_of, PublishedModule, ScriptDescription};
pub use state::{GlobalRewriteState, NamespaceConflict, UnrecognizedRequire};
