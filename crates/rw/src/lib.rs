//! Public facade: re-exports the AST, the pass, and the cross-script state
//! so a driver only needs this one crate on its dependency list.

pub use rw_ast as ast;
pub use rw_diagnostics as diagnostics;
pub use rw_rewriter::{ChangeTracker, LoggingChangeTracker, NoopChangeTracker, Rewriter, RewriterOptions, RewriterOutput, SymbolTableSink};
pub use rw_semantic as semantic;
pub use rw_span as span;
