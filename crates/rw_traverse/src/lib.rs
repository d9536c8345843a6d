//! Traversal support shared by Recorder and Updater.
//!
//! Rather than a generic per-node-type visitor trait, Recorder and Updater
//! are hand-written recursive-descent functions (§9 allows folding the two
//! phases into one visitor type; here they stay separate functions but share
//! this context). [`TraverseCtx`] carries the ancestor/shadow-scope stacks a
//! single global mutable pass would otherwise need as dynamic-scope state;
//! [`StatementEdits`] lets a traversal queue structural edits to the list it
//! is currently iterating over instead of mutating it in place mid-walk.

mod ctx;
mod edits;

pub use ctx::{declare_block_locals, AncestorKind, TraverseCtx};
pub use edits::StatementEdits;
