//! Source positions and interned text shared by every rewriter crate.

mod atom;
mod span;

pub use atom::Atom;
pub use span::Span;
