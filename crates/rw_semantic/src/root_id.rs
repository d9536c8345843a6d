use std::sync::atomic::{AtomicU32, Ordering};

/// Identity for a script or module-body root.
///
/// The reference implementation keys hot-swap removal by AST node identity
/// (§9: "entries are keyed by the script-root node identity"). This AST is an
/// owned tree rather than an arena of stable-address nodes, so there is no
/// pointer to compare; instead every root is stamped with one of these when
/// its `ScriptDescription` is created, and the stamp travels with it for the
/// life of the compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RootId(u32);

impl RootId {
    #[must_use]
    pub fn next() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successive_ids_are_distinct() {
        let a = RootId::next();
        let b = RootId::next();
        assert_ne!(a, b);
    }
}
